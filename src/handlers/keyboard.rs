use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::ui::help_content_height;

#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    // Help panel - any key dismisses it (except j/k for scrolling)
    if app.show_help {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max_scroll = help_content_height().saturating_sub(10);
                if app.help.scroll_offset < max_scroll {
                    app.help.scroll_offset += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.help.scroll_offset = app.help.scroll_offset.saturating_sub(1);
            }
            _ => {
                app.show_help = false;
                app.help.scroll_offset = 0;
            }
        }
        return KeyAction::Continue;
    }

    if app.is_detail_open() {
        return handle_detail_input(app, key);
    }

    handle_normal_mode(app, key)
}

fn handle_detail_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('f') | KeyCode::Char(' ') => app.spawn_toggle(),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_detail(),
        _ => {}
    }
    KeyAction::Continue
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_view(),
        KeyCode::Char('f') | KeyCode::Char(' ') => app.spawn_toggle(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('t') => app.cycle_type_filter(),
        KeyCode::Char('r') => {
            app.set_status_info("Reloading...".to_string());
            app.reload();
        }
        KeyCode::Char('c') => app.spawn_count_refresh(),
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help.scroll_offset = 0;
        }
        KeyCode::Char('D') => app.show_debug = !app.show_debug,
        KeyCode::Esc => app.status_message = None,
        _ => {}
    }
    KeyAction::Continue
}
