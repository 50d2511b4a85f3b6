use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::{io, time::Duration};

use telkomaset::app::{App, ViewMode};
use telkomaset::config::Config;
use telkomaset::handlers::{handle_key_event, KeyAction};
use telkomaset::logging;
use telkomaset::page::{Container, HostPage};
use telkomaset::ui::{
    self, render_assets_view, render_detail_modal, render_favorites_view, render_help_panel,
    render_status_bar, AssetsViewState, DetailViewState, FavoritesViewState, HelpPanelState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to load config, using defaults: {:#}", e);
            Config::default()
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    app.start();

    loop {
        app.tick(std::time::Instant::now());
        app.handle_sync_events();
        app.clear_expired_status();

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key_event(app, key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Continue => {}
                }
            }
        }

        // Let spawned requests make progress between frames
        tokio::task::yield_now().await;
    }
}

fn render_ui(f: &mut Frame, app: &App) {
    let theme = &app.config.theme;

    let mut constraints = vec![Constraint::Length(3)]; // Header
    if app.show_debug {
        constraints.push(Constraint::Percentage(65)); // Main content
        constraints.push(Constraint::Min(6)); // Debug panel
    } else {
        constraints.push(Constraint::Min(10));
    }
    constraints.push(Constraint::Length(3)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());
    let full_area = f.area();
    let mut chunk_index = 0;

    // Header with section tabs and the count badge
    let page = app.page();
    let tab_style = |active: bool| {
        if active {
            Style::default().fg(theme.primary()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted())
        }
    };
    let mut header_spans = vec![
        Span::styled("TelkomAset  ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Aset", tab_style(app.view_mode == ViewMode::Assets)),
        Span::raw("  "),
        Span::styled("Favorit", tab_style(app.view_mode == ViewMode::Favorites)),
    ];
    if let Some(badge) = ui::styles::badge_span(&page.badge(), theme) {
        header_spans.push(Span::raw(" "));
        header_spans.push(badge);
    }
    let header = Paragraph::new(Line::from(header_spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, chunks[chunk_index]);
    chunk_index += 1;

    let content_area = chunks[chunk_index];
    match app.view_mode {
        ViewMode::Assets => {
            let state = AssetsViewState {
                page,
                selected: app.assets_list.selected,
                filter_label: app.filter_label(),
            };
            render_assets_view(f, &state, content_area, theme);
        }
        ViewMode::Favorites => {
            let state = FavoritesViewState {
                panel: page.panel(),
                selected: app.favorites_list.selected,
                count: page.count_label(),
            };
            render_favorites_view(f, &state, content_area, theme);
        }
    }
    chunk_index += 1;

    if app.show_debug {
        let debug_text: String = app
            .debug_log
            .iter()
            .rev()
            .take(10)
            .rev()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let debug_panel = Paragraph::new(debug_text)
            .style(Style::default().fg(theme.text_muted()))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Debug Log [D: hide]")
                    .border_style(theme.border_style(false)),
            );
        f.render_widget(debug_panel, chunks[chunk_index]);
        chunk_index += 1;
    }

    let status_state = ui::StatusBarState {
        status_message: app
            .status_message
            .as_ref()
            .map(|m| (m.message.as_str(), m.is_error)),
        detail_open: app.is_detail_open(),
        filter_label: app.filter_label(),
        pending_requests: app.pending_requests,
    };
    render_status_bar(f, &status_state, chunks[chunk_index], theme);

    if let Some(asset) = page.detail() {
        let favorited = page
            .heart_in(Container::Detail, &asset.id)
            .map(|h| h.favorited)
            .unwrap_or(false);
        let state = DetailViewState {
            asset,
            favorited,
            card_format: app.favorites.card_format(),
        };
        render_detail_modal(f, &state, full_area, theme);
    }

    // Help overlay goes last so it's on top
    if app.show_help {
        let help_state = HelpPanelState {
            scroll_offset: app.help.scroll_offset,
        };
        render_help_panel(f, &help_state, full_area, theme);
    }
}
