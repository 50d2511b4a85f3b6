use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;

pub struct StatusBarState<'a> {
    pub status_message: Option<(&'a str, bool)>, // (message, is_error)
    pub detail_open: bool,
    pub filter_label: &'a str,
    pub pending_requests: usize,
}

fn key_hint(key: &str, action: &str, hints: &mut Vec<Span<'static>>) {
    if !hints.is_empty() {
        hints.push(Span::raw(" | "));
    }
    hints.push(Span::styled(
        key.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    hints.push(Span::raw(format!(": {}", action)));
}

pub fn render_status_bar(
    f: &mut Frame,
    state: &StatusBarState,
    area: ratatui::layout::Rect,
    theme: &Theme,
) {
    let line = if let Some((msg, is_error)) = state.status_message {
        let color = if is_error { theme.error() } else { theme.success() };
        Line::from(vec![
            Span::styled(
                if is_error { "ERROR" } else { "INFO" },
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(": "),
            Span::styled(msg.to_string(), Style::default().fg(color)),
        ])
    } else {
        let mut spans = vec![Span::styled(
            if state.detail_open { "DETAIL" } else { "NORMAL" },
            Style::default().fg(theme.primary()).add_modifier(Modifier::BOLD),
        )];
        let mut hints = Vec::new();
        if state.detail_open {
            key_hint("f", "favorite", &mut hints);
            key_hint("Esc", "close", &mut hints);
        } else {
            key_hint("j/k", "move", &mut hints);
            key_hint("Tab", "section", &mut hints);
            key_hint("f", "favorite", &mut hints);
            key_hint("Enter", "detail", &mut hints);
            key_hint("t", state.filter_label, &mut hints);
            key_hint("?", "help", &mut hints);
        }
        spans.push(Span::raw(" | "));
        spans.extend(hints);
        if state.pending_requests > 0 {
            spans.push(Span::styled(
                format!("  [syncing {}]", state.pending_requests),
                Style::default().fg(theme.warning()),
            ));
        }
        Line::from(spans)
    };

    let status_bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status_bar, area);
}
