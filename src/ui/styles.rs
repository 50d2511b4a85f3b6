use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::theme::Theme;
use crate::page::Badge;

pub const HEART_FILLED: &str = "♥";
pub const HEART_OUTLINE: &str = "♡";

/// Heart glyph for a card, colored when favorited.
pub fn heart_span(favorited: bool, theme: &Theme) -> Span<'static> {
    if favorited {
        Span::styled(
            HEART_FILLED,
            Style::default().fg(theme.heart()).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(HEART_OUTLINE, Style::default().fg(theme.text_muted()))
    }
}

/// Count badge as shown in the header; nothing when hidden.
pub fn badge_span(badge: &Badge, theme: &Theme) -> Option<Span<'static>> {
    if !badge.visible {
        return None;
    }
    Some(Span::styled(
        format!(" {} ", badge.text),
        Style::default()
            .fg(theme.text())
            .bg(theme.badge())
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn row_style(is_selected: bool, theme: &Theme) -> Style {
    if is_selected {
        theme.highlight_style()
    } else {
        Style::default().fg(theme.text())
    }
}
