use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::keybindings::KEYBINDING_CATEGORIES;
use super::theme::Theme;

pub struct HelpPanelState {
    pub scroll_offset: usize,
}

/// Centered rectangle taking the given share of `area`.
pub fn centered_rect(area: Rect, width_pct: u16, height_pct: u16) -> Rect {
    let width = area.width * width_pct / 100;
    let height = area.height * height_pct / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_help_panel(f: &mut Frame, state: &HelpPanelState, area: Rect, theme: &Theme) {
    let popup_area = centered_rect(area, 70, 80);
    f.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().fg(theme.primary()).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for category in KEYBINDING_CATEGORIES {
        lines.push(Line::from(Span::styled(
            category.name,
            Style::default().fg(theme.warning()).add_modifier(Modifier::BOLD),
        )));
        for binding in category.bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:14}", binding.keys),
                    Style::default().fg(theme.success()),
                ),
                Span::raw(binding.description),
            ]));
        }
        lines.push(Line::from(""));
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(state.scroll_offset).collect();

    let help = Paragraph::new(visible_lines)
        .block(
            Block::default()
                .title(" Help - Press any key to close (j/k to scroll) ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(true)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}
