use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::help::centered_rect;
use super::styles::heart_span;
use super::theme::Theme;
use crate::favorites::CardFormat;
use crate::format;
use crate::model::Asset;
use crate::page::tooltip_for;

pub struct DetailViewState<'a> {
    pub asset: &'a Asset,
    pub favorited: bool,
    pub card_format: &'a CardFormat,
}

/// Asset detail modal. Its heart is a second instance of the card's heart.
pub fn render_detail_modal(f: &mut Frame, state: &DetailViewState, area: Rect, theme: &Theme) {
    let popup_area = centered_rect(area, 60, 50);
    f.render_widget(Clear, popup_area);

    let snapshot = &state.asset.snapshot;
    let label = Style::default().fg(theme.text_muted());
    let lines = vec![
        Line::from(vec![
            heart_span(state.favorited, theme),
            Span::raw(" "),
            Span::styled(
                snapshot.name.clone(),
                Style::default().fg(theme.primary()).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(tooltip_for(state.favorited), label)),
        Line::from(""),
        Line::from(vec![Span::styled("Tipe      ", label), Span::raw(snapshot.asset_type.label())]),
        Line::from(vec![Span::styled("Lokasi    ", label), Span::raw(snapshot.location.clone())]),
        Line::from(vec![Span::styled("Luas      ", label), Span::raw(format::area(snapshot.area))]),
        Line::from(vec![
            Span::styled("Harga     ", label),
            Span::raw(format::monthly_price(
                snapshot.monthly_price,
                &state.card_format.currency_prefix,
                &state.card_format.thousands_separator,
            )),
        ]),
        Line::from(vec![
            Span::styled("Status    ", label),
            if snapshot.status.is_available() {
                Span::styled("Tersedia", Style::default().fg(theme.success()))
            } else {
                Span::styled("Tidak Tersedia", Style::default().fg(theme.error()))
            },
        ]),
    ];

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" Aset #{} [f: favorite | Esc: close] ", state.asset.id))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(true)),
        );
    f.render_widget(modal, popup_area);
}
