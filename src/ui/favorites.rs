use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::styles::heart_span;
use super::theme::Theme;
use crate::favorites::FavoriteCard;
use crate::page::PanelState;

pub struct FavoritesViewState<'a> {
    pub panel: &'a PanelState,
    pub selected: usize,
    pub count: usize,
}

/// The favorites section: placeholder, cards, empty state or error panel.
pub fn render_favorites_view(f: &mut Frame, state: &FavoritesViewState, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Favorit ({}) ", state.count))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(true));

    let message = match state.panel {
        PanelState::Cards(cards) => {
            render_cards(f, cards, state.selected, block, area, theme);
            return;
        }
        PanelState::Idle => Paragraph::new("Press Tab to load your favorites")
            .style(Style::default().fg(theme.text_muted())),
        PanelState::Loading => Paragraph::new("Memuat favorit...")
            .style(Style::default().fg(theme.text_muted())),
        PanelState::Empty => Paragraph::new(vec![
            Line::from(Span::styled(
                "Belum ada favorit",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Tekan 'f' pada aset untuk menambahkannya ke favorit."),
        ])
        .style(Style::default().fg(theme.text_muted())),
        PanelState::Error(reason) => Paragraph::new(vec![
            Line::from(Span::styled(
                "Gagal memuat favorit",
                Style::default().fg(theme.error()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(reason.clone()),
            Line::from(""),
            Line::from("Press 'r' to retry"),
        ]),
    };

    f.render_widget(
        message
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_cards(
    f: &mut Frame,
    cards: &[FavoriteCard],
    selected: usize,
    block: Block,
    area: Rect,
    theme: &Theme,
) {
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let action_style = if card.action.is_enabled() {
                Style::default().fg(theme.success()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted())
            };
            ListItem::new(vec![
                Line::from(vec![
                    heart_span(card.favorited, theme),
                    Span::raw(" "),
                    Span::styled(card.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  [{}]", card.type_label),
                        Style::default().fg(theme.primary()),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {} · {}", card.location, card.area_label),
                    Style::default().fg(theme.text_muted()),
                )),
                Line::from(vec![
                    Span::raw(format!("   {}  ", card.price_label)),
                    Span::styled(format!("[{}]", card.action.label()), action_style),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(
        list,
        area,
        &mut ListState::default().with_selected(Some(selected)),
    );
}
