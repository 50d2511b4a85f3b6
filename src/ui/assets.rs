use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::styles::{heart_span, row_style};
use super::theme::Theme;
use crate::model::Asset;
use crate::page::{Container, Page};

pub struct AssetsViewState<'a> {
    pub page: &'a Page,
    pub selected: usize,
    pub filter_label: &'a str,
}

/// Catalog grid, one asset per row with its heart.
pub fn render_assets_view(f: &mut Frame, state: &AssetsViewState, area: Rect, theme: &Theme) {
    let title = format!(" Aset [{}] ", state.filter_label);
    let assets = state.page.grid();

    if assets.is_empty() {
        let empty = Paragraph::new("No assets loaded\n\nPress 'r' to reload")
            .style(Style::default().fg(theme.text_muted()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_style(true)),
            );
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = assets
        .iter()
        .enumerate()
        .map(|(i, asset)| {
            let favorited = state
                .page
                .heart_in(Container::Grid, &asset.id)
                .map(|h| h.favorited)
                .unwrap_or(false);
            ListItem::new(asset_line(asset, favorited, theme))
                .style(row_style(i == state.selected, theme))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(true)),
        )
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(
        list,
        area,
        &mut ListState::default().with_selected(Some(state.selected)),
    );
}

fn asset_line(asset: &Asset, favorited: bool, theme: &Theme) -> Line<'static> {
    let snapshot = &asset.snapshot;
    let status_style = if snapshot.status.is_available() {
        Style::default().fg(theme.success())
    } else {
        Style::default().fg(theme.text_muted())
    };
    Line::from(vec![
        heart_span(favorited, theme),
        Span::raw(" "),
        Span::raw(snapshot.name.clone()),
        Span::styled(
            format!("  {} · {}", snapshot.asset_type.label(), snapshot.location),
            Style::default().fg(theme.text_muted()),
        ),
        Span::styled(
            if snapshot.status.is_available() { "  tersedia" } else { "  disewa" },
            status_style,
        ),
    ])
}
