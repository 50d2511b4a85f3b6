use std::time::Instant;

use super::FavoritesController;
use crate::format;
use crate::model::{AssetId, FavoriteFilters, FavoriteRecord};
use crate::page::{HostPage, Notification};
use crate::service::ApiResult;

/// Primary action on a favorite card, gated on availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Rent,
    Unavailable,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Rent => "Sewa Sekarang",
            CardAction::Unavailable => "Tidak Tersedia",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CardAction::Rent)
    }
}

/// Price formatting for cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFormat {
    pub currency_prefix: String,
    pub thousands_separator: String,
}

impl Default for CardFormat {
    fn default() -> Self {
        Self {
            currency_prefix: "Rp".to_string(),
            thousands_separator: ".".to_string(),
        }
    }
}

/// One rendered favorites card.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteCard {
    pub asset_id: AssetId,
    pub name: String,
    pub type_label: String,
    pub location: String,
    pub area_label: String,
    pub price_label: String,
    pub favorited: bool,
    pub action: CardAction,
}

impl FavoriteCard {
    pub fn from_record(record: &FavoriteRecord, fmt: &CardFormat) -> Self {
        let asset = &record.asset;
        Self {
            asset_id: record.asset_id.clone(),
            name: asset.name.clone(),
            type_label: asset.asset_type.label().to_string(),
            location: asset.location.clone(),
            area_label: format::area(asset.area),
            price_label: format::monthly_price(
                asset.monthly_price,
                &fmt.currency_prefix,
                &fmt.thousands_separator,
            ),
            favorited: true,
            action: if asset.status.is_available() {
                CardAction::Rent
            } else {
                CardAction::Unavailable
            },
        }
    }
}

/// A favorites load that has shown its placeholder and is waiting on the API.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub filters: FavoriteFilters,
    toggle_stamp: u64,
}

impl<P: HostPage> FavoritesController<P> {
    /// Remember the filters and put the loading placeholder up.
    pub fn begin_load(&mut self, filters: FavoriteFilters) -> LoadTicket {
        self.filters = filters.clone();
        self.page.show_favorites_loading();
        LoadTicket {
            filters,
            toggle_stamp: self.toggles.stamp(),
        }
    }

    /// Apply a list response: replace the store and render cards, or render
    /// the error panel. Returns the records that were loaded (empty on error).
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: ApiResult<Vec<FavoriteRecord>>,
        now: Instant,
    ) -> Vec<FavoriteRecord> {
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), filtered = !ticket.filters.is_empty(), "favorites loaded");

                self.store.replace(records.clone());
                self.toggles.settle_up_to(ticket.toggle_stamp);

                if records.is_empty() {
                    self.page.render_favorites_empty();
                } else {
                    let cards = records
                        .iter()
                        .map(|r| FavoriteCard::from_record(r, &self.card_format))
                        .collect();
                    self.page.render_favorites(cards);
                }

                self.schedule_reconcile(now);
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorites");
                self.page.render_favorites_error(e.reason());
                self.page.notify(Notification::error(format!(
                    "Failed to load favorites: {}",
                    e.reason()
                )));
                Vec::new()
            }
        }
    }

    pub async fn load_favorites(&mut self, filters: FavoriteFilters) -> Vec<FavoriteRecord> {
        let ticket = self.begin_load(filters);
        let result = self.api.list_favorites(&ticket.filters).await;
        self.complete_load(ticket, result, Instant::now())
    }
}
