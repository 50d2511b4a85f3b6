//! Favorite state synchronization.
//!
//! [`FavoritesController`] owns the favorites store and the per-asset toggle
//! state, and drives a [`HostPage`] so that the server record, every heart
//! icon, and the count surfaces stay in agreement.
//!
//! Each network-facing operation comes in two halves: a synchronous `begin_*`
//! that applies whatever must happen before the request (optimistic hearts,
//! loading placeholder) and a `complete_*` that applies the API result. The
//! async wrappers compose both for callers that can await; the terminal app
//! runs the request on a spawned task and feeds the result back instead.

pub mod count;
pub mod hearts;
pub mod list;
pub mod store;
pub mod toggle;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::{AssetId, FavoriteFilters};
use crate::page::HostPage;
use crate::service::FavoritesApi;

pub use list::{CardAction, CardFormat, FavoriteCard, LoadTicket};
pub use store::FavoritesStore;
pub use toggle::{PendingToggle, ToggleFollowUp, ToggleOutcome, ToggleRejected, ToggleState, ToggleTracker};

pub const DEFAULT_RECONCILE_DELAY: Duration = Duration::from_millis(300);

pub struct FavoritesController<P: HostPage> {
    api: Arc<dyn FavoritesApi>,
    page: P,
    store: FavoritesStore,
    toggles: ToggleTracker,
    filters: FavoriteFilters,
    card_format: CardFormat,
    reconcile_delay: Duration,
    reconcile_due: Option<Instant>,
    last_count: Option<usize>,
}

impl<P: HostPage> FavoritesController<P> {
    pub fn new(api: Arc<dyn FavoritesApi>, page: P) -> Self {
        Self {
            api,
            page,
            store: FavoritesStore::new(),
            toggles: ToggleTracker::default(),
            filters: FavoriteFilters::default(),
            card_format: CardFormat::default(),
            reconcile_delay: DEFAULT_RECONCILE_DELAY,
            reconcile_due: None,
            last_count: None,
        }
    }

    pub fn with_card_format(mut self, card_format: CardFormat) -> Self {
        self.card_format = card_format;
        self
    }

    pub fn with_reconcile_delay(mut self, delay: Duration) -> Self {
        self.reconcile_delay = delay;
        self
    }

    /// Shared handle to the API, for hosts that run requests on their own tasks.
    pub fn api(&self) -> Arc<dyn FavoritesApi> {
        Arc::clone(&self.api)
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    pub fn card_format(&self) -> &CardFormat {
        &self.card_format
    }

    pub fn filters(&self) -> &FavoriteFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FavoriteFilters) {
        self.filters = filters;
    }

    pub fn toggle_state(&self, asset_id: &AssetId) -> ToggleState {
        self.toggles.state(asset_id)
    }

    /// Last count shown on the count surfaces.
    pub fn last_count(&self) -> Option<usize> {
        self.last_count
    }
}
