//! Background requests and timers.
//!
//! Network calls never block the event loop: each one runs on its own tokio
//! task and reports back through the app's event channel. `handle_sync_events`
//! drains the channel once per loop iteration and applies results on the UI
//! task, so the favorites store is only ever touched from there.

use std::time::{Duration, Instant};

use super::App;
use crate::favorites::{LoadTicket, PendingToggle, ToggleRejected};
use crate::model::{Asset, FavoriteRecord};
use crate::service::ApiResult;

#[derive(Debug)]
pub enum SyncEvent {
    ToggleResolved {
        pending: PendingToggle,
        result: ApiResult<()>,
    },
    FavoritesLoaded {
        ticket: LoadTicket,
        result: ApiResult<Vec<FavoriteRecord>>,
    },
    CountResolved(ApiResult<usize>),
    CatalogLoaded(ApiResult<Vec<Asset>>),
}

impl App {
    /// Toggle the focused heart: optimistic flip now, request in the background.
    pub fn spawn_toggle(&mut self) {
        let Some((asset_id, element)) = self.focused_heart() else {
            self.add_debug("No asset selected to favorite".to_string());
            return;
        };

        let pending = match self.favorites.begin_toggle(&asset_id, element) {
            Ok(pending) => pending,
            Err(ToggleRejected::InFlight(id)) => {
                self.set_status_info(format!("Still saving favorite for asset {}", id));
                return;
            }
            Err(e) => {
                self.set_status_error(e.to_string());
                return;
            }
        };

        let api = self.favorites.api();
        let tx = self.event_tx.clone();
        self.pending_requests += 1;
        tokio::spawn(async move {
            let result = api.toggle_favorite(&pending.asset_id).await;
            let _ = tx.send(SyncEvent::ToggleResolved { pending, result });
        });
    }

    /// Favorites-tab activation, periodic re-sync, manual reload.
    pub fn spawn_favorites_load(&mut self) {
        let filters = self.favorites.filters().clone();
        let ticket = self.favorites.begin_load(filters);

        let api = self.favorites.api();
        let tx = self.event_tx.clone();
        self.pending_requests += 1;
        tokio::spawn(async move {
            let result = api.list_favorites(&ticket.filters).await;
            let _ = tx.send(SyncEvent::FavoritesLoaded { ticket, result });
        });
    }

    pub fn spawn_count_refresh(&mut self) {
        let api = self.favorites.api();
        let tx = self.event_tx.clone();
        self.pending_requests += 1;
        tokio::spawn(async move {
            let result = api.favorite_count().await;
            let _ = tx.send(SyncEvent::CountResolved(result));
        });
    }

    pub fn spawn_catalog_load(&mut self) {
        let filters = self.favorites.filters().clone();
        let api = self.favorites.api();
        let tx = self.event_tx.clone();
        self.pending_requests += 1;
        tokio::spawn(async move {
            let result = api.list_assets(&filters).await;
            let _ = tx.send(SyncEvent::CatalogLoaded(result));
        });
    }

    /// Apply every result that has arrived since the last call.
    pub fn handle_sync_events(&mut self) {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }

        for event in events {
            self.pending_requests = self.pending_requests.saturating_sub(1);
            self.apply_sync_event(event, Instant::now());
        }

        self.drain_notifications();
    }

    pub fn apply_sync_event(&mut self, event: SyncEvent, now: Instant) {
        match event {
            SyncEvent::ToggleResolved { pending, result } => {
                let follow_up = self.favorites.complete_toggle(&pending, result);
                if follow_up.reload_favorites {
                    self.spawn_favorites_load();
                }
                if follow_up.refresh_count {
                    self.spawn_count_refresh();
                }
            }
            SyncEvent::FavoritesLoaded { ticket, result } => {
                let records = self.favorites.complete_load(ticket, result, now);
                self.favorites_list.clamp(records.len());
                self.add_debug(format!("Loaded {} favorites", records.len()));
            }
            SyncEvent::CountResolved(result) => {
                let count = self.favorites.complete_count(result);
                self.add_debug(format!("Favorite count: {}", count));
            }
            SyncEvent::CatalogLoaded(result) => match result {
                Ok(assets) => {
                    let count = assets.len();
                    let known = self.favorites.favorite_set();
                    self.favorites.page_mut().render_asset_grid(assets, &known);
                    self.assets_list.clamp(count);
                    self.favorites.schedule_reconcile(now);
                    self.add_debug(format!("Loaded {} assets", count));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load asset catalog");
                    self.set_status_error(format!("Failed to load assets: {}", e.reason()));
                }
            },
        }
    }

    /// Timer work: deferred reconcile, count poll, periodic favorites re-sync.
    pub fn tick(&mut self, now: Instant) {
        if let Some(changed) = self.favorites.run_due_reconcile(now) {
            if changed > 0 {
                self.add_debug(format!("Reconciled {} hearts", changed));
            }
        }

        let count_interval = Duration::from_secs(self.config.sync.count_poll_secs.max(1));
        if now.duration_since(self.timers.last_count_poll) >= count_interval {
            self.timers.last_count_poll = now;
            self.spawn_count_refresh();
        }

        let resync_interval = Duration::from_secs(self.config.sync.resync_secs.max(1));
        if now.duration_since(self.timers.last_resync) >= resync_interval {
            self.timers.last_resync = now;
            self.add_debug("Re-syncing favorites".to_string());
            self.spawn_favorites_load();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending_requests > 0
    }
}
