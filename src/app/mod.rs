pub mod state;
mod navigation;
mod sync;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::favorites::{CardFormat, FavoritesController};
use crate::model::{Asset, AssetId};
use crate::page::{Container, ElementId, Page, PanelState};
use crate::service::{FavoritesApi, TelkomAsetClient};

pub use state::{HelpState, ListState, StatusMessage, SyncTimers, ViewMode};
pub use sync::SyncEvent;

const DEBUG_LOG_LINES: usize = 100;

pub struct App {
    // View state
    pub view_mode: ViewMode,
    pub assets_list: ListState,
    pub favorites_list: ListState,

    // Favorites synchronization
    pub favorites: FavoritesController<Page>,
    pub timers: SyncTimers,
    pub pending_requests: usize,
    event_tx: mpsc::UnboundedSender<SyncEvent>,
    event_rx: mpsc::UnboundedReceiver<SyncEvent>,

    // Overlays
    pub show_help: bool,
    pub help: HelpState,
    pub show_debug: bool,
    pub debug_log: VecDeque<String>,

    // Status bar message (for displaying errors/info)
    pub status_message: Option<StatusMessage>,

    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = TelkomAsetClient::new(&config.api)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Build the app around any [`FavoritesApi`], e.g. an in-memory one.
    pub fn with_api(config: Config, api: Arc<dyn FavoritesApi>) -> Self {
        let card_format = CardFormat {
            currency_prefix: config.ui.currency_prefix.clone(),
            thousands_separator: config.ui.thousands_separator.clone(),
        };
        let favorites = FavoritesController::new(api, Page::new())
            .with_card_format(card_format)
            .with_reconcile_delay(Duration::from_millis(config.sync.reconcile_delay_ms));

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            view_mode: ViewMode::Assets,
            assets_list: ListState::default(),
            favorites_list: ListState::default(),
            favorites,
            timers: SyncTimers::new(Instant::now()),
            pending_requests: 0,
            event_tx,
            event_rx,
            show_help: false,
            help: HelpState::default(),
            show_debug: config.ui.show_debug,
            debug_log: VecDeque::new(),
            status_message: None,
            config,
        };
        app.add_debug(format!("API: {}", app.config.api.base_url));
        app
    }

    /// Kick off the initial catalog, favorites and count requests.
    pub fn start(&mut self) {
        self.add_debug("Loading assets and favorites...".to_string());
        self.spawn_catalog_load();
        self.spawn_favorites_load();
        self.spawn_count_refresh();
    }

    pub fn page(&self) -> &Page {
        self.favorites.page()
    }

    pub fn add_debug(&mut self, msg: String) {
        tracing::debug!("{}", msg);
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        self.debug_log.push_back(format!("[{}] {}", timestamp, msg));
        while self.debug_log.len() > DEBUG_LOG_LINES {
            self.debug_log.pop_front();
        }
    }

    pub fn set_status_error(&mut self, msg: String) {
        self.status_message = Some(StatusMessage {
            message: msg.clone(),
            is_error: true,
            timestamp: Instant::now(),
        });
        self.add_debug(msg);
    }

    pub fn set_status_info(&mut self, msg: String) {
        self.status_message = Some(StatusMessage {
            message: msg,
            is_error: false,
            timestamp: Instant::now(),
        });
    }

    pub fn clear_expired_status(&mut self) {
        if let Some(ref msg) = self.status_message {
            if msg.timestamp.elapsed() > Duration::from_secs(self.config.ui.status_ttl_secs) {
                self.status_message = None;
            }
        }
    }

    /// Move notifications raised by the favorites controller onto the status bar.
    pub fn drain_notifications(&mut self) {
        for note in self.favorites.page_mut().drain_notifications() {
            if note.is_error() {
                self.set_status_error(note.message);
            } else {
                self.add_debug(note.message.clone());
                self.set_status_info(note.message);
            }
        }
    }

    /// Asset id under the cursor in the current view.
    pub fn selected_asset_id(&self) -> Option<AssetId> {
        match self.view_mode {
            ViewMode::Assets => self
                .page()
                .grid()
                .get(self.assets_list.selected)
                .map(|a| a.id.clone()),
            ViewMode::Favorites => match self.page().panel() {
                PanelState::Cards(cards) => cards
                    .get(self.favorites_list.selected)
                    .map(|c| c.asset_id.clone()),
                _ => None,
            },
        }
    }

    /// Heart element a toggle keypress acts on: the detail modal's heart when
    /// it is open, otherwise the selected card's.
    pub fn focused_heart(&self) -> Option<(AssetId, ElementId)> {
        if let Some(asset) = self.page().detail() {
            return self
                .page()
                .heart_in(Container::Detail, &asset.id)
                .map(|h| (asset.id.clone(), h.id));
        }

        let asset_id = self.selected_asset_id()?;
        let container = match self.view_mode {
            ViewMode::Assets => Container::Grid,
            ViewMode::Favorites => Container::Favorites,
        };
        self.page()
            .heart_in(container, &asset_id)
            .map(|h| (asset_id, h.id))
    }

    /// Catalog entry for an asset, falling back to the favorites store.
    pub fn find_asset(&self, asset_id: &AssetId) -> Option<Asset> {
        if let Some(asset) = self.page().grid().iter().find(|a| &a.id == asset_id) {
            return Some(asset.clone());
        }
        self.favorites
            .store()
            .records()
            .iter()
            .find(|r| &r.asset_id == asset_id)
            .map(|r| Asset {
                id: r.asset_id.clone(),
                snapshot: r.asset.clone(),
                is_favorited: true,
            })
    }
}
