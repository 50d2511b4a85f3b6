use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::FavoritesController;
use crate::model::{Asset, AssetId, AssetSnapshot, AssetStatus, AssetType, FavoriteFilters, FavoriteRecord};
use crate::page::Page;
use crate::service::{ApiResult, FavoritesApi};

pub fn snapshot(name: &str) -> AssetSnapshot {
    AssetSnapshot {
        name: name.to_string(),
        asset_type: AssetType::Land,
        status: AssetStatus::Available,
        location: "Coblong".to_string(),
        area: 100.0,
        monthly_price: 1_000_000,
    }
}

pub fn record(id: u64, name: &str) -> FavoriteRecord {
    FavoriteRecord {
        asset_id: AssetId::from(id),
        asset: snapshot(name),
    }
}

pub fn asset(id: u64, name: &str) -> Asset {
    Asset {
        id: AssetId::from(id),
        snapshot: snapshot(name),
        is_favorited: false,
    }
}

struct FakeState {
    favorites: ApiResult<Vec<FavoriteRecord>>,
    toggle: ApiResult<()>,
    count: ApiResult<usize>,
    assets: ApiResult<Vec<Asset>>,
    list_calls: Vec<FavoriteFilters>,
    toggle_calls: Vec<AssetId>,
    count_calls: usize,
}

/// Scripted in-memory API. Clones share state so a test can keep a handle
/// after giving one to the controller.
#[derive(Clone)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                favorites: Ok(Vec::new()),
                toggle: Ok(()),
                count: Ok(0),
                assets: Ok(Vec::new()),
                list_calls: Vec::new(),
                toggle_calls: Vec::new(),
                count_calls: 0,
            })),
        }
    }

    pub fn with_favorites(self, favorites: ApiResult<Vec<FavoriteRecord>>) -> Self {
        self.set_favorites(favorites);
        self
    }

    pub fn with_toggle(self, toggle: ApiResult<()>) -> Self {
        self.state.lock().unwrap().toggle = toggle;
        self
    }

    pub fn with_count(self, count: ApiResult<usize>) -> Self {
        self.set_count(count);
        self
    }

    pub fn with_assets(self, assets: ApiResult<Vec<Asset>>) -> Self {
        self.state.lock().unwrap().assets = assets;
        self
    }

    pub fn set_favorites(&self, favorites: ApiResult<Vec<FavoriteRecord>>) {
        self.state.lock().unwrap().favorites = favorites;
    }

    pub fn set_count(&self, count: ApiResult<usize>) {
        self.state.lock().unwrap().count = count;
    }

    pub fn list_calls(&self) -> Vec<FavoriteFilters> {
        self.state.lock().unwrap().list_calls.clone()
    }

    pub fn toggle_calls(&self) -> Vec<AssetId> {
        self.state.lock().unwrap().toggle_calls.clone()
    }

    pub fn count_calls(&self) -> usize {
        self.state.lock().unwrap().count_calls
    }
}

#[async_trait]
impl FavoritesApi for FakeApi {
    async fn list_favorites(&self, filters: &FavoriteFilters) -> ApiResult<Vec<FavoriteRecord>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls.push(filters.clone());
        state.favorites.clone()
    }

    async fn toggle_favorite(&self, asset_id: &AssetId) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.toggle_calls.push(asset_id.clone());
        state.toggle.clone()
    }

    async fn favorite_count(&self) -> ApiResult<usize> {
        let mut state = self.state.lock().unwrap();
        state.count_calls += 1;
        state.count.clone()
    }

    async fn list_assets(&self, _filters: &FavoriteFilters) -> ApiResult<Vec<Asset>> {
        self.state.lock().unwrap().assets.clone()
    }
}

pub fn controller(api: FakeApi, page: Page) -> FavoritesController<Page> {
    FavoritesController::new(Arc::new(api), page)
}
