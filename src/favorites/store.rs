use std::collections::HashSet;
use std::time::Instant;

use crate::model::{AssetId, FavoriteRecord};

/// Client-side cache of the user's favorites.
///
/// Only a completed list fetch mutates it, and it always replaces the whole
/// list. There is no incremental merge.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    records: Vec<FavoriteRecord>,
    loaded_at: Option<Instant>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, records: Vec<FavoriteRecord>) {
        self.records = records;
        self.loaded_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.loaded_at = None;
    }

    /// True once a fetch has succeeded. An empty but loaded store means the
    /// user has no favorites; an unloaded one means we don't know.
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, asset_id: &AssetId) -> bool {
        self.records.iter().any(|r| &r.asset_id == asset_id)
    }

    pub fn asset_ids(&self) -> HashSet<AssetId> {
        self.records.iter().map(|r| r.asset_id.clone()).collect()
    }
}
