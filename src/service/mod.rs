pub mod error;
pub mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::model::{Asset, AssetId, FavoriteFilters, FavoriteRecord};

pub use error::{ApiError, ApiResult};
pub use http::TelkomAsetClient;

/// Response envelope shared by every TelkomAset JSON endpoint:
/// `{success, data?, count?, error?}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

/// The server-side favorites contract.
///
/// The controller only ever talks to the server through this trait, so the
/// HTTP client can be swapped for an in-memory one in tests.
#[async_trait]
pub trait FavoritesApi: Send + Sync {
    /// `GET /api/user-favorites` with optional filters
    async fn list_favorites(&self, filters: &FavoriteFilters) -> ApiResult<Vec<FavoriteRecord>>;

    /// `POST /api/toggle-favorite/{asset_id}`
    async fn toggle_favorite(&self, asset_id: &AssetId) -> ApiResult<()>;

    /// `GET /api/user-favorites/count`
    async fn favorite_count(&self) -> ApiResult<usize>;

    /// `GET /api/assets` with optional filters
    async fn list_assets(&self, filters: &FavoriteFilters) -> ApiResult<Vec<Asset>>;
}
