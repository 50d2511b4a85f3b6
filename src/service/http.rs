use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, Envelope, FavoritesApi};
use crate::config::ApiConfig;
use crate::model::{Asset, AssetId, FavoriteFilters, FavoriteRecord};

/// HTTP client for the TelkomAset favorites endpoints.
#[derive(Clone)]
pub struct TelkomAsetClient {
    base_url: String,
    session_cookie: Option<String>,
    http_client: HttpClient,
}

impl TelkomAsetClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!("telkomaset/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone().filter(|c| !c.is_empty()),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .http_client
            .request(method, &url)
            .header(header::ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest");

        if let Some(ref cookie) = self.session_cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<Envelope<T>> {
        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        read_envelope(status, &body)
    }
}

/// Interpret a response body against the `{success, ...}` envelope.
///
/// Non-2xx statuses become [`ApiError::Status`] carrying the server's error
/// message when the body has one. `success: false` becomes
/// [`ApiError::Rejected`].
pub fn read_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<Envelope<T>> {
    if !status.is_success() {
        let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .ok()
            .and_then(|env| env.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if !envelope.success {
        let reason = envelope
            .error
            .clone()
            .unwrap_or_else(|| "Request was not successful".to_string());
        return Err(ApiError::Rejected(reason));
    }

    Ok(envelope)
}

#[async_trait]
impl FavoritesApi for TelkomAsetClient {
    async fn list_favorites(&self, filters: &FavoriteFilters) -> ApiResult<Vec<FavoriteRecord>> {
        let builder = self
            .request(Method::GET, "/api/user-favorites")
            .query(&filters.query_pairs());

        let envelope: Envelope<Vec<FavoriteRecord>> = self.send(builder).await?;
        let records = envelope.data.unwrap_or_default();
        tracing::debug!(count = records.len(), "fetched favorites");
        Ok(records)
    }

    async fn toggle_favorite(&self, asset_id: &AssetId) -> ApiResult<()> {
        let path = format!("/api/toggle-favorite/{}", asset_id);
        let builder = self.request(Method::POST, &path);

        let _: Envelope<serde_json::Value> = self.send(builder).await?;
        tracing::debug!(%asset_id, "toggle acknowledged");
        Ok(())
    }

    async fn favorite_count(&self) -> ApiResult<usize> {
        let builder = self.request(Method::GET, "/api/user-favorites/count");

        let envelope: Envelope<serde_json::Value> = self.send(builder).await?;
        envelope
            .count
            .ok_or_else(|| ApiError::Decode("missing count".to_string()))
    }

    async fn list_assets(&self, filters: &FavoriteFilters) -> ApiResult<Vec<Asset>> {
        let builder = self
            .request(Method::GET, "/api/assets")
            .query(&filters.query_pairs());

        let envelope: Envelope<Vec<Asset>> = self.send(builder).await?;
        Ok(envelope.data.unwrap_or_default())
    }
}
