//! `reqwest`-backed client for the item-bank HTTP API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::detail::DetailRecord;
use crate::error::{ExplorerError, Result};
use crate::query::{QueryPair, to_query_string};

use super::error::ApiError;
use super::{FilterCatalog, HealthStatus, ItemSource, ListResponse};

#[derive(Debug, Clone)]
pub struct HttpItemSource {
    client: Client,
    base: Url,
}

impl HttpItemSource {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// `timeout` bounds each whole request; connecting gets at most 10s of it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of `path` (relative, no leading slash) under the API root.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| ExplorerError::InvalidUrl(format!("{}{}", self.base, path), e.to_string()))
    }

    /// URL of an item listing with the encoded query attached.
    pub fn items_url(&self, query: &[QueryPair]) -> Result<Url> {
        let mut url = self.endpoint("api/items")?;
        url.set_query(Some(&to_query_string(query)));
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::new(status, url.as_str(), &body);
            debug!(transient = error.is_transient(), "{error}");
            return Err(error.into());
        }

        Ok(response.json::<T>().await?)
    }
}

impl ItemSource for HttpItemSource {
    async fn list_items(&self, query: &[QueryPair]) -> Result<ListResponse> {
        let url = self.items_url(query)?;
        self.get_json(url).await
    }

    async fn fetch_item(&self, id: i64) -> Result<DetailRecord> {
        let url = self.endpoint(&format!("api/items/{id}"))?;
        self.get_json(url).await
    }

    async fn fetch_filters(&self) -> Result<FilterCatalog> {
        let url = self.endpoint("api/filters")?;
        self.get_json(url).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("api/health")?;
        self.get_json(url).await
    }
}

/// Parse the API root, making sure relative joins append to its path.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| ExplorerError::InvalidUrl(trimmed.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ExplorerError::InvalidUrl(
            trimmed.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}
