//! Item-bank data service client.
//!
//! The service is consumed, not implemented, here. `ItemSource` is the seam
//! the controllers depend on; `HttpItemSource` talks to the real API and
//! tests substitute in-memory sources.

pub mod error;
pub mod http;
pub mod models;

use std::future::Future;

use crate::detail::DetailRecord;
use crate::error::Result;
use crate::query::QueryPair;

pub use http::HttpItemSource;
pub use models::{FilterCatalog, HealthStatus, LabeledKey, ListResponse, RowProjection};

/// Common interface for item-bank data sources
pub trait ItemSource: Send + Sync {
    /// Search, filter, sort and paginate items (`GET /api/items`)
    fn list_items(
        &self,
        query: &[QueryPair],
    ) -> impl Future<Output = Result<ListResponse>> + Send;

    /// Fetch one item's full detail (`GET /api/items/{id}`)
    fn fetch_item(&self, id: i64) -> impl Future<Output = Result<DetailRecord>> + Send;

    /// Enumerate selectable facet values (`GET /api/filters`)
    fn fetch_filters(&self) -> impl Future<Output = Result<FilterCatalog>> + Send;

    /// Liveness probe (`GET /api/health`)
    fn health(&self) -> impl Future<Output = Result<HealthStatus>> + Send;
}
