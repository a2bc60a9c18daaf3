//! Query state and wire encoding for item listings.
//!
//! `encode` is the only place that knows how filter selections, sort order,
//! search text and pagination become `/api/items` query parameters. It is a
//! pure function: identical inputs always produce identical output.

use url::form_urlencoded;

use crate::filter::FilterState;
use crate::types::{Facet, PageSize, RangeBound, RangeField, SecondMetric};

pub mod sort;

pub use sort::{SortColumn, SortDirection};

/// Pagination, sort order and free-text search for the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// 1-based page number
    pub page: u32,
    pub page_size: PageSize,
    pub sort_by: SortColumn,
    pub sort_dir: SortDirection,
    /// Trimmed search text; empty means no search filter
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            sort_by: SortColumn::default(),
            sort_dir: SortDirection::default(),
            search: String::new(),
        }
    }
}

impl QueryState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Apply a column-header click: the active column flips direction,
    /// any other column becomes active in ascending order.
    pub fn click_sort(&mut self, column: SortColumn) {
        if self.sort_by == column {
            self.sort_dir = self.sort_dir.flip();
        } else {
            self.sort_by = column;
            self.sort_dir = SortDirection::Asc;
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
    }
}

/// A single `key=value` query parameter.
pub type QueryPair = (&'static str, String);

/// Encode filters and query state into ordered query parameters.
///
/// Order: pagination and sort, search, facets (one pair per selected key in
/// selection order), then range bounds that are non-empty. Range values are
/// passed through verbatim.
pub fn encode(filters: &FilterState, query: &QueryState, metric: SecondMetric) -> Vec<QueryPair> {
    let mut pairs: Vec<QueryPair> = vec![
        ("page", query.page.max(1).to_string()),
        ("page_size", query.page_size.to_string()),
        ("sort_by", query.sort_by.to_string()),
        ("sort_dir", query.sort_dir.to_string()),
    ];

    let search = query.search.trim();
    if !search.is_empty() {
        pairs.push(("search", search.to_string()));
    }

    for facet in Facet::ALL {
        for key in filters.selected(facet).iter() {
            pairs.push((facet.param(), key.to_string()));
        }
    }

    let range_keys = [
        (RangeField::Meanp, RangeBound::Min, "meanp_min"),
        (RangeField::Meanp, RangeBound::Max, "meanp_max"),
        (RangeField::Metric, RangeBound::Min, metric_key(metric, RangeBound::Min)),
        (RangeField::Metric, RangeBound::Max, metric_key(metric, RangeBound::Max)),
    ];
    for (field, bound, key) in range_keys {
        let value = filters.range(field, bound);
        if !value.is_empty() {
            pairs.push((key, value.to_string()));
        }
    }

    pairs
}

fn metric_key(metric: SecondMetric, bound: RangeBound) -> &'static str {
    match (metric, bound) {
        (SecondMetric::AIrt, RangeBound::Min) => "a_irt_min",
        (SecondMetric::AIrt, RangeBound::Max) => "a_irt_max",
        (SecondMetric::Meanrit, RangeBound::Min) => "meanrit_min",
        (SecondMetric::Meanrit, RangeBound::Max) => "meanrit_max",
    }
}

/// Serialize pairs as a percent-escaped `application/x-www-form-urlencoded`
/// query string.
pub fn to_query_string(pairs: &[QueryPair]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
