#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod detail;
pub mod display;
pub mod error;
pub mod filter;
pub mod logging;
pub mod notice;
pub mod pagination;
pub mod query;
pub mod remote;
pub mod storage;
pub mod types;

pub use config::Config;
pub use controller::{DetailController, ListController, ListOptions, ListStatus, ListView};
pub use detail::{Bar, DetailRecord, DetailView};
pub use error::{ExplorerError, Result};
pub use filter::FilterState;
pub use notice::{Notice, NoticeLevel};
pub use pagination::{PageControls, page_window};
pub use query::{QueryPair, QueryState, SortColumn, SortDirection, encode, to_query_string};
pub use remote::{FilterCatalog, HttpItemSource, ItemSource, ListResponse, RowProjection};
pub use storage::{FileStorage, FilterStore, KeyValueStore, MemoryStorage};
pub use types::{ContentAreaMode, Facet, PageSize, RangeBound, RangeField, SecondMetric};
