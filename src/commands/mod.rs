mod clear;
mod explore;
mod filters;
mod health;
mod list;
mod show;

pub use clear::cmd_clear;
pub use explore::{ExploreCommand, cmd_explore, parse_command};
pub use filters::cmd_filters;
pub use health::cmd_health;
pub use list::{cmd_list, filters_from_args};
pub use show::cmd_show;

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::remote::HttpItemSource;

/// Resolved configuration plus a client for the data service.
pub struct App {
    pub config: Config,
    pub source: Arc<HttpItemSource>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let source = HttpItemSource::new(&config.api_url, config.timeout())?;
        Ok(Self {
            config,
            source: Arc::new(source),
        })
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `Showing 26-50 of 132 items`
pub fn format_range_summary(page: u32, page_size: u32, rows: usize, total: u64) -> String {
    if rows == 0 {
        return format!("No items (total {total})");
    }
    let first = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
    let last = first + rows as u64 - 1;
    format!("Showing {first}-{last} of {total} items")
}
