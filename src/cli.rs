use clap::{Args, Parser, Subcommand};

use crate::query::SortColumn;
use crate::query::SortDirection;
use crate::types::PageSize;

#[derive(Parser)]
#[command(name = "itembank")]
#[command(about = "Browse and filter a psychometric item bank")]
#[command(version)]
pub struct Cli {
    /// Base URL of the item-bank data service (overrides config and ITEMBANK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items matching filters
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one item's full detail
    Show {
        /// Item ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every selectable facet value
    Filters {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the data service is reachable
    Health,

    /// Forget saved filter selections
    Clear,

    /// Interactive session with saved filters
    Explore,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Item type key (repeatable)
    #[arg(long = "type", value_name = "KEY")]
    pub item_type: Vec<String>,

    /// Hierarchical level key (repeatable)
    #[arg(long, value_name = "KEY")]
    pub level: Vec<String>,

    /// Content area key, e.g. s2 (repeatable)
    #[arg(long = "area", value_name = "KEY")]
    pub content_area: Vec<String>,

    /// Target area key, e.g. t12 (repeatable)
    #[arg(long = "target", value_name = "KEY")]
    pub target_area: Vec<String>,

    /// NuTa skill level (repeatable)
    #[arg(long = "nuta", value_name = "KEY")]
    pub nuta_skill_level: Vec<String>,

    /// Source key (repeatable)
    #[arg(long, value_name = "KEY")]
    pub source: Vec<String>,

    /// Free-text search over label and names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Lower bound for mean p
    #[arg(long)]
    pub meanp_min: Option<String>,

    /// Upper bound for mean p
    #[arg(long)]
    pub meanp_max: Option<String>,

    /// Lower bound for the configured second metric
    #[arg(long)]
    pub metric_min: Option<String>,

    /// Upper bound for the configured second metric
    #[arg(long)]
    pub metric_max: Option<String>,

    /// Sort column
    #[arg(long, value_parser = parse_sort_column)]
    pub sort: Option<SortColumn>,

    /// Sort direction: asc or desc
    #[arg(long, value_parser = parse_sort_direction)]
    pub dir: Option<SortDirection>,

    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page: 10, 25, 50 or 100
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Also apply the saved filters
    #[arg(long)]
    pub saved: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_sort_column(s: &str) -> Result<SortColumn, String> {
    s.parse().map_err(|_| {
        format!(
            "invalid sort column '{}'. Must be one of: {}",
            s,
            SortColumn::ALL_STRINGS.join(", ")
        )
    })
}

fn parse_sort_direction(s: &str) -> Result<SortDirection, String> {
    s.parse().map_err(|e: crate::error::ExplorerError| e.to_string())
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    s.parse().map_err(|e: crate::error::ExplorerError| e.to_string())
}
