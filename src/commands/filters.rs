use crate::display::format_catalog;
use crate::error::Result;
use crate::filter::FilterState;
use crate::remote::ItemSource;

use super::{App, print_json};

/// Print the facet catalog, checking the saved selections.
pub async fn cmd_filters(app: &App, json: bool) -> Result<()> {
    let catalog = app.source.fetch_filters().await?;
    if json {
        return print_json(&catalog);
    }

    let mode = app.config.content_area_mode;
    let saved = app
        .config
        .filter_store()
        .restore(mode)
        .unwrap_or_else(|| FilterState::new(mode));
    print!("{}", format_catalog(&catalog, &saved));
    Ok(())
}
