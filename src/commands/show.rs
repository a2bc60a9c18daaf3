use crate::detail::DetailView;
use crate::display::format_detail;
use crate::error::Result;
use crate::remote::ItemSource;

use super::{App, print_json};

/// Show one item's detail.
pub async fn cmd_show(app: &App, id: i64, json: bool) -> Result<()> {
    let record = app.source.fetch_item(id).await?;
    if json {
        return print_json(&record);
    }
    print!("{}", format_detail(&DetailView::from_record(record)));
    Ok(())
}
