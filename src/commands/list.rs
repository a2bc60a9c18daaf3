use owo_colors::OwoColorize;

use crate::cli::ListArgs;
use crate::display::{format_active_filters, format_item_table, format_page_controls};
use crate::error::Result;
use crate::filter::FilterState;
use crate::pagination::PageControls;
use crate::query::{QueryState, encode};
use crate::remote::ItemSource;
use crate::types::{Facet, RangeBound, RangeField};

use super::{App, format_range_summary, print_json};

/// Build filters from command-line flags, on top of `base`.
pub fn filters_from_args(args: &ListArgs, base: FilterState) -> FilterState {
    let mut filters = base;
    let facets = [
        (Facet::ItemType, &args.item_type),
        (Facet::Level, &args.level),
        (Facet::TargetArea, &args.target_area),
        (Facet::NutaSkillLevel, &args.nuta_skill_level),
        (Facet::Source, &args.source),
    ];
    for (facet, keys) in facets {
        for key in keys {
            if !filters.is_selected(facet, key) {
                filters.toggle(facet, key);
            }
        }
    }
    for key in &args.content_area {
        if !filters.is_selected(Facet::ContentArea, key) {
            filters.select_content_area(key);
        }
    }

    let ranges = [
        (RangeField::Meanp, RangeBound::Min, &args.meanp_min),
        (RangeField::Meanp, RangeBound::Max, &args.meanp_max),
        (RangeField::Metric, RangeBound::Min, &args.metric_min),
        (RangeField::Metric, RangeBound::Max, &args.metric_max),
    ];
    for (field, bound, value) in ranges {
        if let Some(value) = value {
            filters.set_range(field, bound, value);
        }
    }
    filters
}

fn query_from_args(app: &App, args: &ListArgs) -> QueryState {
    let page_size = args.page_size.unwrap_or(app.config.default_page_size);
    let mut query = QueryState::with_page_size(page_size);
    query.page = args.page.max(1);
    if let Some(column) = args.sort {
        query.sort_by = column;
    }
    if let Some(dir) = args.dir {
        query.sort_dir = dir;
    }
    if let Some(search) = &args.search {
        query.set_search(search);
    }
    query
}

/// List one page of items.
pub async fn cmd_list(app: &App, args: &ListArgs) -> Result<()> {
    let mode = app.config.content_area_mode;
    let base = if args.saved {
        app.config
            .filter_store()
            .restore(mode)
            .unwrap_or_else(|| FilterState::new(mode))
    } else {
        FilterState::new(mode)
    };
    let filters = filters_from_args(args, base);
    let query = query_from_args(app, args);

    let pairs = encode(&filters, &query, app.config.second_metric);
    let response = app.source.list_items(&pairs).await?;

    if args.json {
        return print_json(&response);
    }

    let summary = format_active_filters(&filters, &query, app.config.second_metric);
    if !summary.is_empty() {
        println!("{} {}", "Filters:".dimmed(), summary);
    }
    if !response.items.is_empty() {
        println!("{}", format_item_table(&response.items));
    }

    let total_pages = query.page_size.total_pages(response.total);
    println!(
        "{}",
        format_range_summary(
            query.page,
            query.page_size.get(),
            response.items.len(),
            response.total
        )
    );
    if total_pages > 1 {
        println!("{}", format_page_controls(&PageControls::new(query.page, total_pages)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentAreaMode;

    #[test]
    fn test_filters_from_args() {
        let args = ListArgs {
            item_type: vec!["MC".to_string()],
            content_area: vec!["s2".to_string(), "s4".to_string()],
            meanp_max: Some("0.8".to_string()),
            ..Default::default()
        };

        let filters = filters_from_args(&args, FilterState::new(ContentAreaMode::Single));
        assert!(filters.is_selected(Facet::ItemType, "MC"));
        let areas: Vec<&str> = filters.selected(Facet::ContentArea).iter().collect();
        assert_eq!(areas, vec!["s4"]);
        assert_eq!(filters.range(RangeField::Meanp, RangeBound::Max), "0.8");
    }

    #[test]
    fn test_flags_add_to_saved_filters() {
        let mut saved = FilterState::default();
        saved.toggle(Facet::Source, "PISA");
        saved.toggle(Facet::ItemType, "MC");
        let args = ListArgs {
            item_type: vec!["MC".to_string(), "OE".to_string()],
            ..Default::default()
        };

        let filters = filters_from_args(&args, saved);
        assert!(filters.is_selected(Facet::Source, "PISA"));
        let types: Vec<&str> = filters.selected(Facet::ItemType).iter().collect();
        assert_eq!(types, vec!["MC", "OE"]);
    }
}
