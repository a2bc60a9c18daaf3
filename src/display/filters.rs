//! Facet catalog and active-filter summaries.

use owo_colors::OwoColorize;

use crate::filter::FilterState;
use crate::query::QueryState;
use crate::remote::{FilterCatalog, LabeledKey};
use crate::types::{Facet, RangeBound, RangeField, SecondMetric};

fn plain_keys(keys: &[String]) -> Vec<LabeledKey> {
    keys.iter()
        .map(|k| LabeledKey {
            key: k.clone(),
            label: k.clone(),
        })
        .collect()
}

/// Selectable values of `facet`, in catalog order.
pub fn catalog_entries(catalog: &FilterCatalog, facet: Facet) -> Vec<LabeledKey> {
    match facet {
        Facet::ItemType => plain_keys(&catalog.item_types),
        Facet::Level => plain_keys(&catalog.hierarchical_levels),
        Facet::ContentArea => catalog.content_areas.clone(),
        Facet::TargetArea => catalog.target_areas.clone(),
        Facet::NutaSkillLevel => plain_keys(&catalog.nuta_skill_levels),
        Facet::Source => plain_keys(&catalog.sources),
    }
}

/// Every facet with its values, selected ones checked.
pub fn format_catalog(catalog: &FilterCatalog, filters: &FilterState) -> String {
    let mut output = String::new();
    for facet in Facet::ALL {
        output.push_str(&format!(
            "{} {}\n",
            facet.label().bold(),
            format!("({facet})").dimmed()
        ));
        let entries = catalog_entries(catalog, facet);
        if entries.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for entry in entries {
            let mark = if filters.is_selected(facet, &entry.key) {
                "[x]".green().to_string()
            } else {
                "[ ]".to_string()
            };
            if entry.label == entry.key {
                output.push_str(&format!("  {mark} {}\n", entry.key));
            } else {
                output.push_str(&format!(
                    "  {mark} {} {}\n",
                    entry.key.cyan(),
                    entry.label
                ));
            }
        }
    }
    output
}

/// Summary of the active search, facets and ranges. Empty when nothing is
/// active.
pub fn format_active_filters(
    filters: &FilterState,
    query: &QueryState,
    metric: SecondMetric,
) -> String {
    let mut parts = Vec::new();
    if !query.search.is_empty() {
        parts.push(format!("search \"{}\"", query.search));
    }
    for facet in Facet::ALL {
        let selected = filters.selected(facet);
        if !selected.is_empty() {
            let keys: Vec<&str> = selected.iter().collect();
            parts.push(format!("{facet}={}", keys.join(",")));
        }
    }
    let ranges = [
        (RangeField::Meanp, "meanp"),
        (RangeField::Metric, metric.param_prefix()),
    ];
    for (field, name) in ranges {
        let min = filters.range(field, RangeBound::Min);
        let max = filters.range(field, RangeBound::Max);
        if !min.is_empty() || !max.is_empty() {
            let min = if min.is_empty() { "*" } else { min };
            let max = if max.is_empty() { "*" } else { max };
            parts.push(format!("{name} {min}..{max}"));
        }
    }
    parts.join("  ")
}
