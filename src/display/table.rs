//! Tabular rendering of item rows.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::remote::RowProjection;

use super::{format_number, format_text};

/// A row in the item list table
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    item_type: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Content area")]
    content_area: String,
    #[tabled(rename = "Mean p")]
    meanp: String,
    #[tabled(rename = "a (IRT)")]
    a_irt: String,
    #[tabled(rename = "Rit")]
    meanrit: String,
}

const NAME_WIDTH: usize = 40;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

pub fn format_item_table(rows: &[RowProjection]) -> String {
    let rows: Vec<ItemRow> = rows
        .iter()
        .map(|r| ItemRow {
            id: r.id,
            label: format_text(r.label.as_deref()),
            name: truncate(&format_text(r.name.as_deref()), NAME_WIDTH),
            item_type: format_text(r.item_type.as_deref()),
            level: format_text(r.level.as_deref()),
            source: format_text(r.source.as_deref()),
            content_area: format_text(r.dominant_content_area.as_deref()),
            meanp: format_number(r.meanp),
            a_irt: format_number(r.a_irt),
            meanrit: format_number(r.meanrit),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> RowProjection {
        RowProjection {
            id,
            label: Some(format!("M{id}")),
            name: Some("Fractions on a number line".to_string()),
            source: Some("PISA".to_string()),
            item_type: Some("MC".to_string()),
            level: None,
            dominant_content_area: None,
            meanp: Some(0.5),
            a_irt: Some(1.25),
            meanrit: Some(0.4),
        }
    }

    #[test]
    fn test_table_lists_rows_and_statistics() {
        let table = format_item_table(&[row(1), row(2)]);
        assert!(table.contains("M1"));
        assert!(table.contains("M2"));
        assert!(table.contains("a (IRT)"));
        assert!(table.contains("1.250"));
        assert!(table.contains("0.400"));
        assert!(table.contains("Fractions on a number line"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
