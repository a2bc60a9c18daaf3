use owo_colors::OwoColorize;

use crate::controller::ListStatus;
use crate::pagination::PageControls;

pub mod detail;
pub mod filters;
pub mod table;

pub use detail::{format_bar, format_detail};
pub use filters::{format_active_filters, format_catalog};
pub use table::format_item_table;

/// Placeholder for absent values in tables and detail lists.
pub const MISSING: &str = "-";

/// Format an optional statistic with three decimals.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.3}"),
        _ => MISSING.to_string(),
    }
}

pub fn format_text(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => MISSING.to_string(),
    }
}

pub fn format_status(status: ListStatus) -> String {
    match status {
        ListStatus::Idle => "[ready]".green().to_string(),
        ListStatus::Loading => "[loading]".yellow().to_string(),
        ListStatus::Error => "[error]".red().to_string(),
    }
}

/// One-line pager: `< prev  1 2 [3] 4 5  next >`, disabled ends dimmed.
pub fn format_page_controls(controls: &PageControls) -> String {
    let prev = if controls.prev_enabled {
        "< prev".to_string()
    } else {
        "< prev".dimmed().to_string()
    };
    let next = if controls.next_enabled {
        "next >".to_string()
    } else {
        "next >".dimmed().to_string()
    };

    let pages: Vec<String> = controls
        .pages
        .iter()
        .map(|p| {
            if *p == controls.page {
                format!("[{p}]").bold().to_string()
            } else {
                p.to_string()
            }
        })
        .collect();

    if pages.is_empty() {
        format!("{prev}  {next}")
    } else {
        format!("{prev}  {}  {next}", pages.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(0.61234)), "0.612");
        assert_eq!(format_number(None), "-");
        assert_eq!(format_number(Some(f64::NAN)), "-");
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_text(Some("MC")), "MC");
        assert_eq!(format_text(Some("  ")), "-");
        assert_eq!(format_text(None), "-");
    }

    #[test]
    fn test_page_controls_marks_current_page() {
        let line = format_page_controls(&PageControls::new(2, 3));
        assert!(line.starts_with("< prev  1 "));
        assert!(line.contains("[2]"));
        assert!(line.ends_with(" 3  next >"));
    }
}
