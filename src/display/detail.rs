//! Item detail rendering: header, statistics and weight bars.

use owo_colors::OwoColorize;

use crate::detail::{Bar, DetailView, GroupEntry};

use super::{format_number, format_text};

/// Width of a full (100%) bar in cells.
pub const BAR_WIDTH: usize = 30;

/// `label  ██████░░░░  0.500`, the bar length proportional to `percent`.
pub fn format_bar(bar: &Bar, label_width: usize) -> String {
    let filled = ((bar.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "  {:<label_width$}  {}{}  {}",
        bar.label,
        "█".repeat(filled).cyan(),
        "░".repeat(BAR_WIDTH - filled).dimmed(),
        format_number(Some(bar.value)),
    )
}

fn format_bars(title: &str, bars: &[Bar]) -> String {
    let mut output = format!("\n{}\n", title.bold());
    if bars.iter().all(|b| b.value == 0.0) {
        output.push_str(&format!("  {}\n", "(no weights)".dimmed()));
        return output;
    }
    let width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    for bar in bars {
        output.push_str(&format_bar(bar, width));
        output.push('\n');
    }
    output
}

fn format_entries(title: &str, entries: &[GroupEntry]) -> String {
    let mut output = format!("\n{}\n", title.bold());
    let width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
    for entry in entries {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            entry.label,
            format_number(entry.value)
        ));
    }
    output
}

pub fn format_detail(view: &DetailView) -> String {
    let record = &view.record;
    let mut output = format!(
        "{} {}\n",
        format!("#{}", record.id).cyan(),
        format_text(record.label.as_deref()).bold()
    );

    for (label, value) in [
        ("Name", format_text(record.name.as_deref())),
        ("Name 2", format_text(record.name_2.as_deref())),
        ("Type", format_text(record.item_type.as_deref())),
        ("Level", format_text(record.hierarchical_level.as_deref())),
        ("Source", format_text(record.source.as_deref())),
        (
            "Content area",
            format_text(record.dominant_content_area.as_deref()),
        ),
        (
            "NuTa skill level",
            format_text(record.nuta.nuta_skill_level.as_deref()),
        ),
        ("Max score", format_number(record.max)),
        ("Responses", format_number(record.n)),
    ] {
        output.push_str(&format!("{:<16} {}\n", format!("{label}:").dimmed(), value));
    }

    if let Some(contents) = record.nuta.contents.as_deref()
        && !contents.trim().is_empty()
    {
        output.push_str(&format!("{:<16} {}\n", "NuTa contents:".dimmed(), contents));
    }

    output.push_str(&format_entries("Difficulty", &view.difficulty));
    output.push_str(&format_entries("Discrimination", &view.discrimination));
    output.push_str(&format_bars("Content areas", &view.content_area));
    output.push_str(&format_bars("NuTa weights", &view.nuta_weights));
    output.push_str(&format_bars("Target areas", &view.targets));
    output
}
