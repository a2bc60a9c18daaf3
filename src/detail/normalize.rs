//! Relative-scale bars for a detail record's weight groups.
//!
//! Each bar is sized against the largest value of its own group in the same
//! record, so bar lengths compare within one detail view only.

use super::record::GroupEntry;

/// One proportional bar of a weight group.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    /// Width in percent, always within `[0, 100]`
    pub percent: f64,
}

/// Percent of `scale` that `value` represents, clamped to `[0, 100]`.
/// A zero (or non-finite) scale yields 0.
pub fn bar_percent(value: f64, scale: f64) -> f64 {
    if scale == 0.0 || !scale.is_finite() || !value.is_finite() {
        return 0.0;
    }
    let percent = value / scale * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Compute bars for a group. Missing or non-finite values count as 0.
pub fn normalize_group(entries: &[GroupEntry]) -> Vec<Bar> {
    let values: Vec<f64> = entries
        .iter()
        .map(|e| e.value.filter(|v| v.is_finite()).unwrap_or(0.0))
        .collect();

    let scale = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    entries
        .iter()
        .zip(values)
        .map(|(entry, value)| Bar {
            key: entry.key,
            label: entry.label,
            value,
            percent: bar_percent(value, scale),
        })
        .collect()
}
