//! Active facet selections and numeric range bounds.
//!
//! `FilterState` is the single source of truth for what the user has
//! selected. It is mutated only through the list controller and read by
//! the query encoder and the persistence layer.

mod ordered_set;

pub use ordered_set::OrderedSet;

use crate::types::{ContentAreaMode, Facet, RangeBound, RangeField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    content_area_mode: ContentAreaMode,

    item_types: OrderedSet,
    levels: OrderedSet,
    content_areas: OrderedSet,
    target_areas: OrderedSet,
    nuta_levels: OrderedSet,
    sources: OrderedSet,

    meanp_min: String,
    meanp_max: String,
    metric_min: String,
    metric_max: String,
}

impl FilterState {
    pub fn new(content_area_mode: ContentAreaMode) -> Self {
        Self {
            content_area_mode,
            ..Default::default()
        }
    }

    pub fn content_area_mode(&self) -> ContentAreaMode {
        self.content_area_mode
    }

    /// Flip membership of `key` in `facet`. Toggling twice is a no-op.
    ///
    /// Content areas go through [`select_content_area`](Self::select_content_area)
    /// so single mode never holds more than one key.
    pub fn toggle(&mut self, facet: Facet, key: &str) {
        match facet {
            Facet::ContentArea => self.select_content_area(key),
            _ => {
                self.set_mut(facet).toggle(key);
            }
        }
    }

    /// Select a content area according to the configured policy.
    ///
    /// In single mode a new key replaces the current selection and selecting
    /// the current key again clears it. In multi mode this is `toggle`.
    pub fn select_content_area(&mut self, key: &str) {
        match self.content_area_mode {
            ContentAreaMode::Multi => {
                self.content_areas.toggle(key);
            }
            ContentAreaMode::Single => {
                let was_selected = self.content_areas.contains(key);
                self.content_areas.clear();
                if !was_selected {
                    self.content_areas.insert(key);
                }
            }
        }
    }

    /// Store a raw range bound. Empty (or whitespace-only) input clears it.
    ///
    /// No numeric validation is done here; the data service owns that.
    pub fn set_range(&mut self, field: RangeField, bound: RangeBound, value: &str) {
        *self.range_mut(field, bound) = value.trim().to_string();
    }

    pub fn range(&self, field: RangeField, bound: RangeBound) -> &str {
        match (field, bound) {
            (RangeField::Meanp, RangeBound::Min) => &self.meanp_min,
            (RangeField::Meanp, RangeBound::Max) => &self.meanp_max,
            (RangeField::Metric, RangeBound::Min) => &self.metric_min,
            (RangeField::Metric, RangeBound::Max) => &self.metric_max,
        }
    }

    pub fn selected(&self, facet: Facet) -> &OrderedSet {
        match facet {
            Facet::ItemType => &self.item_types,
            Facet::Level => &self.levels,
            Facet::ContentArea => &self.content_areas,
            Facet::TargetArea => &self.target_areas,
            Facet::NutaSkillLevel => &self.nuta_levels,
            Facet::Source => &self.sources,
        }
    }

    pub fn is_selected(&self, facet: Facet, key: &str) -> bool {
        self.selected(facet).contains(key)
    }

    /// Replace a facet's selection wholesale, keeping the given order.
    ///
    /// In single content-area mode only the first key is kept.
    pub fn replace(&mut self, facet: Facet, keys: &[String]) {
        let single =
            facet == Facet::ContentArea && self.content_area_mode == ContentAreaMode::Single;
        let set = self.set_mut(facet);
        set.clear();
        for key in keys {
            if single && !set.is_empty() {
                break;
            }
            set.insert(key);
        }
    }

    /// Clear every facet and range bound. The content-area policy is kept.
    pub fn reset(&mut self) {
        *self = FilterState::new(self.content_area_mode);
    }

    /// True when no facet has a selection and no range bound is set.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selected(*f).is_empty())
            && self.meanp_min.is_empty()
            && self.meanp_max.is_empty()
            && self.metric_min.is_empty()
            && self.metric_max.is_empty()
    }

    /// Number of active selections and bounds, for header badges.
    pub fn active_count(&self) -> usize {
        let facets: usize = Facet::ALL.iter().map(|f| self.selected(*f).len()).sum();
        let ranges = [
            &self.meanp_min,
            &self.meanp_max,
            &self.metric_min,
            &self.metric_max,
        ]
        .iter()
        .filter(|v| !v.is_empty())
        .count();
        facets + ranges
    }

    fn set_mut(&mut self, facet: Facet) -> &mut OrderedSet {
        match facet {
            Facet::ItemType => &mut self.item_types,
            Facet::Level => &mut self.levels,
            Facet::ContentArea => &mut self.content_areas,
            Facet::TargetArea => &mut self.target_areas,
            Facet::NutaSkillLevel => &mut self.nuta_levels,
            Facet::Source => &mut self.sources,
        }
    }

    fn range_mut(&mut self, field: RangeField, bound: RangeBound) -> &mut String {
        match (field, bound) {
            (RangeField::Meanp, RangeBound::Min) => &mut self.meanp_min,
            (RangeField::Meanp, RangeBound::Max) => &mut self.meanp_max,
            (RangeField::Metric, RangeBound::Min) => &mut self.metric_min,
            (RangeField::Metric, RangeBound::Max) => &mut self.metric_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(state: &FilterState, facet: Facet) -> Vec<&str> {
        state.selected(facet).iter().collect()
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = FilterState::default();
        state.toggle(Facet::Source, "pisa");
        let before = state.clone();

        state.toggle(Facet::ItemType, "MC");
        state.toggle(Facet::ItemType, "MC");

        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_is_per_facet() {
        let mut state = FilterState::default();
        state.toggle(Facet::ItemType, "MC");
        state.toggle(Facet::Level, "MC");

        assert!(state.is_selected(Facet::ItemType, "MC"));
        assert!(state.is_selected(Facet::Level, "MC"));
        assert!(!state.is_selected(Facet::Source, "MC"));
    }

    #[test]
    fn test_single_content_area_replaces_selection() {
        let mut state = FilterState::new(ContentAreaMode::Single);
        state.select_content_area("s1");
        state.select_content_area("s3");
        assert_eq!(keys(&state, Facet::ContentArea), vec!["s3"]);

        state.select_content_area("s3");
        assert!(state.selected(Facet::ContentArea).is_empty());
    }

    #[test]
    fn test_toggle_content_area_honors_single_mode() {
        let mut state = FilterState::new(ContentAreaMode::Single);
        state.toggle(Facet::ContentArea, "s1");
        state.toggle(Facet::ContentArea, "s2");
        assert_eq!(keys(&state, Facet::ContentArea), vec!["s2"]);

        let pairs = crate::query::encode(
            &state,
            &crate::query::QueryState::default(),
            crate::types::SecondMetric::AIrt,
        );
        let areas: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| *k == "content_area")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(areas, vec!["s2"]);

        state.toggle(Facet::ContentArea, "s2");
        assert!(state.selected(Facet::ContentArea).is_empty());
    }

    #[test]
    fn test_multi_content_area_accumulates() {
        let mut state = FilterState::new(ContentAreaMode::Multi);
        state.select_content_area("s1");
        state.select_content_area("s3");
        assert_eq!(keys(&state, Facet::ContentArea), vec!["s1", "s3"]);

        state.select_content_area("s1");
        assert_eq!(keys(&state, Facet::ContentArea), vec!["s3"]);
    }

    #[test]
    fn test_set_range_trims_and_clears() {
        let mut state = FilterState::default();
        state.set_range(RangeField::Meanp, RangeBound::Min, " 0.2 ");
        assert_eq!(state.range(RangeField::Meanp, RangeBound::Min), "0.2");

        state.set_range(RangeField::Meanp, RangeBound::Min, "   ");
        assert_eq!(state.range(RangeField::Meanp, RangeBound::Min), "");
        assert!(state.is_empty());
    }

    #[test]
    fn test_range_allows_inverted_and_non_numeric_bounds() {
        let mut state = FilterState::default();
        state.set_range(RangeField::Metric, RangeBound::Min, "0.9");
        state.set_range(RangeField::Metric, RangeBound::Max, "0.1");
        state.set_range(RangeField::Meanp, RangeBound::Max, "abc");

        assert_eq!(state.range(RangeField::Metric, RangeBound::Min), "0.9");
        assert_eq!(state.range(RangeField::Metric, RangeBound::Max), "0.1");
        assert_eq!(state.range(RangeField::Meanp, RangeBound::Max), "abc");
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = FilterState::new(ContentAreaMode::Single);
        state.toggle(Facet::ItemType, "MC");
        state.select_content_area("s2");
        state.set_range(RangeField::Meanp, RangeBound::Max, "0.8");
        assert_eq!(state.active_count(), 3);

        state.reset();

        assert!(state.is_empty());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.content_area_mode(), ContentAreaMode::Single);
    }

    #[test]
    fn test_replace_single_mode_keeps_first() {
        let mut state = FilterState::new(ContentAreaMode::Single);
        state.replace(Facet::ContentArea, &["s4".to_string(), "s1".to_string()]);
        assert_eq!(keys(&state, Facet::ContentArea), vec!["s4"]);

        state.replace(Facet::Level, &["G3".to_string(), "G9".to_string()]);
        assert_eq!(keys(&state, Facet::Level), vec!["G3", "G9"]);
    }
}
