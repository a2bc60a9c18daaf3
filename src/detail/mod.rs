//! Item detail records and their render-ready view.

pub mod normalize;
pub mod record;

pub use normalize::{Bar, bar_percent, normalize_group};
pub use record::{
    ContentAreaBreakdown, DetailRecord, DifficultyMetrics, DiscriminationMetrics, GroupEntry,
    NutaBreakdown, NutaWeights, TargetAreaBreakdown,
};

/// A detail record prepared for display: weight groups become bars,
/// difficulty and discrimination stay plain key/value lists.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub record: DetailRecord,
    pub content_area: Vec<Bar>,
    pub nuta_weights: Vec<Bar>,
    pub targets: Vec<Bar>,
    pub difficulty: Vec<GroupEntry>,
    pub discrimination: Vec<GroupEntry>,
}

impl DetailView {
    pub fn from_record(record: DetailRecord) -> Self {
        Self {
            content_area: normalize_group(&record.content_area.entries()),
            nuta_weights: normalize_group(&record.nuta.weights.entries()),
            targets: normalize_group(&record.targets.entries()),
            difficulty: record.difficulty.entries(),
            discrimination: record.discrimination.entries(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_scaled_independently() {
        let record: DetailRecord = serde_json::from_str(
            r#"{
                "id": 3,
                "content_area": {"S2": 4.0, "S3": 1.0},
                "nuta": {"weights": {"c5_fractions": 0.5}},
                "targets": {}
            }"#,
        )
        .unwrap();

        let view = DetailView::from_record(record);

        let s2 = view.content_area.iter().find(|b| b.key == "s2").unwrap();
        let s3 = view.content_area.iter().find(|b| b.key == "s3").unwrap();
        assert_eq!(s2.percent, 100.0);
        assert_eq!(s3.percent, 25.0);

        let c5 = view.nuta_weights.iter().find(|b| b.key == "c5").unwrap();
        assert_eq!(c5.percent, 100.0);

        assert!(view.targets.iter().all(|b| b.percent == 0.0));
        assert_eq!(view.difficulty.len(), 13);
    }
}
