//! Full detail record returned by `GET /api/items/{id}`.
//!
//! Every numeric group is an explicit struct with named optional fields so
//! rendering code gets compile-time coverage of each sub-field.

use serde::{Deserialize, Serialize};

use crate::remote::models::opt_key;

/// A named numeric sub-field of a detail group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub value: Option<f64>,
}

impl GroupEntry {
    fn new(key: &'static str, label: &'static str, value: Option<f64>) -> Self {
        Self { key, label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: i64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_2: Option<String>,
    /// Maximum attainable score
    #[serde(default)]
    pub max: Option<f64>,
    /// Number of responses
    #[serde(default)]
    pub n: Option<f64>,
    #[serde(default, deserialize_with = "opt_key")]
    pub source: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "opt_key")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "opt_key")]
    pub hierarchical_level: Option<String>,
    #[serde(default)]
    pub dominant_content_area: Option<String>,
    #[serde(default)]
    pub difficulty: DifficultyMetrics,
    #[serde(default)]
    pub discrimination: DiscriminationMetrics,
    #[serde(default)]
    pub content_area: ContentAreaBreakdown,
    #[serde(default)]
    pub nuta: NutaBreakdown,
    #[serde(default)]
    pub targets: TargetAreaBreakdown,
}

/// Classical and IRT difficulty statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyMetrics {
    pub meanp_all_classical: Option<f64>,
    pub p_g3_classical: Option<f64>,
    pub p_g6_classical: Option<f64>,
    pub p_g8_classical: Option<f64>,
    pub p_g9_classical: Option<f64>,
    pub b_0_1_irt: Option<f64>,
    pub b01_2_irt: Option<f64>,
    pub b012_3_irt: Option<f64>,
    pub b0123_4_irt: Option<f64>,
    pub se_b_0_1_irt: Option<f64>,
    pub se_b01_2_irt: Option<f64>,
    pub se_b012_3_irt: Option<f64>,
    pub se_b0123_4_irt: Option<f64>,
}

impl DifficultyMetrics {
    pub fn entries(&self) -> Vec<GroupEntry> {
        vec![
            GroupEntry::new("meanp_all_classical", "Mean p (all)", self.meanp_all_classical),
            GroupEntry::new("p_g3_classical", "p grade 3", self.p_g3_classical),
            GroupEntry::new("p_g6_classical", "p grade 6", self.p_g6_classical),
            GroupEntry::new("p_g8_classical", "p grade 8", self.p_g8_classical),
            GroupEntry::new("p_g9_classical", "p grade 9", self.p_g9_classical),
            GroupEntry::new("b_0_1_irt", "b 0|1 (IRT)", self.b_0_1_irt),
            GroupEntry::new("b01_2_irt", "b 01|2 (IRT)", self.b01_2_irt),
            GroupEntry::new("b012_3_irt", "b 012|3 (IRT)", self.b012_3_irt),
            GroupEntry::new("b0123_4_irt", "b 0123|4 (IRT)", self.b0123_4_irt),
            GroupEntry::new("se_b_0_1_irt", "SE b 0|1", self.se_b_0_1_irt),
            GroupEntry::new("se_b01_2_irt", "SE b 01|2", self.se_b01_2_irt),
            GroupEntry::new("se_b012_3_irt", "SE b 012|3", self.se_b012_3_irt),
            GroupEntry::new("se_b0123_4_irt", "SE b 0123|4", self.se_b0123_4_irt),
        ]
    }
}

/// Classical and IRT discrimination statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscriminationMetrics {
    pub meanrit_classical: Option<f64>,
    pub meang_classical: Option<f64>,
    pub meand_classical: Option<f64>,
    pub meanstd_classical: Option<f64>,
    pub a_irt: Option<f64>,
}

impl DiscriminationMetrics {
    pub fn entries(&self) -> Vec<GroupEntry> {
        vec![
            GroupEntry::new("meanrit_classical", "Mean r_it", self.meanrit_classical),
            GroupEntry::new("meang_classical", "Mean g", self.meang_classical),
            GroupEntry::new("meand_classical", "Mean d", self.meand_classical),
            GroupEntry::new("meanstd_classical", "Mean std", self.meanstd_classical),
            GroupEntry::new("a_irt", "a (IRT)", self.a_irt),
        ]
    }
}

/// Weight of the item in each curriculum content area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentAreaBreakdown {
    #[serde(rename = "S1")]
    pub s1: Option<f64>,
    #[serde(rename = "S2")]
    pub s2: Option<f64>,
    #[serde(rename = "S3")]
    pub s3: Option<f64>,
    #[serde(rename = "S4")]
    pub s4: Option<f64>,
    #[serde(rename = "S5")]
    pub s5: Option<f64>,
    #[serde(rename = "S6")]
    pub s6: Option<f64>,
}

impl ContentAreaBreakdown {
    pub fn entries(&self) -> Vec<GroupEntry> {
        vec![
            GroupEntry::new("s1", "S1 Thinking Skills (incl. Computational Thinking)", self.s1),
            GroupEntry::new("s2", "S2 Numbers & Operations", self.s2),
            GroupEntry::new("s3", "S3 Algebra", self.s3),
            GroupEntry::new("s4", "S4 Functions", self.s4),
            GroupEntry::new("s5", "S5 Geometry & Measurement", self.s5),
            GroupEntry::new("s6", "S6 Data Handling, Statistics & Probability", self.s6),
        ]
    }
}

/// NuTa skill level, commentary and weights across its content dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutaBreakdown {
    #[serde(deserialize_with = "opt_key")]
    pub nuta_skill_level: Option<String>,
    /// Free-text commentary
    pub contents: Option<String>,
    pub weights: NutaWeights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutaWeights {
    pub c1_numeric_system: Option<f64>,
    pub c2_basic_numerical_operations: Option<f64>,
    pub c3_geometry: Option<f64>,
    pub c4_time_and_measures: Option<f64>,
    pub c5_fractions: Option<f64>,
    pub c6_decimal_numbers: Option<f64>,
    pub c7_percentages: Option<f64>,
    pub c8_circumference_area_and_volume: Option<f64>,
    pub c9_statistics_and_probability: Option<f64>,
}

impl NutaWeights {
    pub fn entries(&self) -> Vec<GroupEntry> {
        vec![
            GroupEntry::new("c1", "C1 Numeric System", self.c1_numeric_system),
            GroupEntry::new(
                "c2",
                "C2 Basic Numerical Operations",
                self.c2_basic_numerical_operations,
            ),
            GroupEntry::new("c3", "C3 Geometry", self.c3_geometry),
            GroupEntry::new("c4", "C4 Time & Measures", self.c4_time_and_measures),
            GroupEntry::new("c5", "C5 Fractions", self.c5_fractions),
            GroupEntry::new("c6", "C6 Decimal Numbers", self.c6_decimal_numbers),
            GroupEntry::new("c7", "C7 Percentages", self.c7_percentages),
            GroupEntry::new(
                "c8",
                "C8 Circumference, Area & Volume",
                self.c8_circumference_area_and_volume,
            ),
            GroupEntry::new(
                "c9",
                "C9 Statistics & Probability",
                self.c9_statistics_and_probability,
            ),
        ]
    }
}

/// Weight of the item in each national target area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetAreaBreakdown {
    pub t10: Option<f64>,
    pub t11: Option<f64>,
    pub t12: Option<f64>,
    pub t13: Option<f64>,
    pub t14: Option<f64>,
    pub t15: Option<f64>,
    pub t16: Option<f64>,
    pub t17: Option<f64>,
    pub t18: Option<f64>,
    pub t19: Option<f64>,
    pub t20: Option<f64>,
}

impl TargetAreaBreakdown {
    pub fn entries(&self) -> Vec<GroupEntry> {
        vec![
            GroupEntry::new("t10", "T10 Mental Calculations & Inferences (S1/S2)", self.t10),
            GroupEntry::new("t11", "T11 Basic Calcs with Rational Numbers (S2)", self.t11),
            GroupEntry::new("t12", "T12 Concept of a Real Number (S2)", self.t12),
            GroupEntry::new("t13", "T13 Proportions & Percentages (S2)", self.t13),
            GroupEntry::new("t14", "T14 Solves Equations (S3/S4)", self.t14),
            GroupEntry::new("t15", "T15 Interprets & Forms Functions (S3/S4)", self.t15),
            GroupEntry::new("t16", "T16 Relations between Geometric Concepts (S5)", self.t16),
            GroupEntry::new("t17", "T17 Right Triangles & Circles (S5)", self.t17),
            GroupEntry::new("t18", "T18 Areas & Volumes (S5)", self.t18),
            GroupEntry::new("t19", "T19 Statistics & Probability (S6)", self.t19),
            GroupEntry::new("t20", "T20 Algorithmic Thinking & Programming (S1)", self.t20),
        ]
    }
}
