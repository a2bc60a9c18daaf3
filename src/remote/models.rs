//! Wire types returned by the item-bank API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowProjection {
    pub id: i64,
    #[serde(default)]
    pub label: Option<String>,
    /// Display subtitle
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_key")]
    pub source: Option<String>,
    #[serde(default, rename = "item_type_all", deserialize_with = "opt_key")]
    pub item_type: Option<String>,
    #[serde(default, rename = "hierarchical_level_all", deserialize_with = "opt_key")]
    pub level: Option<String>,
    /// Label of the content area with the largest weight, if any weight is positive
    #[serde(default)]
    pub dominant_content_area: Option<String>,
    #[serde(default, rename = "meanp_all_classical")]
    pub meanp: Option<f64>,
    #[serde(default)]
    pub a_irt: Option<f64>,
    #[serde(default, rename = "meanrit_classical")]
    pub meanrit: Option<f64>,
}

/// Response body of `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    pub total: u64,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub items: Vec<RowProjection>,
}

/// A facet value with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledKey {
    pub key: String,
    pub label: String,
}

/// Response body of `GET /api/filters`: every selectable facet value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCatalog {
    #[serde(default, deserialize_with = "key_list")]
    pub item_types: Vec<String>,
    #[serde(default, deserialize_with = "key_list")]
    pub hierarchical_levels: Vec<String>,
    #[serde(default, deserialize_with = "key_list")]
    pub nuta_skill_levels: Vec<String>,
    #[serde(default, deserialize_with = "key_list")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub content_areas: Vec<LabeledKey>,
    #[serde(default)]
    pub target_areas: Vec<LabeledKey>,
}

/// Response body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Facet keys are opaque strings, but the service hands some of them out as
/// JSON numbers (skill levels, for instance). Accept both.
pub(crate) fn value_to_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn key_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(values.iter().filter_map(value_to_key).collect())
}

pub(crate) fn opt_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_key))
}
