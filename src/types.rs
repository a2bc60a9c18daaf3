use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExplorerError;

/// Key under which filter selections are persisted. Bump the suffix when the
/// stored layout changes incompatibly.
pub const FILTER_STORAGE_KEY: &str = "itembank.filters.v1";

/// A multi-value facet of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    ItemType,
    Level,
    ContentArea,
    TargetArea,
    NutaSkillLevel,
    Source,
}

impl Facet {
    /// All facets, in the order they are encoded into a query.
    pub const ALL: [Facet; 6] = [
        Facet::ItemType,
        Facet::Level,
        Facet::ContentArea,
        Facet::TargetArea,
        Facet::NutaSkillLevel,
        Facet::Source,
    ];

    /// Query parameter (and storage field) name for this facet.
    pub fn param(self) -> &'static str {
        match self {
            Facet::ItemType => "item_type",
            Facet::Level => "level",
            Facet::ContentArea => "content_area",
            Facet::TargetArea => "target_area",
            Facet::NutaSkillLevel => "nuta_skill_level",
            Facet::Source => "source",
        }
    }

    /// Human-readable label for headings.
    pub fn label(self) -> &'static str {
        match self {
            Facet::ItemType => "Item type",
            Facet::Level => "Level",
            Facet::ContentArea => "Content area",
            Facet::TargetArea => "Target area",
            Facet::NutaSkillLevel => "NuTa skill level",
            Facet::Source => "Source",
        }
    }
}

enum_display_fromstr!(Facet, ExplorerError::invalid_facet, {
    ItemType => "item_type" | "type",
    Level => "level",
    ContentArea => "content_area" | "area",
    TargetArea => "target_area" | "target",
    NutaSkillLevel => "nuta_skill_level" | "nuta",
    Source => "source",
});

/// A numeric range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeField {
    /// Classical mean p-value (difficulty).
    Meanp,
    /// The configured second metric, see [`SecondMetric`].
    Metric,
}

impl FromStr for RangeField {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meanp" => Ok(RangeField::Meanp),
            "metric" | "a_irt" | "meanrit" => Ok(RangeField::Metric),
            _ => Err(ExplorerError::InvalidFacet(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBound {
    Min,
    Max,
}

impl RangeBound {
    pub fn suffix(self) -> &'static str {
        match self {
            RangeBound::Min => "min",
            RangeBound::Max => "max",
        }
    }
}

impl FromStr for RangeBound {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min" => Ok(RangeBound::Min),
            "max" => Ok(RangeBound::Max),
            _ => Err(ExplorerError::InvalidFacet(s.to_string())),
        }
    }
}

/// Selection policy for the content-area facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAreaMode {
    /// At most one content area is selected at a time.
    Single,
    /// Content areas behave like every other multi-value facet.
    #[default]
    Multi,
}

/// Which discrimination statistic backs the second range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondMetric {
    #[default]
    AIrt,
    Meanrit,
}

impl SecondMetric {
    /// Prefix of the `<prefix>_min` / `<prefix>_max` query parameters.
    pub fn param_prefix(self) -> &'static str {
        match self {
            SecondMetric::AIrt => "a_irt",
            SecondMetric::Meanrit => "meanrit",
        }
    }
}

impl fmt::Display for SecondMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.param_prefix())
    }
}

/// Allowed page sizes.
pub const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

/// Number of rows per result page, restricted to [`PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(size: u32) -> Result<Self, ExplorerError> {
        if PAGE_SIZES.contains(&size) {
            Ok(PageSize(size))
        } else {
            Err(ExplorerError::InvalidPageSize(size.to_string()))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Pages needed to show `total` rows; zero rows means zero pages.
    /// Saturates at `u32::MAX`.
    pub fn total_pages(self, total: u64) -> u32 {
        u32::try_from(total.div_ceil(u64::from(self.0))).unwrap_or(u32::MAX)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(25)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ExplorerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl FromStr for PageSize {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| ExplorerError::InvalidPageSize(s.to_string()))?;
        PageSize::new(n)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
