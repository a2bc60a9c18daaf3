//! Sortable columns and sort direction for item listings.
//!
//! The column names are the values the data service accepts for `sort_by`.

use crate::error::ExplorerError;

/// Sortable column of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    Label,
    Name,
    Name2,
    Source,
    Type,
    Level,
    MeanpAll,
    AIrt,
    MeanritClassical,
    N,
}

impl SortColumn {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &[
        "id",
        "label",
        "name",
        "name_2",
        "source",
        "type",
        "level",
        "meanp_all",
        "a_irt",
        "meanrit_classical",
        "n",
    ];
}

enum_display_fromstr!(SortColumn, ExplorerError::invalid_sort_column, {
    Id => "id",
    Label => "label",
    Name => "name",
    Name2 => "name_2",
    Source => "source",
    Type => "type",
    Level => "level",
    MeanpAll => "meanp_all" | "meanp",
    AIrt => "a_irt",
    MeanritClassical => "meanrit_classical" | "meanrit",
    N => "n",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

enum_display_fromstr!(SortDirection, ExplorerError::invalid_sort_direction, {
    Asc => "asc" | "ascending",
    Desc => "desc" | "descending",
});
