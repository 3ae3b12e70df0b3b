use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indicator appended to the header of a column sorted ascending
pub const ASCENDING_INDICATOR: char = '\u{25BE}';

/// Indicator appended to the header of a column sorted descending
pub const DESCENDING_INDICATOR: char = '\u{25B4}';

/// Two-digit years below the pivot belong to the 2000s, the rest to the 1900s
pub const DEFAULT_TWO_DIGIT_YEAR_PIVOT: u32 = 70;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PGREPORT";

/// Direction of a column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator glyph for this direction
    pub fn indicator(self) -> char {
        match self {
            SortDirection::Ascending => ASCENDING_INDICATOR,
            SortDirection::Descending => DESCENDING_INDICATOR,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}
