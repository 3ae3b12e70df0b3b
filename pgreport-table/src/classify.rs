//! Column type inference from rendered cell text.
//!
//! Cells are scanned top to bottom, skipping blanks, until one of them shape
//! matches a definitive type. Day/month dates whose fields are both twelve or
//! less are ambiguous: they record a tentative day-first type and scanning
//! continues in case a later cell settles the order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

pub(crate) static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?[£$€¥¤]?[0-9,.]*[0-9][0-9,.]*\s*(?:(?:[KMGTP]i?)?B?(?:/s)?|%)$")
        .expect("numeric regex should compile")
});

pub(crate) static DATE_YMD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("ymd date regex should compile")
});

pub(crate) static DATE_DM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})[/.-]([0-9]{1,2})[/.-]([0-9]{4}|[0-9]{2})$")
        .expect("day/month date regex should compile")
});

/// Parenthesized percentage annotation, optionally wrapped in markup
pub(crate) static ANNOTATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(?:<[^>]*>\s*)*\([^()]*%\).*$").expect("annotation regex should compile")
});

/// Inferred content category of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    /// Plain numbers and unit-suffixed magnitudes
    Numeric,
    /// Numbers carrying a parenthesized percentage annotation
    Percentage,
    DateDmy,
    DateMdy,
    DateYmd,
    Alphabetic,
}

impl ColumnType {
    pub fn is_date(self) -> bool {
        matches!(
            self,
            ColumnType::DateDmy | ColumnType::DateMdy | ColumnType::DateYmd
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Percentage => write!(f, "percentage"),
            ColumnType::DateDmy => write!(f, "date-dmy"),
            ColumnType::DateMdy => write!(f, "date-mdy"),
            ColumnType::DateYmd => write!(f, "date-ymd"),
            ColumnType::Alphabetic => write!(f, "alphabetic"),
        }
    }
}

/// Outcome of inspecting a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellShape {
    Definitive(ColumnType),
    Tentative(ColumnType),
    Unknown,
}

fn inspect_cell(text: &str) -> CellShape {
    if NUMERIC_PATTERN.is_match(text) {
        return CellShape::Definitive(ColumnType::Numeric);
    }

    if DATE_YMD_PATTERN.is_match(text) {
        return CellShape::Definitive(ColumnType::DateYmd);
    }

    if let Some(caps) = DATE_DM_PATTERN.captures(text) {
        let first: u32 = caps[1].parse().unwrap_or(0);
        let second: u32 = caps[2].parse().unwrap_or(0);
        return if first > 12 {
            CellShape::Definitive(ColumnType::DateDmy)
        } else if second > 12 {
            CellShape::Definitive(ColumnType::DateMdy)
        } else {
            CellShape::Tentative(ColumnType::DateDmy)
        };
    }

    if let Some(value) = strip_annotation(text) {
        if value.bytes().any(|b| b.is_ascii_digit()) {
            return CellShape::Definitive(ColumnType::Percentage);
        }
    }

    CellShape::Unknown
}

/// Text before a percentage annotation, if the text carries one
pub(crate) fn strip_annotation(text: &str) -> Option<&str> {
    ANNOTATION_PATTERN.find(text).map(|m| &text[..m.start()])
}

/// Classify a column from its cell texts
///
/// Blank cells are ignored; an all-blank column is alphabetic.
pub fn classify_column<'a, I>(cells: I) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tentative = None;

    for text in cells {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        match inspect_cell(text) {
            CellShape::Definitive(column_type) => {
                trace!(cell = text, %column_type, "definitive cell match");
                return column_type;
            }
            CellShape::Tentative(column_type) => {
                trace!(cell = text, %column_type, "ambiguous cell match");
                tentative.get_or_insert(column_type);
            }
            CellShape::Unknown => {}
        }
    }

    tentative.unwrap_or(ColumnType::Alphabetic)
}
