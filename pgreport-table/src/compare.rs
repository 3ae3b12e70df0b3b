//! Sort key extraction and comparators for each column type.
//!
//! Every comparator is total: empty or malformed text becomes a zero
//! magnitude, the lowest date, or the empty string.

use crate::classify::{strip_annotation, ColumnType, DATE_DM_PATTERN, DATE_YMD_PATTERN};
use once_cell::sync::Lazy;
use pgreport_common::DEFAULT_TWO_DIGIT_YEAR_PIVOT;
use regex::Regex;
use std::cmp::Ordering;

/// `K`..`P` unit token after a digit or whitespace, anywhere in the text
static UNIT_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[0-9\s])([KMGTP])(i?)B?(?:/s)?\b").expect("unit suffix regex should compile")
});

/// Normalized value compared while sorting
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Scaled numeric magnitude
    Magnitude(f64),
    /// `yyyymmdd` ordinal; `None` for malformed dates, which sort lowest
    Date(Option<u32>),
    /// Trimmed text, compared by code point
    Text(String),
}

impl SortKey {
    /// Extract the key for `text` under a column type
    pub fn extract(column_type: ColumnType, text: &str, year_pivot: u32) -> Self {
        let text = text.trim();
        match column_type {
            ColumnType::Numeric => SortKey::Magnitude(numeric_magnitude(text)),
            ColumnType::Percentage => SortKey::Magnitude(annotated_magnitude(text)),
            ColumnType::DateDmy | ColumnType::DateMdy | ColumnType::DateYmd => {
                SortKey::Date(date_ordinal(column_type, text, year_pivot))
            }
            ColumnType::Alphabetic => SortKey::Text(text.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Magnitude(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

/// Order two extracted keys
pub fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Magnitude(x), SortKey::Magnitude(y)) => compare_magnitudes(*x, *y),
        // `None < Some(_)` puts malformed dates first
        (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        // Keys within one column share a variant; mixed keys still order totally
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Order two cell texts under a column type
pub fn compare_text(column_type: ColumnType, a: &str, b: &str) -> Ordering {
    compare(
        &SortKey::extract(column_type, a, DEFAULT_TWO_DIGIT_YEAR_PIVOT),
        &SortKey::extract(column_type, b, DEFAULT_TWO_DIGIT_YEAR_PIVOT),
    )
}

/// Order two numeric cells by unit-scaled magnitude
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    compare_magnitudes(numeric_magnitude(a), numeric_magnitude(b))
}

/// Order two cells by the value before their percentage annotation
pub fn compare_percentage(a: &str, b: &str) -> Ordering {
    compare_magnitudes(annotated_magnitude(a), annotated_magnitude(b))
}

/// Order two cells by trimmed text
pub fn compare_alpha(a: &str, b: &str) -> Ordering {
    a.trim().cmp(b.trim())
}

fn compare_magnitudes(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Magnitude of a numeric cell, scaled by its unit suffix
pub fn numeric_magnitude(text: &str) -> f64 {
    let value = parse_leading_number(&strip_to_numeric(text)).unwrap_or(0.0);
    value * unit_multiplier(text)
}

/// Magnitude of a cell with its percentage annotation removed
pub fn annotated_magnitude(text: &str) -> f64 {
    let value = strip_annotation(text).unwrap_or(text);
    parse_leading_number(&strip_to_numeric(value)).unwrap_or(0.0)
}

/// Scale factor for the first `K`..`P` unit token; IEC `Ki`..`Pi` use powers of 1024
pub fn unit_multiplier(text: &str) -> f64 {
    let Some(caps) = UNIT_SUFFIX_PATTERN.captures(text.trim()) else {
        return 1.0;
    };

    let exponent = match &caps[1] {
        "K" => 1,
        "M" => 2,
        "G" => 3,
        "T" => 4,
        "P" => 5,
        _ => return 1.0,
    };

    if caps[2].is_empty() {
        1000f64.powi(exponent)
    } else {
        1024f64.powi(exponent)
    }
}

fn strip_to_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Parse the longest leading decimal number, ignoring trailing garbage
///
/// Accepts an optional `-`, digits and one fractional part. `"1.2.3"` reads
/// as `1.2` and `"5-3"` as `5`; text without a leading number yields `None`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }

    text[..end].parse().ok()
}

/// `yyyymmdd` ordinal of a date cell, `None` when it does not parse
pub fn date_ordinal(column_type: ColumnType, text: &str, year_pivot: u32) -> Option<u32> {
    let (year, month, day) = match column_type {
        ColumnType::DateYmd => {
            let caps = DATE_YMD_PATTERN.captures(text)?;
            (
                caps[1].to_string(),
                caps[2].parse::<u32>().ok()?,
                caps[3].parse::<u32>().ok()?,
            )
        }
        ColumnType::DateDmy => {
            let caps = DATE_DM_PATTERN.captures(text)?;
            (
                caps[3].to_string(),
                caps[2].parse::<u32>().ok()?,
                caps[1].parse::<u32>().ok()?,
            )
        }
        ColumnType::DateMdy => {
            let caps = DATE_DM_PATTERN.captures(text)?;
            (
                caps[3].to_string(),
                caps[1].parse::<u32>().ok()?,
                caps[2].parse::<u32>().ok()?,
            )
        }
        ColumnType::Numeric | ColumnType::Percentage | ColumnType::Alphabetic => return None,
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let year = expand_year(&year, year_pivot)?;
    Some(year * 10_000 + month * 100 + day)
}

fn expand_year(year: &str, pivot: u32) -> Option<u32> {
    let value: u32 = year.parse().ok()?;
    if year.len() == 2 {
        Some(if value < pivot { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(column_type: ColumnType, cells: &[&str]) -> Vec<String> {
        let mut cells: Vec<&str> = cells.to_vec();
        cells.sort_by(|a, b| compare_text(column_type, a, b));
        cells.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_unit_normalization() {
        assert_eq!(
            sorted(ColumnType::Numeric, &["2 MB", "500 KB", "1 GB"]),
            vec!["500 KB", "2 MB", "1 GB"]
        );
        assert_eq!(
            sorted(ColumnType::Numeric, &["1.5 KB", "999 B", "3 TB", "1 PB"]),
            vec!["999 B", "1.5 KB", "3 TB", "1 PB"]
        );
    }

    #[test]
    fn test_unit_multiplier() {
        assert_eq!(unit_multiplier("2 MB"), 1e6);
        assert_eq!(unit_multiplier("2MB"), 1e6);
        assert_eq!(unit_multiplier("3 K"), 1e3);
        assert_eq!(unit_multiplier("4 GB/s"), 1e9);
        assert_eq!(unit_multiplier("1 KiB"), 1024.0);
        assert_eq!(unit_multiplier("1 MiB"), 1024.0 * 1024.0);
        assert_eq!(unit_multiplier("999 B"), 1.0);
        assert_eq!(unit_multiplier("42"), 1.0);
        assert_eq!(unit_multiplier("OK"), 1.0);
    }

    #[test]
    fn test_unit_token_inside_text() {
        assert_eq!(unit_multiplier("2 GB free"), 1e9);
        assert_eq!(unit_multiplier("2 GB (5%)"), 1e9);
        assert_eq!(unit_multiplier("12 KiB, compressed"), 1024.0);
        assert_eq!(unit_multiplier("123 Total"), 1.0);
        assert_eq!(unit_multiplier("3 Kilos"), 1.0);
        assert_eq!(numeric_magnitude("2 GB free"), 2e9);
        assert_eq!(compare_numeric("2 GB free", "1 MB"), Ordering::Greater);
    }

    #[test]
    fn test_date_ordinal_of_non_date_types() {
        for column_type in [ColumnType::Numeric, ColumnType::Percentage, ColumnType::Alphabetic] {
            assert_eq!(date_ordinal(column_type, "2020-01-05", 70), None);
        }
    }

    #[test]
    fn test_malformed_numeric_is_zero() {
        assert_eq!(numeric_magnitude(""), 0.0);
        assert_eq!(numeric_magnitude("N/A"), 0.0);
        assert_eq!(numeric_magnitude("-"), 0.0);
        assert_eq!(compare_numeric("N/A", ""), Ordering::Equal);
        assert_eq!(compare_numeric("N/A", "-1"), Ordering::Greater);
        assert_eq!(compare_numeric("N/A", "1"), Ordering::Less);
    }

    #[test]
    fn test_separators_and_currency() {
        assert_eq!(numeric_magnitude("1,234,567"), 1_234_567.0);
        assert_eq!(numeric_magnitude("$12.50"), 12.5);
        assert_eq!(numeric_magnitude("-3.5"), -3.5);
        assert_eq!(numeric_magnitude("45%"), 45.0);
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_number("5-3"), Some(5.0));
        assert_eq!(parse_leading_number("-.5"), Some(-0.5));
        assert_eq!(parse_leading_number("7."), Some(7.0));
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("--5"), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn test_percentage_annotation_stripped() {
        assert_eq!(
            sorted(ColumnType::Percentage, &["10 (5%)", "3 (50%)"]),
            vec!["3 (50%)", "10 (5%)"]
        );
        assert_eq!(annotated_magnitude("1,024 <small>(12.5%)</small>"), 1024.0);
        assert_eq!(compare_percentage("7 (1%)", "7 (99%)"), Ordering::Equal);
    }

    #[test]
    fn test_percentage_without_annotation_is_numeric() {
        assert_eq!(compare_percentage("9", "10"), Ordering::Less);
        assert_eq!(compare_percentage("", "0 (0%)"), Ordering::Equal);
    }

    #[test]
    fn test_day_month_dates() {
        assert_eq!(
            sorted(
                ColumnType::DateDmy,
                &["03/01/2020", "15/12/2019", "01/01/2021"]
            ),
            vec!["15/12/2019", "03/01/2020", "01/01/2021"]
        );
        assert_eq!(
            sorted(ColumnType::DateMdy, &["12/25/2020", "01/02/2021", "11/30/2020"]),
            vec!["11/30/2020", "12/25/2020", "01/02/2021"]
        );
        assert_eq!(
            sorted(ColumnType::DateYmd, &["2021-01-01", "2019-12-15", "2020-1-3"]),
            vec!["2019-12-15", "2020-1-3", "2021-01-01"]
        );
    }

    #[test]
    fn test_two_digit_years_use_pivot() {
        assert_eq!(date_ordinal(ColumnType::DateDmy, "15/12/99", 70), Some(19991215));
        assert_eq!(date_ordinal(ColumnType::DateDmy, "15/12/05", 70), Some(20051215));
        assert_eq!(date_ordinal(ColumnType::DateDmy, "15/12/05", 0), Some(19051215));
    }

    #[test]
    fn test_malformed_dates_sort_lowest() {
        assert_eq!(date_ordinal(ColumnType::DateDmy, "45/45/2020", 70), None);
        assert_eq!(date_ordinal(ColumnType::DateYmd, "yesterday", 70), None);
        assert_eq!(
            sorted(ColumnType::DateDmy, &["01/01/2000", "", "garbage"]),
            vec!["", "garbage", "01/01/2000"]
        );
    }

    #[test]
    fn test_alphabetic_is_code_point_order() {
        assert_eq!(
            sorted(ColumnType::Alphabetic, &["beta", "", "Alpha", "alpha"]),
            vec!["", "Alpha", "alpha", "beta"]
        );
        assert_eq!(compare_alpha(" x ", "x"), Ordering::Equal);
    }

    #[test]
    fn test_mixed_keys_order_totally() {
        let number = SortKey::Magnitude(1.0);
        let text = SortKey::Text("a".to_string());
        assert_eq!(compare(&number, &text), Ordering::Less);
        assert_eq!(compare(&text, &number), Ordering::Greater);
    }
}
