//! Human-readable magnitudes for axis ticks and tooltips.

use serde::{Deserialize, Serialize};

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;
const PIB: f64 = TIB * 1024.0;

const BINARY_UNITS: &[(f64, &str)] = &[
    (PIB, "PiB"),
    (TIB, "TiB"),
    (GIB, "GiB"),
    (MIB, "MiB"),
    (KIB, "KiB"),
];

const DECIMAL_UNITS: &[(f64, &str)] = &[
    (1e15, "P"),
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "K"),
];

/// How a value is scaled, derived from the label of its series or axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// Bytes in 1024-based multiples
    Size,
    /// Milliseconds, switching to seconds from 1000 ms
    Duration,
    /// Counts in 1000-based multiples
    Decimal,
    /// Fixed-point without a unit
    Plain,
}

impl UnitKind {
    /// Pick the unit kind for a label by case-insensitive substring search
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => UnitKind::Plain,
            Some(label) => {
                let label = label.to_lowercase();
                if label.contains("size") {
                    UnitKind::Size
                } else if label.contains("duration") {
                    UnitKind::Duration
                } else {
                    UnitKind::Decimal
                }
            }
        }
    }
}

/// Format a value with the given number of decimals in its unit kind
///
/// A precision of zero is raised to one for non-zero values.
pub fn format_magnitude(value: f64, precision: u32, unit: UnitKind) -> String {
    let precision = if precision == 0 && value != 0.0 {
        1
    } else {
        precision as usize
    };

    match unit {
        UnitKind::Size => {
            for &(factor, suffix) in BINARY_UNITS {
                if value.abs() >= factor {
                    return format!("{:.*} {}", precision, value / factor, suffix);
                }
            }
            format!("{:.*} B", precision, value)
        }
        UnitKind::Duration => {
            if value.abs() >= 1000.0 {
                format!("{:.*} sec", precision, value / 1000.0)
            } else {
                format!("{} ms", value)
            }
        }
        UnitKind::Decimal => {
            for &(factor, suffix) in DECIMAL_UNITS {
                if value.abs() >= factor {
                    return format!("{:.*} {}", precision, value / factor, suffix);
                }
            }
            format!("{:.*}", precision, value)
        }
        UnitKind::Plain => format!("{:.*}", precision, value),
    }
}

/// Format a number with `,` thousands separators and two decimals,
/// omitting the decimals when they round to zero
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut fraction = ((magnitude - whole) * 100.0).round() as u32;
    if fraction >= 100 {
        whole += 1.0;
        fraction = 0;
    }
    let whole = format!("{:.0}", whole);

    let mut formatted = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 && (whole != "0" || fraction > 0) {
        formatted.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    if fraction > 0 {
        formatted.push_str(&format!(".{:02}", fraction));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_kind_from_label() {
        assert_eq!(UnitKind::from_label(Some("Database Size")), UnitKind::Size);
        assert_eq!(UnitKind::from_label(Some("Avg DURATION")), UnitKind::Duration);
        assert_eq!(UnitKind::from_label(Some("commits")), UnitKind::Decimal);
        assert_eq!(UnitKind::from_label(None), UnitKind::Plain);
    }

    #[test]
    fn test_size_formatting() {
        assert_eq!(format_magnitude(1536.0, 2, UnitKind::Size), "1.50 KiB");
        assert_eq!(format_magnitude(3.0 * GIB, 0, UnitKind::Size), "3.0 GiB");
        assert_eq!(format_magnitude(512.0, 2, UnitKind::Size), "512.00 B");
        assert_eq!(format_magnitude(2.0 * PIB, 1, UnitKind::Size), "2.0 PiB");
        assert_eq!(format_magnitude(-2048.0, 1, UnitKind::Size), "-2.0 KiB");
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_magnitude(250.0, 2, UnitKind::Duration), "250 ms");
        assert_eq!(format_magnitude(12.5, 2, UnitKind::Duration), "12.5 ms");
        assert_eq!(format_magnitude(1500.0, 2, UnitKind::Duration), "1.50 sec");
    }

    #[test]
    fn test_decimal_formatting() {
        assert_eq!(format_magnitude(1_234_567.0, 2, UnitKind::Decimal), "1.23 M");
        assert_eq!(format_magnitude(4200.0, 0, UnitKind::Decimal), "4.2 K");
        assert_eq!(format_magnitude(999.0, 1, UnitKind::Decimal), "999.0");
        assert_eq!(format_magnitude(3e15, 1, UnitKind::Decimal), "3.0 P");
    }

    #[test]
    fn test_zero_precision_promotion() {
        assert_eq!(format_magnitude(0.0, 0, UnitKind::Plain), "0");
        assert_eq!(format_magnitude(7.0, 0, UnitKind::Plain), "7.0");
        assert_eq!(format_magnitude(0.25, 2, UnitKind::Plain), "0.25");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(999.5), "999.50");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.004), "12");
        assert_eq!(format_number(-4321.1), "-4,321.10");
        assert_eq!(format_number(1_000_000_000_000.0), "1,000,000,000,000");
        assert_eq!(format_number(1e18), "1,000,000,000,000,000,000");
        assert_eq!(format_number(-2.5e20), "-250,000,000,000,000,000,000");
        assert_eq!(format_number(0.999), "1");
        assert_eq!(format_number(-0.001), "0");
    }
}
