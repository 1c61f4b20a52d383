//! Date parsing: the only fallible operation in the core

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error for a date string matching neither supported format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidDateFormat {
    /// The rejected input, echoed for diagnostics
    pub input: String,
}

impl std::fmt::Display for InvalidDateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date {:?}: use DD-MM-YYYY or YYYY-MM-DD", self.input)
    }
}

impl std::error::Error for InvalidDateFormat {}

/// Parse a calendar date from `DD-MM-YYYY` or `YYYY-MM-DD`.
///
/// Whitespace is trimmed and `/` separators are normalized to `-` first;
/// the day-first format wins when both could apply.
pub fn parse_date(s: &str) -> Result<NaiveDate, InvalidDateFormat> {
    let normalized = s.trim().replace('/', "-");
    for fmt in ["%d-%m-%Y", "%Y-%m-%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(&normalized, fmt) {
            return Ok(d);
        }
    }
    Err(InvalidDateFormat { input: s.to_string() })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_day_first_format() {
        let d = parse_date("29-10-2001").unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (29, 10, 2001));
    }

    #[test]
    fn test_year_first_format() {
        let d = parse_date("2001-10-29").unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (29, 10, 2001));
    }

    #[test]
    fn test_slash_separators_normalized() {
        assert_eq!(parse_date("29/10/2001"), parse_date("29-10-2001"));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert!(parse_date("  29-10-2001 ").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_date("not-a-date").unwrap_err();
        assert_eq!(err.input, "not-a-date");
        assert!(err.to_string().contains("DD-MM-YYYY"));
    }

    #[test]
    fn test_rejects_impossible_day() {
        assert!(parse_date("32-01-2001").is_err());
    }
}
