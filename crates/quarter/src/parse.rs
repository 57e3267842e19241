//! Strict parsing of the two canonical quarter forms.
//!
//! Accepted, case-insensitive, whole string only:
//!
//! - `Q{1-4} {YYYY}` (display form), e.g. `"Q1 2020"`
//! - `{YYYY}-Q{1-4}` (ISO 8601-like form), e.g. `"2020-Q1"`
//!
//! The looser forms (`"2020Q1"`, `"Q12020"`, `"2020/Q1"`) are only accepted
//! when deserializing; see [`crate::codec`].

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{QuarterError, Result};
use crate::quarter::Quarter;

static DISPLAY_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Q([1-4]) ([0-9]{4})$").expect("valid regex"));

static ISO8601_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9]{4})-Q([1-4])$").expect("valid regex"));

/// Capture groups are ASCII digits of bounded length, so this only fails on overflow.
fn digits<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

impl Quarter {
    /// Parses `"Q1 2020"` or `"2020-Q1"` (any letter case).
    ///
    /// # Errors
    ///
    /// Returns [`QuarterError::InvalidFormat`] for anything else, including
    /// surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use quarter::Quarter;
    ///
    /// assert_eq!(Quarter::parse("2020-Q1").unwrap(), Quarter::parse("q1 2020").unwrap());
    /// assert!(Quarter::parse("2020").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Quarter> {
        let parts = if let Some(caps) = DISPLAY_FORM.captures(text) {
            digits::<i32>(&caps[2]).zip(digits::<u8>(&caps[1]))
        } else if let Some(caps) = ISO8601_FORM.captures(text) {
            digits::<i32>(&caps[1]).zip(digits::<u8>(&caps[2]))
        } else {
            None
        };

        match parts {
            Some((year, number)) => Quarter::new(year, number),
            None => {
                tracing::debug!(input = text, "rejected quarter string");
                Err(QuarterError::InvalidFormat(text.to_string()))
            }
        }
    }
}

impl FromStr for Quarter {
    type Err = QuarterError;

    fn from_str(s: &str) -> Result<Self> {
        Quarter::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(year: i32, number: u8) -> Quarter {
        Quarter::new(year, number).unwrap()
    }

    #[test]
    fn test_parse_display_form() {
        assert_eq!(Quarter::parse("Q1 2020").unwrap(), q(2020, 1));
        assert_eq!(Quarter::parse("Q4 1999").unwrap(), q(1999, 4));
    }

    #[test]
    fn test_parse_iso_form() {
        assert_eq!(Quarter::parse("2020-Q1").unwrap(), q(2020, 1));
        assert_eq!(Quarter::parse("2020-Q3").unwrap(), q(2020, 3));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Quarter::parse("q2 2020").unwrap(), q(2020, 2));
        assert_eq!(Quarter::parse("2020-q2").unwrap(), q(2020, 2));
    }

    #[test]
    fn test_parse_via_from_str() {
        let parsed: Quarter = "2021-Q4".parse().unwrap();
        assert_eq!(parsed, q(2021, 4));
    }

    #[test]
    fn test_parse_rejects_partial_input() {
        for input in ["Q1", "2020", "quarter", ""] {
            assert_eq!(
                Quarter::parse(input).unwrap_err(),
                QuarterError::InvalidFormat(input.to_string()),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parse_is_anchored() {
        for input in [" Q1 2020", "Q1 2020 ", "xQ1 2020", "2020-Q1x", "2020-Q1\n"] {
            assert!(Quarter::parse(input).is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_number() {
        assert!(Quarter::parse("Q5 2020").is_err());
        assert!(Quarter::parse("2020-Q0").is_err());
    }

    #[test]
    fn test_parse_rejects_fuzzy_forms() {
        for input in ["2020Q1", "Q12020", "2020/Q1", "Q1  2020", "20-Q1", "12020-Q1"] {
            assert!(Quarter::parse(input).is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert!(Quarter::parse("Q1 ٢٠٢٠").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let quarter = q(2020, 3);
        assert_eq!(Quarter::parse(&quarter.to_string()).unwrap(), quarter);
        assert_eq!(Quarter::parse(&quarter.iso8601()).unwrap(), quarter);
    }
}
