//! serde integration.
//!
//! A [`Quarter`] serializes as its display string, `"Q1 2020"`. Deserializing
//! is more forgiving than [`Quarter::parse`]: any of
//!
//! - `"Q1 2020"`, `"Q12020"` (quarter first, optional space)
//! - `"2020-Q1"`, `"2020/Q1"`, `"2020Q1"` (year first, optional `-` or `/`)
//!
//! is accepted. The same recognition drives [`crate::scalar::scan_scalar`],
//! which runs it ahead of YAML's own scalar resolution.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use crate::error::{QuarterError, Result};
use crate::quarter::Quarter;

static QUARTER_AND_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Q([0-9]) ?([0-9]{4})$").expect("valid regex"));

static YEAR_AND_QUARTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})[-/]?Q([0-9])$").expect("valid regex"));

/// Recognizes a quarter-shaped token.
///
/// Returns `None` when the token has no quarter shape at all, and
/// `Some(Err(_))` when it has the shape but names quarter 0 or 5..=9.
pub fn scan_quarter(token: &str) -> Option<Result<Quarter>> {
    let (year, number) = if let Some(caps) = QUARTER_AND_YEAR.captures(token) {
        (caps.get(2)?.as_str(), caps.get(1)?.as_str())
    } else if let Some(caps) = YEAR_AND_QUARTER.captures(token) {
        (caps.get(1)?.as_str(), caps.get(2)?.as_str())
    } else {
        return None;
    };

    // Four ASCII digits and one ASCII digit: both parses are infallible.
    let year: i32 = year.parse().ok()?;
    let number: u8 = number.parse().ok()?;
    tracing::trace!(token, year, number, "quarter-shaped token");
    Some(Quarter::new(year, number))
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct QuarterVisitor;

impl Visitor<'_> for QuarterVisitor {
    type Value = Quarter;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quarter string such as \"Q1 2020\" or \"2020-Q1\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Quarter, E> {
        match scan_quarter(value) {
            Some(result) => result.map_err(E::custom),
            None => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Quarter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(QuarterVisitor)
    }
}

/// Serializes a quarter as a YAML document.
pub fn to_yaml(quarter: &Quarter) -> Result<String> {
    Ok(serde_yaml::to_string(quarter)?)
}

/// Deserializes a quarter from a YAML document, accepting the fuzzy forms.
///
/// # Errors
///
/// Returns [`QuarterError::Yaml`] if the document is not a quarter-shaped
/// scalar or names a quarter outside 1..=4.
pub fn from_yaml(text: &str) -> Result<Quarter> {
    Ok(serde_yaml::from_str(text)?)
}
