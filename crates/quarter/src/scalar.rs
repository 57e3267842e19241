//! Scalar tokens with quarter recognition ahead of YAML's own resolution.
//!
//! [`scan_scalar`] is the scanner hook: a quarter-shaped token becomes
//! [`Scalar::Quarter`], everything else is resolved the way YAML would
//! resolve a plain scalar (null, bool, integer, float, string). The hook
//! only applies to plain tokens; [`crate::document::load_yaml`] runs it on
//! unquoted scalars of a document and leaves quoted ones as strings.
//!
//! ```
//! use quarter::{load_yaml, Quarter, Scalar};
//!
//! let docs = load_yaml("due: 2020Q3\nretries: 3\nnote: '2020Q3'").unwrap();
//! let field = |key: &str| docs[0].get(key).and_then(|node| node.as_scalar()).cloned();
//!
//! assert_eq!(field("due"), Some(Scalar::Quarter(Quarter::new(2020, 3).unwrap())));
//! assert_eq!(field("retries"), Some(Scalar::Int(3)));
//! assert_eq!(field("note"), Some(Scalar::String("2020Q3".into())));
//! ```
//!
//! `Scalar` also implements [`Deserialize`]. A deserializer hands strings
//! over without saying whether they were quoted, so strings read that way
//! stay [`Scalar::String`].

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use crate::codec::scan_quarter;
use crate::error::{QuarterError, Result};
use crate::quarter::Quarter;

/// A resolved scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Quarter(Quarter),
}

impl Scalar {
    /// Short name of the variant, used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
            Scalar::Quarter(_) => "quarter",
        }
    }

    pub fn as_quarter(&self) -> Option<Quarter> {
        match self {
            Scalar::Quarter(quarter) => Some(*quarter),
            _ => None,
        }
    }
}

/// Resolves a plain scalar token, trying the quarter forms first.
///
/// # Errors
///
/// Returns [`QuarterError::InvalidNumber`] for a quarter-shaped token with a
/// quarter digit outside 1..=4 (e.g. `"Q5 2020"`).
///
/// # Examples
///
/// ```
/// use quarter::{scan_scalar, Quarter, Scalar};
///
/// assert_eq!(scan_scalar("2020/Q1").unwrap(), Scalar::Quarter(Quarter::new(2020, 1).unwrap()));
/// assert_eq!(scan_scalar("2020").unwrap(), Scalar::Int(2020));
/// assert_eq!(scan_scalar("yes please").unwrap(), Scalar::String("yes please".into()));
/// ```
pub fn scan_scalar(token: &str) -> Result<Scalar> {
    if let Some(quarter) = scan_quarter(token) {
        return Ok(Scalar::Quarter(quarter?));
    }
    Ok(resolve_plain(token))
}

/// Null spellings of the YAML core schema.
const NULL_SPELLINGS: [&str; 5] = ["", "~", "null", "Null", "NULL"];

/// Whether `token` could be one plain YAML scalar as written: no leading
/// indicator, no comment, no surrounding whitespace.
fn is_plain_spelling(token: &str) -> bool {
    const INDICATORS: [&str; 8] = ["#", "'", "\"", "---", "&", "*", "!", "%"];

    if token.trim() != token || INDICATORS.iter().any(|i| token.starts_with(i)) {
        return false;
    }
    !token
        .char_indices()
        .any(|(at, c)| c == '#' && token[..at].ends_with(char::is_whitespace))
}

/// YAML's default interpretation of a plain scalar.
///
/// Only a null, bool or number is taken from the YAML reader; every other
/// outcome keeps the token verbatim.
fn resolve_plain(token: &str) -> Scalar {
    use serde_yaml::Value;

    let typed = if is_plain_spelling(token) {
        serde_yaml::from_str::<Value>(token).ok()
    } else {
        None
    };
    let scalar = match typed {
        Some(Value::Null) if NULL_SPELLINGS.contains(&token) => Scalar::Null,
        Some(Value::Bool(b)) => Scalar::Bool(b),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        _ => Scalar::String(token.to_string()),
    };
    tracing::trace!(token, kind = scalar.kind(), "resolved plain scalar");
    scalar
}

impl TryFrom<Scalar> for Quarter {
    type Error = QuarterError;

    fn try_from(scalar: Scalar) -> Result<Quarter> {
        match scalar {
            Scalar::Quarter(quarter) => Ok(quarter),
            other => Err(QuarterError::TypeMismatch {
                expected: "quarter",
                found: other.kind(),
            }),
        }
    }
}

impl From<Quarter> for Scalar {
    fn from(quarter: Quarter) -> Self {
        Scalar::Quarter(quarter)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Quarter(quarter) => quarter.serialize(serializer),
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Scalar, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Scalar, E> {
        Ok(match i64::try_from(v) {
            Ok(i) => Scalar::Int(i),
            Err(_) => Scalar::Float(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Scalar, E> {
        Ok(Scalar::String(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}
