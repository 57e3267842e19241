//! Error types for quarter operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuarterError {
    #[error("invalid quarter number: {number} (must be 1..=4)")]
    InvalidNumber { number: u8 },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },

    #[error("step must not be zero")]
    ZeroStep,

    #[error("invalid quarter string: {0:?}")]
    InvalidFormat(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("YAML error: {0}")]
    Yaml(String),
}

impl QuarterError {
    /// Whether this error was caused by a bad argument value rather than a
    /// wrong type or a YAML failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            QuarterError::InvalidNumber { .. }
                | QuarterError::InvalidMonth { .. }
                | QuarterError::ZeroStep
                | QuarterError::InvalidFormat(_)
        )
    }
}

impl From<serde_yaml::Error> for QuarterError {
    fn from(err: serde_yaml::Error) -> Self {
        QuarterError::Yaml(err.to_string())
    }
}

impl From<yaml_rust2::ScanError> for QuarterError {
    fn from(err: yaml_rust2::ScanError) -> Self {
        QuarterError::Yaml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuarterError>;
