//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while constructing or querying a distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Invalid parameter value for a distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value out of range [0, 1].
    InvalidProbability { value: f64 },

    /// A query value lies outside the support of the distribution.
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The bounds of an interval query are out of order. A `strict` range
    /// needs the lower bound below the upper one; otherwise they may be equal.
    InvalidRange { lower: f64, upper: f64, strict: bool },

    /// A required request parameter was not supplied.
    MissingParameter { name: String },

    /// The requested operation is not known to the calculator.
    UnknownOperation { operation: String },

    /// The special-function provider could not be initialized.
    ProviderUnavailable { reason: String },
}

impl StatsError {
    pub(crate) fn invalid(name: &str, value: f64, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::InvalidProbability { value } => {
                write!(f, "Invalid probability {}: must be in [0, 1]", value)
            }
            Self::OutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "'{}' = {} is outside the support [{}, {}]",
                    name, value, min, max
                )
            }
            Self::InvalidRange {
                lower,
                upper,
                strict,
            } => {
                let order = if *strict {
                    "must be below"
                } else {
                    "must not exceed"
                };
                write!(
                    f,
                    "Invalid range: lower bound {} {} upper bound {}",
                    lower, order, upper
                )
            }
            Self::MissingParameter { name } => {
                write!(f, "Missing parameter '{}'", name)
            }
            Self::UnknownOperation { operation } => {
                write!(f, "Unknown operation '{}'", operation)
            }
            Self::ProviderUnavailable { reason } => {
                write!(f, "Special-function provider unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for StatsError {}
