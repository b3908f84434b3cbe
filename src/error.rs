use std::fmt;

use thiserror::Error;

/// Why a disclosure value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// A quantity or count below zero.
    Negative,
    /// A percentage outside the closed interval [0, 100].
    OutOfPercentRange,
    /// NaN or infinity.
    NotFinite,
    /// A categorical value outside its enumerated domain.
    UnrecognizedCategory(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Negative => write!(f, "must be non-negative"),
            InvalidReason::OutOfPercentRange => write!(f, "must be within 0-100"),
            InvalidReason::NotFinite => write!(f, "must be a finite number"),
            InvalidReason::UnrecognizedCategory(value) => {
                write!(f, "'{}' is not a recognized category value", value)
            }
        }
    }
}

/// A disclosure value violated the input contract.
///
/// Raised before any normalization happens, so a caller never sees a
/// partially computed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input for {field}: {reason}")]
pub struct InvalidInputError {
    /// Dotted path of the offending field, e.g. `environmental.scope1Emissions`.
    pub field: &'static str,
    pub reason: InvalidReason,
}

impl InvalidInputError {
    pub fn new(field: &'static str, reason: InvalidReason) -> Self {
        Self { field, reason }
    }
}

/// Why a whole disclosure could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisclosureError {
    #[error(transparent)]
    Invalid(#[from] InvalidInputError),

    /// Strict mode only: some sections carry no data at all.
    #[error("no data entered for {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
}

/// The scoring configuration failed startup validation.
///
/// Carries every problem found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scoring configuration: {}", .0.join("; "))]
pub struct ConfigError(pub Vec<String>);
