use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the coinlens workspace.
///
/// The transformation layer performs no I/O, so every variant describes a
/// problem with the shape of already-delivered data or with caller arguments.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoinlensError {
    /// A date value could not be interpreted as a calendar date.
    #[error("unparseable date {input:?}: {reason}")]
    Parse {
        /// The offending input, as received.
        input: String,
        /// Human-readable description of why parsing failed.
        reason: String,
    },

    /// An operation that needs at least one value was invoked without any.
    #[error("insufficient data: {what}")]
    InsufficientData {
        /// Description of the missing data, e.g. "axis range over empty values".
        what: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with a provider payload (mismatched parallel arrays, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl CoinlensError {
    /// Helper: build a `Parse` error for an input and reason.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build an `InsufficientData` error describing what was missing.
    pub fn insufficient_data(what: impl Into<String>) -> Self {
        Self::InsufficientData { what: what.into() }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Missing data is an expected condition the presentation layer renders as
    /// "no data available"; everything else points at a malformed payload or a
    /// caller bug.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::InsufficientData { .. })
    }
}
