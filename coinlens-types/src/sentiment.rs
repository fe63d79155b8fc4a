//! Sentiment readings and per-asset aggregates.

use serde::{Deserialize, Serialize};

/// Average polarity reported by one news or social source, in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    /// Source identifier, e.g. "reddit" or "coindesk".
    pub source: String,
    /// Average polarity in `[-1, 1]`.
    pub average: f64,
}

/// Mean sentiment for one asset across its available sources.
///
/// `source_count == 0` means no source had data; `average` is then the neutral
/// default `0.0` and must not be presented as a measured neutral reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSentiment {
    /// Asset symbol the aggregate refers to.
    pub asset: String,
    /// Mean of the present source averages, in `[-1, 1]`.
    pub average: f64,
    /// Number of sources that contributed a value.
    pub source_count: usize,
}

impl AggregateSentiment {
    /// True when at least one source contributed.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.source_count > 0
    }
}
