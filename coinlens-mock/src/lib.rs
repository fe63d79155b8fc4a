//! Deterministic fixture payloads shaped like the price-history, prediction,
//! and sentiment providers a coinlens dashboard consumes.
//!
//! Fixture symbols:
//! - `BTC`, `ETH`: well-formed data for every payload kind.
//! - `FLAT`: constant price history.
//! - `GAPPY`: history with missing values and one unparseable date.
//! - `SOL`: a prediction with a forecast price but no forecast date.
//! - `QUIET`: sentiment with headlines but no scores.
//! - `FAIL`: payloads carrying a provider-reported error.
use std::collections::BTreeMap;

use coinlens_types::{PredictionPayload, PriceHistory, SentimentPayload, Tier};

mod fixtures;

pub use fixtures::history::window_days;
pub use fixtures::{END_DATE, end_date};

/// Mock provider for CI-safe tests and demos. Serves deterministic data from static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Daily price history for `symbol` over the window of `tier`.
    #[must_use]
    pub fn history(&self, symbol: &str, tier: Tier) -> Option<PriceHistory> {
        fixtures::history::by_symbol(symbol, tier)
    }

    /// Actual and predicted prices for `symbol`.
    #[must_use]
    pub fn prediction(&self, symbol: &str) -> Option<PredictionPayload> {
        fixtures::prediction::by_symbol(symbol)
    }

    /// Per-source sentiment for `symbol`.
    #[must_use]
    pub fn sentiment(&self, symbol: &str) -> Option<SentimentPayload> {
        fixtures::sentiment::by_symbol(symbol)
    }

    /// Histories for several symbols, keyed by symbol. Unknown symbols are omitted.
    #[must_use]
    pub fn histories(&self, symbols: &[&str], tier: Tier) -> BTreeMap<String, PriceHistory> {
        symbols
            .iter()
            .filter_map(|s| self.history(s, tier).map(|h| ((*s).to_string(), h)))
            .collect()
    }

    /// Prediction payloads for several symbols, keyed by symbol.
    #[must_use]
    pub fn predictions(&self, symbols: &[&str]) -> BTreeMap<String, PredictionPayload> {
        symbols
            .iter()
            .filter_map(|s| self.prediction(s).map(|p| ((*s).to_string(), p)))
            .collect()
    }

    /// Sentiment payloads for several symbols, keyed by symbol.
    #[must_use]
    pub fn sentiments(&self, symbols: &[&str]) -> BTreeMap<String, SentimentPayload> {
        symbols
            .iter()
            .filter_map(|s| self.sentiment(s).map(|p| ((*s).to_string(), p)))
            .collect()
    }
}
