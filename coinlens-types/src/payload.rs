//! Payload shapes delivered by the price, prediction, and sentiment providers.
//!
//! These mirror the JSON the dashboard backend emits per asset. They carry raw
//! date strings; canonicalization happens in `coinlens-core`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CoinlensError, TimePoint};

const SENTIMENT_SUFFIX: &str = "_sentiment";

fn reported_error(symbol: Option<&str>, error: Option<&str>) -> Result<(), CoinlensError> {
    match error {
        Some(e) => Err(CoinlensError::Data(format!(
            "provider reported an error for {}: {e}",
            symbol.unwrap_or("asset")
        ))),
        None => Ok(()),
    }
}

/// Price history for one asset over a requested window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Asset symbol, when the provider echoes it.
    pub symbol: Option<String>,
    /// Observation dates, parallel to `prices`.
    #[serde(default)]
    pub dates: Vec<String>,
    /// Observed prices, parallel to `dates`.
    #[serde(default)]
    pub prices: Vec<Option<f64>>,
    /// Latest spot price.
    pub current_price: Option<f64>,
    /// Absolute change over the window.
    pub price_change: Option<f64>,
    /// Percent change over the window.
    pub price_change_percent: Option<f64>,
    /// Optional advisory note (e.g. "cached data").
    pub note: Option<String>,
    /// Per-asset failure reported by the provider.
    pub error: Option<String>,
}

impl PriceHistory {
    /// Pair `dates` with `prices`.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::Data)` if the provider reported an error for
    /// this asset or the parallel arrays differ in length.
    pub fn points(&self) -> Result<Vec<TimePoint<String>>, CoinlensError> {
        reported_error(self.symbol.as_deref(), self.error.as_deref())?;
        if self.dates.len() != self.prices.len() {
            return Err(CoinlensError::Data(format!(
                "price history has {} dates but {} prices",
                self.dates.len(),
                self.prices.len()
            )));
        }
        Ok(self
            .dates
            .iter()
            .zip(&self.prices)
            .map(|(d, p)| TimePoint {
                date: d.clone(),
                value: *p,
            })
            .collect())
    }
}

/// Actual and model-predicted prices for one asset.
///
/// Providers send either a full `predicted` array parallel to `dates`, or a
/// single `predicted_price` for the day after the last actual. In the latter
/// shape `dates` may carry one extra trailing entry for the predicted day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionPayload {
    /// Asset symbol, when the provider echoes it.
    pub symbol: Option<String>,
    /// Observation dates.
    #[serde(default)]
    pub dates: Vec<String>,
    /// Actual prices aligned to the leading entries of `dates`.
    #[serde(default, alias = "history")]
    pub actual: Vec<Option<f64>>,
    /// Predicted prices parallel to `dates`, if the model produced a series.
    #[serde(default)]
    pub predicted: Vec<Option<f64>>,
    /// Single next-day prediction.
    pub predicted_price: Option<f64>,
    /// Per-asset failure reported by the provider.
    pub error: Option<String>,
}

impl PredictionPayload {
    /// Actual prices paired with their dates.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::Data)` if the provider reported an error or
    /// there are more actual prices than dates.
    pub fn actual_points(&self) -> Result<Vec<TimePoint<String>>, CoinlensError> {
        reported_error(self.symbol.as_deref(), self.error.as_deref())?;
        if self.actual.len() > self.dates.len() {
            return Err(CoinlensError::Data(format!(
                "prediction payload has {} actual prices but only {} dates",
                self.actual.len(),
                self.dates.len()
            )));
        }
        Ok(self
            .dates
            .iter()
            .zip(&self.actual)
            .map(|(d, v)| TimePoint {
                date: d.clone(),
                value: *v,
            })
            .collect())
    }

    /// Predicted prices paired with their dates.
    ///
    /// A lone `predicted_price` is placed on the first date past the actual
    /// prices when the payload carries one; otherwise it is not represented
    /// here and callers derive its date themselves.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::Data)` if the provider reported an error or
    /// a `predicted` array is not parallel to `dates`.
    pub fn predicted_points(&self) -> Result<Vec<TimePoint<String>>, CoinlensError> {
        reported_error(self.symbol.as_deref(), self.error.as_deref())?;
        if !self.predicted.is_empty() {
            if self.predicted.len() != self.dates.len() {
                return Err(CoinlensError::Data(format!(
                    "prediction payload has {} dates but {} predicted prices",
                    self.dates.len(),
                    self.predicted.len()
                )));
            }
            return Ok(self
                .dates
                .iter()
                .zip(&self.predicted)
                .map(|(d, v)| TimePoint {
                    date: d.clone(),
                    value: *v,
                })
                .collect());
        }
        match (self.predicted_price, self.dates.get(self.actual.len())) {
            (Some(p), Some(d)) => Ok(vec![TimePoint::new(d.clone(), p)]),
            _ => Ok(Vec::new()),
        }
    }
}

/// Sentiment for one asset, keyed by `<source>_sentiment` entries.
///
/// Unknown keys (headline lists and the like) are kept but ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentPayload {
    /// Asset symbol, when the provider echoes it.
    pub symbol: Option<String>,
    /// Remaining per-source entries.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl SentimentPayload {
    /// Per-source average, `None` where the entry has no numeric `average`.
    ///
    /// A source entry may be either an object with an `average` member or a
    /// bare number.
    #[must_use]
    pub fn readings(&self) -> BTreeMap<String, Option<f64>> {
        self.fields
            .iter()
            .filter_map(|(key, value)| {
                let source = key.strip_suffix(SENTIMENT_SUFFIX)?;
                let average = value
                    .as_f64()
                    .or_else(|| value.get("average").and_then(Value::as_f64));
                Some((source.to_string(), average))
            })
            .collect()
    }
}
