//! Per-chart assembly: the fixed sequence of transformations a dashboard runs
//! for one asset.
//!
//! Each asset is built independently; the map-level helpers return one
//! `Result` per asset so a failure for one never hides another.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::axis::compute_axis_range;
use crate::labels::{axis_label, prediction_labels, tooltip_label};
use crate::summary::PeriodChange;
use crate::timeseries::downsample::downsample_with_caps;
use crate::timeseries::merge::{canonicalize, merge_series};
use crate::timeseries::normalize::next_day_prediction;
use crate::{
    AxisRange, ChartConfig, CoinlensError, PredictionPayload, PriceHistory, Tier, TimePoint,
};

/// Chart-ready price history for one asset and timeframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryChart {
    /// Asset symbol.
    pub symbol: String,
    /// Timeframe the chart was thinned for.
    pub tier: Tier,
    /// Chart title, e.g. "BTC 30-Day Price History".
    pub title: String,
    /// Dates of the displayed points.
    pub dates: Vec<NaiveDate>,
    /// Category-axis labels, parallel to `dates`.
    pub labels: Vec<String>,
    /// Tooltip titles, parallel to `dates`.
    pub tooltips: Vec<String>,
    /// Displayed values, parallel to `dates`.
    pub values: Vec<Option<f64>>,
    /// Value-axis bounds covering every displayed value.
    pub axis: AxisRange,
    /// Change over the full (not thinned) window; falls back to the
    /// provider-reported change when the window has fewer than two values.
    pub change: Option<PeriodChange>,
    /// Latest spot price reported by the provider.
    pub current_price: Option<f64>,
    /// Advisory note reported by the provider.
    pub note: Option<String>,
}

impl HistoryChart {
    /// Canonicalize, downsample, and scale `history` for display in `tier`.
    ///
    /// # Errors
    /// - `Err(CoinlensError::InvalidArg)` if `config` is invalid.
    /// - `Err(CoinlensError::Data)` if the payload reports an error or its
    ///   arrays are not parallel.
    /// - `Err(CoinlensError::InsufficientData)` if no point has a value.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "coinlens::chart", skip(history, config), err)
    )]
    pub fn build(
        symbol: &str,
        history: &PriceHistory,
        tier: Tier,
        config: &ChartConfig,
    ) -> Result<Self, CoinlensError> {
        config.validate()?;
        let full = canonicalize(&history.points()?);
        let shown = downsample_with_caps(&full, tier, &config.tier_caps);

        let values: Vec<Option<f64>> = shown.iter().map(|p| p.value).collect();
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let axis = compute_axis_range(
            &present,
            config.target_ticks,
            &config.granularity_for(symbol),
        )?;

        let dates: Vec<NaiveDate> = shown.iter().map(|p| p.date).collect();
        Ok(Self {
            symbol: symbol.to_string(),
            tier,
            title: format!("{symbol} {} Price History", tier.title()),
            labels: dates.iter().map(|d| axis_label(*d, tier)).collect(),
            tooltips: dates.iter().map(|d| tooltip_label(*d)).collect(),
            dates,
            values,
            axis,
            change: window_change(&full, history),
            current_price: history.current_price,
            note: history.note.clone(),
        })
    }
}

/// Change over the full window. A series with fewer than two present values
/// cannot show movement, so the provider's reported change is used when it
/// carries one.
fn window_change(full: &[TimePoint], history: &PriceHistory) -> Option<PeriodChange> {
    let present = full.iter().filter(|p| p.value.is_some()).count();
    let reported = || {
        PeriodChange::from_reported(
            history.current_price,
            history.price_change,
            history.price_change_percent,
        )
    };
    if present >= 2 {
        PeriodChange::from_series(full)
    } else {
        reported().or_else(|| PeriodChange::from_series(full))
    }
}

/// Chart-ready actual-versus-predicted prices for one asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionChart {
    /// Asset symbol.
    pub symbol: String,
    /// Union of actual and predicted dates.
    pub dates: Vec<NaiveDate>,
    /// Category-axis labels; the forecast day reads "Next Day".
    pub labels: Vec<String>,
    /// Actual prices aligned to `dates`.
    pub actual: Vec<Option<f64>>,
    /// Predicted prices aligned to `dates`.
    pub predicted: Vec<Option<f64>>,
    /// Value-axis bounds covering both series.
    pub axis: AxisRange,
    /// The trailing forecast value, if the chart ends on one.
    pub forecast: Option<f64>,
}

impl PredictionChart {
    /// Merge actual and predicted prices and scale them onto one axis.
    ///
    /// A payload with only a `predicted_price` and no date for it gets the
    /// forecast placed on the day after the last actual date.
    ///
    /// # Errors
    /// - `Err(CoinlensError::InvalidArg)` if `config` is invalid.
    /// - `Err(CoinlensError::Data)` if the payload reports an error or is malformed.
    /// - `Err(CoinlensError::InsufficientData)` if neither series has a value.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "coinlens::chart", skip(payload, config), err)
    )]
    pub fn build(
        symbol: &str,
        payload: &PredictionPayload,
        config: &ChartConfig,
    ) -> Result<Self, CoinlensError> {
        config.validate()?;
        let actual = payload.actual_points()?;
        let predicted = payload.predicted_points()?;

        let merged = match payload.predicted_price {
            Some(price) if predicted.is_empty() => {
                let actual = canonicalize(&actual);
                let forecast = next_day_prediction(&actual, price)?;
                merge_series(&actual, &forecast)
            }
            _ => merge_series(&actual, &predicted),
        };

        let present: Vec<f64> = merged.present_values().collect();
        let axis = compute_axis_range(
            &present,
            config.target_ticks,
            &config.prediction_granularity_for(symbol),
        )?;

        let forecast = match (merged.values_a.last(), merged.values_b.last()) {
            (Some(None), Some(Some(v))) => Some(*v),
            _ => None,
        };
        Ok(Self {
            symbol: symbol.to_string(),
            labels: prediction_labels(&merged.labels, forecast.is_some()),
            dates: merged.labels,
            actual: merged.values_a,
            predicted: merged.values_b,
            axis,
            forecast,
        })
    }
}

/// Build a history chart per asset. Each entry succeeds or fails on its own.
pub fn history_charts(
    histories: &BTreeMap<String, PriceHistory>,
    tier: Tier,
    config: &ChartConfig,
) -> BTreeMap<String, Result<HistoryChart, CoinlensError>> {
    histories
        .iter()
        .map(|(symbol, h)| (symbol.clone(), HistoryChart::build(symbol, h, tier, config)))
        .collect()
}

/// Build a prediction chart per asset. Each entry succeeds or fails on its own.
pub fn prediction_charts(
    payloads: &BTreeMap<String, PredictionPayload>,
    config: &ChartConfig,
) -> BTreeMap<String, Result<PredictionChart, CoinlensError>> {
    payloads
        .iter()
        .map(|(symbol, p)| (symbol.clone(), PredictionChart::build(symbol, p, config)))
        .collect()
}
