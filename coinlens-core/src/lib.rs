//! coinlens-core
//!
//! Pure transformations that turn raw, sparsely aligned numeric series into
//! chart-ready structures.
//!
//! - `timeseries`: calendar canonicalization, two-series merge, downsampling,
//!   and daily normalization.
//! - `axis`: "nice" axis bounds and tick steps with asset-dependent rounding.
//! - `sentiment`: multi-source sentiment aggregation.
//! - `chart`: the per-asset pipeline a dashboard runs for each chart.
//!
//! Every function here is synchronous, allocation-only, and free of I/O and
//! hidden state. Inputs are borrowed and never mutated, so concurrent calls on
//! any inputs are safe. A caller that no longer needs a result simply drops it.
//!
//! Enable the `tracing` feature to emit spans and events for dropped points
//! and chart builds.
#![warn(missing_docs)]

/// Value-axis range calculation.
pub mod axis;
/// Per-asset chart assembly.
pub mod chart;
/// Axis and tooltip label formatting.
pub mod labels;
/// Sentiment aggregation.
pub mod sentiment;
/// Period change summary.
pub mod summary;
/// Time-series utilities for merging, downsampling, and normalization.
pub mod timeseries;
pub mod types;

pub use axis::{DEFAULT_TARGET_TICKS, axis_range_for_symbol, compute_axis_range};
pub use chart::{HistoryChart, PredictionChart, history_charts, prediction_charts};
pub use sentiment::{
    aggregate, aggregate_assets, aggregate_payload, aggregate_sentiment, reading_from_scores,
    score_to_percent,
};
pub use summary::PeriodChange;
pub use timeseries::calendar::{CalendarKey, parse_calendar_date};
pub use timeseries::downsample::{
    downsample, downsample_with_cap, downsample_with_caps, sample_indices,
};
pub use timeseries::merge::{canonicalize, merge_series};
pub use timeseries::normalize::{next_day, next_day_prediction, normalize_daily};
pub use types::*;
