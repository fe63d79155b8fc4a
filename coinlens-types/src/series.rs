//! Series shapes exchanged between the transformation layer and its callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation. `value` is `None` when the provider had no number for
/// that date (for example an actual price for a date still in the future).
///
/// The date type defaults to a canonical calendar date; raw provider data uses
/// `TimePoint<String>` until it is canonicalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint<D = NaiveDate> {
    /// Observation date.
    pub date: D,
    /// Observed value, if any.
    pub value: Option<f64>,
}

impl<D> TimePoint<D> {
    /// Construct a point carrying a value.
    pub const fn new(date: D, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    /// Construct a point with no value.
    pub const fn empty(date: D) -> Self {
        Self { date, value: None }
    }
}

/// Two series aligned on the union of their calendar dates.
///
/// Invariant: `labels`, `values_a`, and `values_b` have identical lengths and
/// `labels` is strictly ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedSeries {
    /// Ascending, de-duplicated calendar dates.
    pub labels: Vec<NaiveDate>,
    /// Values of the first series aligned to `labels`.
    pub values_a: Vec<Option<f64>>,
    /// Values of the second series aligned to `labels`.
    pub values_b: Vec<Option<f64>>,
}

impl MergedSeries {
    /// Number of aligned labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when neither input contributed a date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Every present value of both series, in label order (`a` before `b` per label).
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values_a
            .iter()
            .zip(&self.values_b)
            .flat_map(|(a, b)| [*a, *b])
            .flatten()
    }
}

/// Rounded value-axis bounds and an even tick step.
///
/// Invariants: `min < max`, `step_size > 0`, and `max - min` is a whole
/// multiple of `step_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    /// Lower axis bound.
    pub min: f64,
    /// Upper axis bound.
    pub max: f64,
    /// Distance between adjacent gridlines.
    pub step_size: f64,
}

impl AxisRange {
    /// Gridline values from `min` to `max` inclusive.
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        let well_formed = self.step_size.is_finite()
            && self.step_size > 0.0
            && self.min.is_finite()
            && self.max.is_finite()
            && self.max > self.min;
        if !well_formed {
            return vec![self.min];
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = ((self.max - self.min) / self.step_size).round() as usize;
        (0..=intervals)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let offset = self.step_size * i as f64;
                if i == intervals { self.max } else { self.min + offset }
            })
            .collect()
    }

    /// Whether `value` lies within the axis bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
