//! Period price-change summary.

use serde::{Deserialize, Serialize};

use crate::TimePoint;

/// Change between the first and last present value of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodChange {
    /// First present value in the window.
    pub start: f64,
    /// Last present value in the window.
    pub end: f64,
    /// `end - start`.
    pub change: f64,
    /// `change / start * 100`; `None` when `start` is zero.
    pub percent: Option<f64>,
}

impl PeriodChange {
    /// Summarize an ordered sequence of optional values. Absent and non-finite
    /// values are skipped; returns `None` when nothing is left.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut present = values.into_iter().flatten().filter(|v| v.is_finite());
        let start = present.next()?;
        let end = present.last().unwrap_or(start);
        let change = end - start;
        let percent = (start != 0.0).then(|| change / start * 100.0);
        Some(Self {
            start,
            end,
            change,
            percent,
        })
    }

    /// Summarize a series in its stored order.
    pub fn from_series<D>(series: &[TimePoint<D>]) -> Option<Self> {
        Self::from_values(series.iter().map(|p| p.value))
    }

    /// Rebuild a summary from the change a provider reported alongside the
    /// latest price. `start` is derived as `current - change`; the reported
    /// percent is kept when present.
    ///
    /// Returns `None` unless both `current` and `change` are finite.
    pub fn from_reported(
        current: Option<f64>,
        change: Option<f64>,
        percent: Option<f64>,
    ) -> Option<Self> {
        let end = current.filter(|v| v.is_finite())?;
        let change = change.filter(|v| v.is_finite())?;
        let start = end - change;
        let percent = percent
            .filter(|p| p.is_finite())
            .or_else(|| (start != 0.0).then(|| change / start * 100.0));
        Some(Self {
            start,
            end,
            change,
            percent,
        })
    }

    /// True when the window closed above where it opened.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.change > 0.0
    }
}
