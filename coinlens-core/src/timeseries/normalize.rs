//! Normalization of raw provider samples into daily series.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeDelta};

use crate::{CoinlensError, TimePoint};

/// Bucket `(epoch_millis, value)` samples into UTC calendar days.
///
/// Providers often return an intraday sample next to the daily closes; the
/// last sample of each day (by timestamp, then input order) is kept. Output is
/// ascending by date. Samples with an out-of-range timestamp or a non-finite
/// value are skipped.
///
/// ```
/// use coinlens_core::timeseries::normalize::normalize_daily;
///
/// let day = 86_400_000;
/// let raw = [(0, 1.0), (day, 2.0), (day + 3_600_000, 2.5)];
/// let daily = normalize_daily(&raw);
/// assert_eq!(daily.len(), 2);
/// assert_eq!(daily[1].value, Some(2.5));
/// ```
#[must_use]
pub fn normalize_daily(samples: &[(i64, f64)]) -> Vec<TimePoint> {
    let mut by_day: BTreeMap<NaiveDate, (i64, f64)> = BTreeMap::new();
    for &(ms, value) in samples {
        if !value.is_finite() {
            continue;
        }
        let Some(ts) = DateTime::from_timestamp_millis(ms) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(ms, "skipping sample with out-of-range timestamp");
            continue;
        };
        let day = ts.date_naive();
        by_day
            .entry(day)
            .and_modify(|cur| {
                if ms >= cur.0 {
                    *cur = (ms, value);
                }
            })
            .or_insert((ms, value));
    }
    by_day
        .into_iter()
        .map(|(day, (_, v))| TimePoint::new(day, v))
        .collect()
}

/// The calendar day after `date`.
///
/// # Errors
/// Returns `Err(CoinlensError::InvalidArg)` if `date` is the last representable day.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate, CoinlensError> {
    date.checked_add_signed(TimeDelta::days(1))
        .ok_or_else(|| CoinlensError::InvalidArg(format!("no calendar day after {date}")))
}

/// Build the predicted series for a single next-day forecast: one point on
/// the day after the last dated point of `actual`.
///
/// Returns an empty series if `actual` is empty.
///
/// # Errors
/// Returns `Err(CoinlensError::InvalidArg)` if the last date has no successor.
pub fn next_day_prediction(
    actual: &[TimePoint],
    predicted_price: f64,
) -> Result<Vec<TimePoint>, CoinlensError> {
    match actual.iter().map(|p| p.date).max() {
        Some(last) => Ok(vec![TimePoint::new(next_day(last)?, predicted_price)]),
        None => Ok(Vec::new()),
    }
}
