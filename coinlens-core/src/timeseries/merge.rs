use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::calendar::CalendarKey;
use crate::{MergedSeries, TimePoint};

#[derive(Default)]
struct Slot {
    a: Option<f64>,
    b: Option<f64>,
}

/// Fold one series into the shared calendar map, returning how many points
/// were dropped because their date could not be canonicalized.
fn absorb<D, F>(slots: &mut BTreeMap<NaiveDate, Slot>, series: &[TimePoint<D>], pick: F) -> usize
where
    D: CalendarKey,
    F: Fn(&mut Slot) -> &mut Option<f64>,
{
    let mut dropped = 0usize;
    for p in series {
        let day = match p.date.calendar_date() {
            Ok(day) => day,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "dropping point with unparseable date");
                dropped += 1;
                continue;
            }
        };
        let slot = pick(slots.entry(day).or_default());
        // A later present value for the same day replaces an earlier one; an
        // absent value never erases a present one.
        if let Some(v) = p.value.filter(|v| v.is_finite()) {
            *slot = Some(v);
        }
    }
    dropped
}

/// Align two independently dated series on the union of their calendar days.
///
/// - Dates are canonicalized to year-month-day before comparison, so
///   timestamps on the same day share a label.
/// - `labels` is ascending and de-duplicated; `values_a[i]` / `values_b[i]`
///   hold that series' value on `labels[i]`, or `None` when it has none.
/// - Points whose date cannot be parsed are dropped from their series'
///   contribution; the rest of the merge proceeds.
/// - Non-finite values are treated as absent.
/// - If several points of one series land on the same day, the last present
///   value wins.
///
/// Two empty inputs yield an empty result. Inputs are never mutated.
///
/// ```
/// use coinlens_core::{merge_series, TimePoint};
///
/// let actual = vec![TimePoint::new("2025-08-01", 100.0), TimePoint::new("2025-08-02", 101.0)];
/// let predicted = vec![TimePoint::new("2025-08-02T12:00:00Z", 102.0), TimePoint::new("2025-08-03", 103.0)];
/// let merged = merge_series(&actual, &predicted);
///
/// assert_eq!(merged.labels.len(), 3);
/// assert_eq!(merged.values_a, vec![Some(100.0), Some(101.0), None]);
/// assert_eq!(merged.values_b, vec![None, Some(102.0), Some(103.0)]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "coinlens::timeseries",
        skip(series_a, series_b),
        fields(len_a = series_a.len(), len_b = series_b.len()),
    )
)]
pub fn merge_series<A, B>(series_a: &[TimePoint<A>], series_b: &[TimePoint<B>]) -> MergedSeries
where
    A: CalendarKey,
    B: CalendarKey,
{
    let mut slots: BTreeMap<NaiveDate, Slot> = BTreeMap::new();
    let _dropped_a = absorb(&mut slots, series_a, |s| &mut s.a);
    let _dropped_b = absorb(&mut slots, series_b, |s| &mut s.b);

    #[cfg(feature = "tracing")]
    if _dropped_a + _dropped_b > 0 {
        tracing::warn!(
            dropped_a = _dropped_a,
            dropped_b = _dropped_b,
            "merge dropped points with unparseable dates"
        );
    }

    let mut merged = MergedSeries {
        labels: Vec::with_capacity(slots.len()),
        values_a: Vec::with_capacity(slots.len()),
        values_b: Vec::with_capacity(slots.len()),
    };
    for (day, slot) in slots {
        merged.labels.push(day);
        merged.values_a.push(slot.a);
        merged.values_b.push(slot.b);
    }
    merged
}

/// Canonicalize a single series: parse dates to calendar days, drop
/// unparseable points, sort ascending, and collapse same-day points (last
/// present value wins).
#[must_use]
pub fn canonicalize<D: CalendarKey>(series: &[TimePoint<D>]) -> Vec<TimePoint> {
    let merged = merge_series(series, &[] as &[TimePoint]);
    merged
        .labels
        .into_iter()
        .zip(merged.values_a)
        .map(|(date, value)| TimePoint { date, value })
        .collect()
}
