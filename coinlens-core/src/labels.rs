//! Axis and tooltip label text.

use chrono::NaiveDate;

use crate::Tier;

/// Label shown in place of the date for a next-day forecast point.
pub const NEXT_DAY_LABEL: &str = "Next Day";

/// Category-axis label for `date` in `tier`: `"Aug 5"` for the short tiers,
/// `"Aug 2025"` for the monthly ones.
#[must_use]
pub fn axis_label(date: NaiveDate, tier: Tier) -> String {
    if tier.is_monthly() {
        date.format("%b %Y").to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

/// Full date for tooltips, e.g. `"August 15, 2025"`.
#[must_use]
pub fn tooltip_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Labels for a prediction chart: `"Aug 5"` per date, with the last label
/// replaced by [`NEXT_DAY_LABEL`] when `ends_with_forecast` is set.
#[must_use]
pub fn prediction_labels(dates: &[NaiveDate], ends_with_forecast: bool) -> Vec<String> {
    let last = dates.len().checked_sub(1);
    dates
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if ends_with_forecast && Some(i) == last {
                NEXT_DAY_LABEL.to_string()
            } else {
                d.format("%b %-d").to_string()
            }
        })
        .collect()
}
