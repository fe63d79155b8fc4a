pub mod history;
pub mod prediction;
pub mod sentiment;

use chrono::{NaiveDate, TimeDelta};

/// Last day covered by every fixture window.
pub const END_DATE: (i32, u32, u32) = (2025, 8, 15);

pub fn end_date() -> NaiveDate {
    let (y, m, d) = END_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// `days` consecutive calendar days ending on [`end_date`], oldest first.
pub fn trailing_days(days: usize) -> Vec<NaiveDate> {
    let end = end_date();
    (0..days)
        .rev()
        .filter_map(|back| {
            let back = i64::try_from(back).ok()?;
            end.checked_sub_signed(TimeDelta::days(back))
        })
        .collect()
}

/// Smooth deterministic price path: drift plus a slow oscillation, rounded to cents.
pub fn price_path(days: usize, base: f64, amplitude: f64, drift: f64) -> Vec<f64> {
    (0..days)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64;
            let px = base + drift * t + amplitude * (t / 9.0).sin();
            (px * 100.0).round() / 100.0
        })
        .collect()
}
