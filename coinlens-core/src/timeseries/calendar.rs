//! Canonical calendar-date keys.
//!
//! Every date-like input is reduced to a `NaiveDate` (year-month-day) before
//! comparison, so two timestamps on the same day collide regardless of
//! time-of-day or formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::CoinlensError;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Anything that can be reduced to a canonical calendar date.
pub trait CalendarKey {
    /// The calendar day this value falls on.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::Parse)` if the value cannot be interpreted
    /// as a calendar date.
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError>;
}

impl CalendarKey for NaiveDate {
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError> {
        Ok(*self)
    }
}

impl CalendarKey for NaiveDateTime {
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError> {
        Ok(self.date())
    }
}

/// Zoned timestamps resolve to the day in their own zone.
impl<Tz: TimeZone> CalendarKey for DateTime<Tz> {
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError> {
        Ok(self.date_naive())
    }
}

impl CalendarKey for str {
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError> {
        parse_calendar_date(self)
    }
}

impl CalendarKey for String {
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError> {
        parse_calendar_date(self)
    }
}

impl<T: CalendarKey + ?Sized> CalendarKey for &T {
    fn calendar_date(&self) -> Result<NaiveDate, CoinlensError> {
        (**self).calendar_date()
    }
}

/// Parse a date or timestamp string into its calendar day.
///
/// Accepts plain dates (`2025-08-15`, `2025/08/15`), naive
/// date-times with `T` or space separators, RFC 3339, and RFC 2822. Zoned
/// timestamps keep the day as written in their own offset.
///
/// ```
/// use coinlens_core::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// assert_eq!(parse_calendar_date("2025-08-15").unwrap(), d);
/// assert_eq!(parse_calendar_date("2025-08-15T23:59:59Z").unwrap(), d);
/// assert_eq!(parse_calendar_date("2025-08-15 06:30:00").unwrap(), d);
/// assert!(parse_calendar_date("yesterday").is_err());
/// ```
///
/// # Errors
/// Returns `Err(CoinlensError::Parse)` if no supported format matches.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, CoinlensError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(CoinlensError::parse(input, "empty date"));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.date_naive());
    }
    Err(CoinlensError::parse(
        input,
        "not a recognised calendar date format",
    ))
}
