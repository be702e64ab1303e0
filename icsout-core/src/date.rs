//! Calendar date arithmetic and display formatting.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

/// Shift `date` by `delta_days` calendar days (negative moves backwards).
///
/// Month, year and leap-day rollover follow the proleptic Gregorian calendar.
/// Results beyond the representable range saturate at `NaiveDate::MIN`/`MAX`.
pub fn shift(date: NaiveDate, delta_days: i64) -> NaiveDate {
    Duration::try_days(delta_days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if delta_days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Render a date as e.g. `May 20, 2019 (Mon)`.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%B %d, %Y (%a)").to_string()
}

/// Encode a date as `YYYYMMDD` so integer comparison matches chronological order.
pub fn to_sortable(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Parse the date portion of an ICS value (`YYYYMMDD`).
pub fn parse_ics_date(s: &str) -> Option<NaiveDate> {
    let digits = s.get(..8)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}

/// Parse the time portion of an ICS value (`HHMM`, `HHMMSS` or `HHMMSSZ`).
///
/// Seconds are dropped: only hour and minute are displayed or compared.
pub fn parse_ics_time(s: &str) -> Option<NaiveTime> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour = digits[..2].parse().ok()?;
    let minute = digits[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
