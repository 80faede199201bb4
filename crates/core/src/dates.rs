// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Codec for the date and time integers stored by Things.
//!
//! Things packs calendar dates into a single integer:
//!
//! ```text
//! packed date = (year << 16) | (month << 12) | (day << 7)
//! packed time = (hour << 26) | (minute << 20)
//! ```
//!
//! Zero or negative values mean "no date" / "no time". Timestamps such as
//! `creationDate` and `stopDate` are plain Unix seconds stored as REAL.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};

use crate::error::{Error, Result};

const YEAR_SHIFT: u32 = 16;
const MONTH_SHIFT: u32 = 12;
const DAY_SHIFT: u32 = 7;
const MONTH_MASK: i64 = 0xF;
const DAY_MASK: i64 = 0x1F;

const HOUR_SHIFT: u32 = 26;
const MINUTE_SHIFT: u32 = 20;
const HOUR_MASK: i64 = 0x1F;
const MINUTE_MASK: i64 = 0x3F;

/// Pack raw year/month/day components without calendar validation.
pub fn pack_date(year: i32, month: u32, day: u32) -> i64 {
    (i64::from(year) << YEAR_SHIFT)
        | (i64::from(month) << MONTH_SHIFT)
        | (i64::from(day) << DAY_SHIFT)
}

/// Encode a calendar date as a packed Things date.
pub fn encode_date(date: NaiveDate) -> i64 {
    pack_date(date.year(), date.month(), date.day())
}

/// Decode a packed Things date.
///
/// Returns `None` for the absence marker (`<= 0`) and for bit patterns that
/// do not name a real calendar day.
pub fn decode_date(packed: i64) -> Option<NaiveDate> {
    if packed <= 0 {
        return None;
    }
    let year = i32::try_from(packed >> YEAR_SHIFT).ok()?;
    let month = u32::try_from((packed >> MONTH_SHIFT) & MONTH_MASK).ok()?;
    let day = u32::try_from((packed >> DAY_SHIFT) & DAY_MASK).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Encode a time of day as a packed Things time. Seconds are dropped.
pub fn encode_time(time: NaiveTime) -> i64 {
    (i64::from(time.hour()) << HOUR_SHIFT) | (i64::from(time.minute()) << MINUTE_SHIFT)
}

/// Decode a packed Things time, `None` for the absence marker.
pub fn decode_time(packed: i64) -> Option<NaiveTime> {
    if packed <= 0 {
        return None;
    }
    let hour = u32::try_from((packed >> HOUR_SHIFT) & HOUR_MASK).ok()?;
    let minute = u32::try_from((packed >> MINUTE_SHIFT) & MINUTE_MASK).ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Strictly parse an ISO `YYYY-MM-DD` date into its packed encoding.
///
/// The empty string is not an error and yields the absence marker `0`.
///
/// # Errors
///
/// Returns [`Error::Format`] for any other input that is not a valid
/// `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(s: &str) -> Result<i64> {
    if s.is_empty() {
        return Ok(0);
    }
    parse_iso(s)
        .map(encode_date)
        .ok_or_else(|| Error::Format(s.to_string()))
}

/// Parse exactly `YYYY-MM-DD`, rejecting signs, short fields and
/// impossible days.
pub(crate) fn parse_iso(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a packed date as `YYYY-MM-DD`, or `""` when absent.
pub fn format_date(packed: i64) -> String {
    decode_date(packed)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Format a packed time as `HH:MM`, or `""` when absent.
pub fn format_time(packed: i64) -> String {
    decode_time(packed)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// SQL expression packing the ISO date produced by `iso_expr` the way
/// Things does, evaluated by SQLite at query time.
pub fn packed_date_sql(iso_expr: &str) -> String {
    format!(
        "((CAST(strftime('%Y', {iso_expr}) AS INTEGER) << {YEAR_SHIFT}) \
         | (CAST(strftime('%m', {iso_expr}) AS INTEGER) << {MONTH_SHIFT}) \
         | (CAST(strftime('%d', {iso_expr}) AS INTEGER) << {DAY_SHIFT}))"
    )
}

/// SQL expression for today's packed date in local time.
///
/// Relative filters ("future", "past") embed this expression instead of a
/// precomputed value so the database decides what "today" is.
pub fn today_sql() -> String {
    packed_date_sql("date('now', 'localtime')")
}

/// Decode Unix seconds, `None` for the absence marker (`<= 0` or NaN).
pub fn decode_unix(seconds: f64) -> Option<DateTime<Utc>> {
    if seconds.is_nan() || seconds <= 0.0 {
        return None;
    }
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1e9).round().clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Convert a timestamp to Unix seconds as Things stores them.
pub fn to_unix(time: DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1e9
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
