//! Source date label parsing.
//!
//! Patient rows carry full `YYYY/MM/DD` announcement dates; daily summary
//! rows carry `M月D日` labels with no year at all. The missing year is taken
//! from the injected clock's current year, matching the deployed converter
//! (no inference from surrounding rows).

use chrono::NaiveDate;

use epidash_model::{ConvertError, Result};

/// Parses a `YYYY/MM/DD` announcement date.
pub fn parse_announcement_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y/%m/%d").map_err(|_| ConvertError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses a `M月D日` label, assuming the given calendar year.
pub fn parse_month_day(field: &'static str, value: &str, year: i32) -> Result<NaiveDate> {
    let invalid = || ConvertError::InvalidDate {
        field,
        value: value.to_string(),
    };
    let rest = value.trim().strip_suffix('日').ok_or_else(invalid)?;
    let (month, day) = rest.split_once('月').ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Formats a date the way every output series expects it.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
