//! Daily summary aggregation.
//!
//! The summary table carries one row per day (`M月D日` label plus count
//! columns), already contiguous and ascending, so the per-day series only
//! need trailing backfill through the reporting cutoff. The cumulative
//! aggregates sum the whole table.

use chrono::{Datelike, NaiveDate};

use epidash_model::{
    ConvertError, DailyCount, MainSummary, Record, Result, SickbedsSummary, SummaryNode, fields,
};

use crate::clock::{Clock, reporting_cutoff};
use crate::daterange::date_range_inclusive;
use crate::datetime::{format_iso, parse_month_day};

/// Deployed sickbed capacity for the prefecture.
pub const SICKBED_CAPACITY: i64 = 118;

/// Inspections performed per day, zero-filled through the cutoff.
pub fn inspections_summary(rows: &[Record], clock: &impl Clock) -> Result<Vec<DailyCount>> {
    daily_series(rows, fields::INSPECTIONS, clock)
}

/// Consultation hotline calls per day, zero-filled through the cutoff.
pub fn querents_summary(rows: &[Record], clock: &impl Clock) -> Result<Vec<DailyCount>> {
    daily_series(rows, fields::QUERENTS, clock)
}

/// Current hospitalization snapshot against the deployed capacity.
pub fn sickbeds_summary(rows: &[Record]) -> Result<SickbedsSummary> {
    sickbeds_summary_with_capacity(rows, SICKBED_CAPACITY)
}

/// Same as [`sickbeds_summary`] with an explicit capacity.
///
/// Remaining beds are not floored; a count past capacity goes negative.
pub fn sickbeds_summary_with_capacity(rows: &[Record], capacity: i64) -> Result<SickbedsSummary> {
    let hospitalized = currently_hospitalized(rows)?;
    Ok(SickbedsSummary {
        hospitalized,
        remaining_beds: capacity - hospitalized,
    })
}

/// Cumulative totals tree: 累計 over 入院中 / 死亡 / 退院.
pub fn main_summary(rows: &[Record]) -> Result<MainSummary> {
    let hospitalized = currently_hospitalized(rows)?;
    let deaths = sum_counts(rows, fields::DEATHS)?;
    let discharged = sum_counts(rows, fields::DISCHARGED)?;
    Ok(MainSummary {
        attr: "累計".to_string(),
        value: hospitalized + deaths + discharged,
        children: vec![
            SummaryNode::new("入院中", hospitalized),
            SummaryNode::new("死亡", deaths),
            SummaryNode::new("退院", discharged),
        ],
    })
}

/// Running total of cases neither discharged nor dead.
fn currently_hospitalized(rows: &[Record]) -> Result<i64> {
    let mut hospitalized = 0;
    for row in rows {
        hospitalized += parse_count(row, fields::POSITIVES)?
            - parse_count(row, fields::DISCHARGED)?
            - parse_count(row, fields::DEATHS)?;
    }
    Ok(hospitalized)
}

fn sum_counts(rows: &[Record], field: &'static str) -> Result<i64> {
    let mut total = 0;
    for row in rows {
        total += parse_count(row, field)?;
    }
    Ok(total)
}

/// One series entry per row, then zeros through the reporting cutoff.
fn daily_series(
    rows: &[Record],
    value_field: &'static str,
    clock: &impl Clock,
) -> Result<Vec<DailyCount>> {
    let year = clock.now().year();
    let mut series = Vec::with_capacity(rows.len());
    let mut last: Option<NaiveDate> = None;
    for row in rows {
        let date = parse_month_day(fields::SUMMARY_DATE, row.require(fields::SUMMARY_DATE)?, year)?;
        series.push(DailyCount::new(format_iso(date), parse_count(row, value_field)?));
        last = Some(date);
    }
    if let Some(last) = last {
        let next = last.succ_opt().unwrap_or(NaiveDate::MAX);
        for date in date_range_inclusive(next, reporting_cutoff(clock)) {
            series.push(DailyCount::new(format_iso(date), 0));
        }
    }
    Ok(series)
}

/// Parses a numeric cell, treating the empty string as zero.
fn parse_count(row: &Record, field: &'static str) -> Result<i64> {
    let raw = row.require(field)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| ConvertError::InvalidCount {
        field,
        value: raw.to_string(),
    })
}
