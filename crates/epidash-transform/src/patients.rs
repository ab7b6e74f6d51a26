//! Patient list projection and aggregation.

use std::collections::BTreeMap;

use tracing::debug;

use epidash_model::{AgeBand, AgeBandCounts, DailyCount, Patient, Record, Result, fields};

use crate::clock::{Clock, reporting_cutoff};
use crate::daterange::date_range_inclusive;
use crate::datetime::{format_iso, parse_announcement_date};

/// Projects raw patient rows to the dashboard patient list, in row order.
///
/// Only the announcement date is required; the remaining fields pass
/// through verbatim, defaulting to the empty string when absent.
pub fn patients(rows: &[Record]) -> Result<Vec<Patient>> {
    rows.iter()
        .map(|row| {
            let date =
                parse_announcement_date(fields::ANNOUNCEMENT_DATE, row.require(fields::ANNOUNCEMENT_DATE)?)?;
            let iso = format_iso(date);
            Ok(Patient {
                release_date: format!("{iso}T08:00:00"),
                residence: row.get(fields::RESIDENCE).unwrap_or_default().to_string(),
                age_band: row.get(fields::AGE_BAND).unwrap_or_default().to_string(),
                sex: row.get(fields::SEX).unwrap_or_default().to_string(),
                discharged: row
                    .get(fields::DISCHARGED_FLAG)
                    .unwrap_or_default()
                    .to_string(),
                date: iso,
            })
        })
        .collect()
}

/// Counts patients per announcement date, ascending, with no gaps.
///
/// Days with no row between the first and last observed dates get a zero
/// entry, and the series extends with zeros through the reporting cutoff.
/// An empty input yields an empty series.
pub fn patients_summary_by_date(rows: &[Record], clock: &impl Clock) -> Result<Vec<DailyCount>> {
    let mut counts: BTreeMap<chrono::NaiveDate, i64> = BTreeMap::new();
    for row in rows {
        let date =
            parse_announcement_date(fields::ANNOUNCEMENT_DATE, row.require(fields::ANNOUNCEMENT_DATE)?)?;
        *counts.entry(date).or_default() += 1;
    }
    let (Some((&first, _)), Some((&last, _))) =
        (counts.first_key_value(), counts.last_key_value())
    else {
        return Ok(Vec::new());
    };
    let end = last.max(reporting_cutoff(clock));
    Ok(date_range_inclusive(first, end)
        .map(|date| DailyCount::new(format_iso(date), counts.get(&date).copied().unwrap_or(0)))
        .collect())
}

/// Buckets patients into the five fixed age bands.
///
/// Every band key is present in the output even at zero. Rows whose label
/// matches no bucket are excluded from every count; that mirrors the
/// deployed converter and is traced rather than failed.
pub fn patients_summary_by_age(rows: &[Record]) -> Result<AgeBandCounts> {
    let mut counts = AgeBandCounts::default();
    for row in rows {
        match AgeBand::from_source_label(row.require(fields::AGE_BAND)?) {
            Ok(band) => counts.increment(band),
            Err(unrecognized) => {
                debug!(label = %unrecognized.0, "dropping patient row with unrecognized age band");
            }
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epidash_model::ConvertError;

    fn patient_row(date: &str, age: &str) -> Record {
        let mut row = Record::new();
        row.insert(fields::ANNOUNCEMENT_DATE, date);
        row.insert(fields::RESIDENCE, "大分市");
        row.insert(fields::AGE_BAND, age);
        row.insert(fields::SEX, "女性");
        row.insert(fields::DISCHARGED_FLAG, "");
        row
    }

    #[test]
    fn projection_preserves_row_order() {
        let rows = vec![
            patient_row("2020/03/19", "20代"),
            patient_row("2020/03/17", "10代"),
        ];
        let projected = patients(&rows).expect("project patients");
        assert_eq!(projected[0].date, "2020-03-19");
        assert_eq!(projected[0].release_date, "2020-03-19T08:00:00");
        assert_eq!(projected[1].date, "2020-03-17");
    }

    #[test]
    fn projection_fails_on_missing_announcement_date() {
        let mut row = Record::new();
        row.insert(fields::RESIDENCE, "大分市");
        assert_eq!(
            patients(&[row]),
            Err(ConvertError::MissingField(fields::ANNOUNCEMENT_DATE))
        );
    }

    #[test]
    fn age_summary_drops_unrecognized_labels_silently() {
        let rows = vec![
            patient_row("2020/03/17", "20代"),
            patient_row("2020/03/17", "非公表"),
        ];
        let counts = patients_summary_by_age(&rows).expect("summarize by age");
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get(AgeBand::TwentiesThirties), 1);
    }

    #[test]
    fn age_summary_fails_on_missing_age_field() {
        let mut row = Record::new();
        row.insert(fields::ANNOUNCEMENT_DATE, "2020/03/17");
        assert_eq!(
            patients_summary_by_age(&[row]),
            Err(ConvertError::MissingField(fields::AGE_BAND))
        );
    }
}
