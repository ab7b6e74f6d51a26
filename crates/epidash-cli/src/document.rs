//! Assembly of the dashboard document.
//!
//! Every transform runs before anything serializes, so a failure anywhere
//! leaves no partial output behind.

use serde::Serialize;

use epidash_model::{
    AgeBandCounts, DailyCount, MainSummary, Patient, Record, Result, SickbedsSummary,
};
use epidash_transform::{
    Clock, inspections_summary, main_summary, patients, patients_summary_by_age,
    patients_summary_by_date, querents_summary, sickbeds_summary_with_capacity,
};

/// One dated section of the dashboard document.
#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub date: String,
    pub data: T,
}

/// The full `data.json` document the dashboard front end polls.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub patients: Section<Vec<Patient>>,
    pub patients_summary: Section<Vec<DailyCount>>,
    pub patients_summary_by_age: Section<AgeBandCounts>,
    pub inspections_summary: Section<Vec<DailyCount>>,
    pub querents: Section<Vec<DailyCount>>,
    pub sickbeds_summary: Section<SickbedsSummary>,
    pub main_summary: MainSummary,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

/// Runs all six transforms and stamps every section with the run time.
pub fn build_dashboard(
    patient_rows: &[Record],
    summary_rows: &[Record],
    clock: &impl Clock,
    sickbed_capacity: i64,
) -> Result<Dashboard> {
    let stamp = clock.now().format("%Y/%m/%d %H:%M").to_string();
    Ok(Dashboard {
        patients: Section {
            date: stamp.clone(),
            data: patients(patient_rows)?,
        },
        patients_summary: Section {
            date: stamp.clone(),
            data: patients_summary_by_date(patient_rows, clock)?,
        },
        patients_summary_by_age: Section {
            date: stamp.clone(),
            data: patients_summary_by_age(patient_rows)?,
        },
        inspections_summary: Section {
            date: stamp.clone(),
            data: inspections_summary(summary_rows, clock)?,
        },
        querents: Section {
            date: stamp.clone(),
            data: querents_summary(summary_rows, clock)?,
        },
        sickbeds_summary: Section {
            date: stamp.clone(),
            data: sickbeds_summary_with_capacity(summary_rows, sickbed_capacity)?,
        },
        main_summary: main_summary(summary_rows)?,
        last_update: stamp,
    })
}
