//! Transformation engine for the dashboard converter.
//!
//! Every operation here is a pure function over in-memory records; the only
//! environment-sensitive input is the wall clock, injected through
//! [`clock::Clock`] so tests run against a fixed instant.
//!
//! - **clock**: injected time source and the reporting cutoff rule
//! - **daterange**: finite calendar-date sequences used for zero backfill
//! - **datetime**: source date label parsing (`YYYY/MM/DD`, `M月D日`)
//! - **patients**: patient list projection and per-date/per-age aggregation
//! - **summary**: daily summary series and cumulative totals

pub mod clock;
pub mod daterange;
pub mod datetime;
pub mod patients;
pub mod summary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use daterange::{DateRange, date_range, date_range_inclusive};
pub use patients::{patients, patients_summary_by_age, patients_summary_by_date};
pub use summary::{
    SICKBED_CAPACITY, inspections_summary, main_summary, querents_summary, sickbeds_summary,
    sickbeds_summary_with_capacity,
};
