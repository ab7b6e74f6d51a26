//! CSV ingestion: open-data tables into header-keyed records.

mod csv_records;

pub use csv_records::{read_records, records_from_reader};
