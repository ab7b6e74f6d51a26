pub mod age;
pub mod error;
pub mod fields;
pub mod output;
pub mod record;

pub use age::{AgeBand, UnrecognizedAgeBand};
pub use error::{ConvertError, Result};
pub use output::{AgeBandCounts, DailyCount, MainSummary, Patient, SickbedsSummary, SummaryNode};
pub use record::Record;
