use thiserror::Error;

use crate::age::UnrecognizedAgeBand;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid date `{value}` in field `{field}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid count `{value}` in field `{field}`")]
    InvalidCount { field: &'static str, value: String },
    #[error(transparent)]
    UnrecognizedAgeBand(#[from] UnrecognizedAgeBand),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
