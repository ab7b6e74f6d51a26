//! Library surface of the converter CLI: logging setup and the dashboard
//! document assembly, kept out of `main` so integration tests can drive
//! them directly.

pub mod document;
pub mod logging;
