//! CLI argument definitions for the converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use epidash_transform::SICKBED_CAPACITY;

#[derive(Parser)]
#[command(
    name = "epidash",
    version,
    about = "Convert open-data case CSVs into the dashboard JSON document",
    long_about = "Read the prefectural patient list and daily summary CSVs,\n\
                  aggregate them into the dashboard series, and write data.json.\n\
                  One-shot: the whole document is built in memory and written once."
)]
pub struct Cli {
    /// Patient list CSV (one row per announced case).
    #[arg(long = "patients", value_name = "CSV")]
    pub patients: PathBuf,

    /// Daily summary CSV (inspections, positives, querents, outcomes).
    #[arg(long = "summary", value_name = "CSV")]
    pub summary: PathBuf,

    /// Directory to write data.json into.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Sickbed capacity used for the remaining-beds figure.
    #[arg(
        long = "sickbed-capacity",
        value_name = "N",
        default_value_t = SICKBED_CAPACITY
    )]
    pub sickbed_capacity: i64,

    /// Transform and report without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
