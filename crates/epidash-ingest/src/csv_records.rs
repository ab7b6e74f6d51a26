use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use epidash_model::Record;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a delimited open-data table into one record per data row.
///
/// The first row supplies the field names. Headers and cells are trimmed
/// and stripped of a UTF-8 BOM; fully blank rows are skipped; short rows
/// pad missing cells with the empty string.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = csv_reader.records();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .context("read header row")?
            .iter()
            .map(normalize_header)
            .collect(),
        None => return Ok(Vec::new()),
    };
    if headers.iter().all(|header| header.is_empty()) {
        bail!("header row is empty");
    }
    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        let row = row.with_context(|| format!("read data row {}", index + 1))?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                let value = row.get(column).unwrap_or("");
                (header.clone(), normalize_cell(value))
            })
            .collect();
        records.push(record);
    }
    debug!(rows = records.len(), "ingested csv table");
    Ok(records)
}

/// Reads a CSV file from disk; see [`records_from_reader`].
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    records_from_reader(file).with_context(|| format!("read csv: {}", path.display()))
}
