use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use epidash_cli::document::{Dashboard, build_dashboard};
use epidash_ingest::read_records;
use epidash_transform::SystemClock;

use crate::cli::Cli;
use crate::types::{ConvertResult, SectionCount};

pub fn run_convert(cli: &Cli) -> Result<ConvertResult> {
    let patient_rows = read_records(&cli.patients)?;
    info!(rows = patient_rows.len(), "loaded patient list");
    let summary_rows = read_records(&cli.summary)?;
    info!(rows = summary_rows.len(), "loaded daily summary");

    let dashboard = build_dashboard(
        &patient_rows,
        &summary_rows,
        &SystemClock,
        cli.sickbed_capacity,
    )
    .context("transform records")?;

    // Serialize the complete document before touching the filesystem, so a
    // failed transform never leaves a truncated data.json behind.
    let mut json = serde_json::to_string_pretty(&dashboard).context("serialize dashboard")?;
    json.push('\n');

    let output_path = if cli.dry_run {
        debug!("dry run, skipping write");
        None
    } else {
        fs::create_dir_all(&cli.output_dir)
            .with_context(|| format!("create output dir: {}", cli.output_dir.display()))?;
        let path = cli.output_dir.join("data.json");
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote dashboard document");
        Some(path)
    };

    Ok(ConvertResult {
        output_path,
        sections: section_counts(&dashboard),
    })
}

fn section_counts(dashboard: &Dashboard) -> Vec<SectionCount> {
    vec![
        SectionCount {
            name: "patients",
            records: dashboard.patients.data.len(),
        },
        SectionCount {
            name: "patients_summary",
            records: dashboard.patients_summary.data.len(),
        },
        SectionCount {
            name: "patients_summary_by_age",
            records: 5,
        },
        SectionCount {
            name: "inspections_summary",
            records: dashboard.inspections_summary.data.len(),
        },
        SectionCount {
            name: "querents",
            records: dashboard.querents.data.len(),
        },
        SectionCount {
            name: "sickbeds_summary",
            records: 1,
        },
        SectionCount {
            name: "main_summary",
            records: dashboard.main_summary.children.len() + 1,
        },
    ]
}
