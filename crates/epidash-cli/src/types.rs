use std::path::PathBuf;

/// Record count for one section of the written document.
#[derive(Debug, Clone)]
pub struct SectionCount {
    pub name: &'static str,
    pub records: usize,
}

/// Outcome of a conversion run, for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Where data.json was written; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub sections: Vec<SectionCount>,
}
