//! Steps of one validation run: load, validate, persist.
//!
//! Each step is separate so the command layer can print progress between
//! them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use ptrib_ingest::read_table;
use ptrib_model::{Table, TableMetadata, ValidationReport};
use ptrib_validate::validate_table;

/// Headers that are always echoed in the banner, wherever they sit.
pub const KEY_HEADERS: &[&str] = &["NCM", "CST Origem", "CSOSN", "Tipo Item"];

/// How many leading headers the banner shows before summarizing the rest.
pub const BANNER_HEADER_LIMIT: usize = 5;

/// A sheet loaded and ready to validate.
#[derive(Debug)]
pub struct LoadedSheet {
    pub path: PathBuf,
    pub table: Table,
    pub metadata: TableMetadata,
}

impl LoadedSheet {
    /// File name used to label the report.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Cells checked by the empty-cell pass: every header for every data row.
    pub fn cells_checked(&self) -> usize {
        self.table.cell_count()
    }
}

/// Read `sheet` from the spreadsheet at `path`.
pub fn load(path: &Path, sheet: &str) -> Result<LoadedSheet> {
    let span = info_span!("load", file = %path.display(), sheet);
    let _guard = span.enter();

    let (table, metadata) =
        read_table(path, sheet).with_context(|| format!("read {}", path.display()))?;
    info!(
        rows = metadata.row_count,
        columns = metadata.headers.len(),
        "sheet loaded"
    );
    Ok(LoadedSheet {
        path: path.to_path_buf(),
        table,
        metadata,
    })
}

/// Run every rule pass over a loaded sheet.
pub fn validate(sheet: &LoadedSheet) -> ValidationReport {
    validate_table(&sheet.table, &sheet.file_name())
}

/// Write the dated log next to the others; a failure is logged and returned.
pub fn persist(sheet: &LoadedSheet, log_dir: &Path, report: &ValidationReport) -> Result<PathBuf> {
    ptrib_report::save_log(&sheet.path, log_dir, report)
        .inspect_err(|error| warn!(%error, "log not saved"))
        .with_context(|| format!("save log in {}", log_dir.display()))
}

/// Headers shown in the banner: the first few plus any key column, in sheet
/// order, and how many headers were left out of the leading window.
pub fn banner_headers(headers: &[String]) -> (Vec<&str>, usize) {
    let shown = headers
        .iter()
        .enumerate()
        .filter(|(index, header)| {
            *index < BANNER_HEADER_LIMIT || KEY_HEADERS.contains(&header.as_str())
        })
        .map(|(_, header)| header.as_str())
        .collect();
    let remaining = headers.len().saturating_sub(BANNER_HEADER_LIMIT);
    (shown, remaining)
}
