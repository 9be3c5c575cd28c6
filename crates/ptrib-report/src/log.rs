//! Dated log file written after each run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use ptrib_model::{ErrorCategory, ValidationReport};
use tracing::info;

use crate::error::{ReportError, Result};
use crate::sorted;

/// Width of the `=` rules framing the log.
pub const LOG_RULE_WIDTH: usize = 80;

const TITLE_TIMESTAMP: &str = "%d/%m/%Y %H:%M:%S";
const FILE_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Render the full log text for a report.
pub fn render_log(report: &ValidationReport, generated_at: &NaiveDateTime) -> String {
    let rule = "=".repeat(LOG_RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "RELATÓRIO DE VALIDAÇÃO - {}\n",
        generated_at.format(TITLE_TIMESTAMP)
    ));
    out.push_str(&format!("{rule}\n\n"));

    out.push_str("RESUMO:\n");
    for category in ErrorCategory::ALL {
        out.push_str(&format!(
            "- Total de {}: {}\n",
            category.label(),
            report.count(category)
        ));
    }
    out.push_str(&format!(
        "- Total geral de erros: {}\n",
        report.total_errors()
    ));
    out.push_str(&format!(
        "- Tempo de execução: {}\n\n",
        report.processing_time()
    ));

    for category in ErrorCategory::ALL {
        let errors = report.errors(category);
        if errors.is_empty() {
            continue;
        }
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!("{} ({})\n", category.title(), errors.len()));
        out.push_str(&format!("{rule}\n"));
        for error in sorted(errors) {
            out.push_str(&format!("{error}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!("{rule}\n"));
    out.push_str("FIM DO RELATÓRIO\n");
    out.push_str(&format!("{rule}\n"));
    out
}

/// Path of the log for `source`: `log_validacao_<stem>_<YYYYMMDD_HHMMSS>.txt`.
pub fn log_path(source: &Path, log_dir: &Path, now: &NaiveDateTime) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    log_dir.join(format!(
        "log_validacao_{stem}_{}.txt",
        now.format(FILE_TIMESTAMP)
    ))
}

/// Render the report and write it to the log directory, creating it if needed.
///
/// Returns the path of the written file.
pub fn save_log(source: &Path, log_dir: &Path, report: &ValidationReport) -> Result<PathBuf> {
    let now = Local::now().naive_local();

    fs::create_dir_all(log_dir).map_err(|source| ReportError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let path = log_path(source, log_dir, &now);
    fs::write(&path, render_log(report, &now)).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), total_errors = report.total_errors(), "log saved");
    Ok(path)
}
