//! Input file discovery.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{IngestError, Result};

/// Extensions picked up when scanning the input directory.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "csv"];

/// A spreadsheet found in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetFile {
    /// File name without directory.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Lists spreadsheets in a directory, newest first.
///
/// Subdirectories are skipped; extensions match case-insensitively.
pub fn list_spreadsheets(dir: &Path) -> Result<Vec<SpreadsheetFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() || !is_spreadsheet(&path) {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .map_err(|e| IngestError::Metadata {
                path: path.clone(),
                source: e,
            })?;

        files.push(SpreadsheetFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            modified,
        });
    }

    // Newest first; ties keep name order so listings are stable.
    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));

    Ok(files)
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
