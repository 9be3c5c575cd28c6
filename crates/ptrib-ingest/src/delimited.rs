//! CSV source for sheets exported as comma-separated text.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use ptrib_model::Table;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::{TabularSource, split_header, trim_trailing_empty};

/// Reads a whole CSV file as one sheet. Record lengths may vary.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    name: String,
}

impl CsvSource {
    pub fn new(path: &Path) -> Self {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("csv")
            .to_string();
        Self {
            path: path.to_path_buf(),
            name,
        }
    }
}

impl TabularSource for CsvSource {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn read_table(&mut self) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|source| IngestError::CsvParse {
                path: self.path.clone(),
                source,
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| IngestError::CsvParse {
                path: self.path.clone(),
                source,
            })?;
            let row: Vec<String> = record.iter().map(str::to_string).collect();
            rows.push(trim_trailing_empty(row));
        }

        if let Some(first) = rows.first_mut().and_then(|header| header.first_mut()) {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }

        debug!(path = %self.path.display(), rows = rows.len(), "csv loaded");
        split_header(&self.name, rows)
    }
}
