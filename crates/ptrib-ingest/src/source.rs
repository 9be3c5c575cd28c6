//! Tabular source abstraction.

use std::path::Path;

use ptrib_model::{Table, TableMetadata};

use crate::delimited::CsvSource;
use crate::error::{IngestError, Result};
use crate::xlsx::XlsxSource;

/// Something that can produce a header row and data rows for one sheet.
pub trait TabularSource {
    /// Name of the sheet (or file, for single-sheet formats) being read.
    fn sheet_name(&self) -> &str;

    /// Read the whole sheet into memory.
    fn read_table(&mut self) -> Result<Table>;

    /// Read the sheet and describe it.
    fn read_with_metadata(&mut self) -> Result<(Table, TableMetadata)> {
        let table = self.read_table()?;
        let metadata = TableMetadata::from_table(self.sheet_name(), &table);
        Ok((table, metadata))
    }
}

/// Open a spreadsheet by extension: `.xlsx` workbooks use `sheet`, `.csv`
/// files are read whole.
pub fn open_source(path: &Path, sheet: &str) -> Result<Box<dyn TabularSource>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("xlsx") => Ok(Box::new(XlsxSource::open(path, sheet)?)),
        Some("csv") => Ok(Box::new(CsvSource::new(path))),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Convenience wrapper: open and read in one call.
pub fn read_table(path: &Path, sheet: &str) -> Result<(Table, TableMetadata)> {
    open_source(path, sheet)?.read_with_metadata()
}

/// Drop trailing blank cells, matching how spreadsheet readers report rows.
pub(crate) fn trim_trailing_empty(mut row: Vec<String>) -> Vec<String> {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
    row
}

/// Split raw rows into header and data rows.
pub(crate) fn split_header(sheet: &str, mut rows: Vec<Vec<String>>) -> Result<Table> {
    if rows.is_empty() {
        return Err(IngestError::EmptySheet {
            sheet: sheet.to_string(),
        });
    }
    let data = rows.split_off(1);
    let headers = rows.into_iter().next().unwrap_or_default();
    Ok(Table::new(headers, data))
}
