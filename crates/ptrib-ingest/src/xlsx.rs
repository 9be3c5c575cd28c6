//! Excel workbook source.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use ptrib_model::Table;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::{TabularSource, split_header, trim_trailing_empty};

/// Reads one named sheet from an `.xlsx` workbook.
///
/// Cells are read as stored values, not as displayed text: number formats are
/// not applied. A numeric `1` shown as `01` through a `00` format reads as
/// `"1"`, so code columns should hold text.
pub struct XlsxSource<RS: Read + Seek> {
    workbook: Sheets<RS>,
    source_name: String,
    sheet: String,
}

impl XlsxSource<std::io::BufReader<std::fs::File>> {
    /// Open a workbook file on disk.
    pub fn open(path: &Path, sheet: &str) -> Result<Self> {
        let workbook = open_workbook_auto(path).map_err(|err| IngestError::Workbook {
            source_name: path.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            workbook,
            source_name: path.display().to_string(),
            sheet: sheet.to_string(),
        })
    }
}

impl XlsxSource<Cursor<Vec<u8>>> {
    /// Open a workbook held in memory, such as an uploaded file.
    pub fn from_bytes(name: &str, bytes: Vec<u8>, sheet: &str) -> Result<Self> {
        let workbook =
            open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|err| IngestError::Workbook {
                source_name: name.to_string(),
                message: err.to_string(),
            })?;
        Ok(Self {
            workbook,
            source_name: name.to_string(),
            sheet: sheet.to_string(),
        })
    }
}

impl<RS: Read + Seek> XlsxSource<RS> {
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }
}

impl<RS: Read + Seek> TabularSource for XlsxSource<RS> {
    fn sheet_name(&self) -> &str {
        &self.sheet
    }

    fn read_table(&mut self) -> Result<Table> {
        let names = self.sheet_names();
        if !names.iter().any(|name| name == &self.sheet) {
            return Err(IngestError::SheetNotFound {
                sheet: self.sheet.clone(),
                available: names.join(", "),
            });
        }

        let range = self
            .workbook
            .worksheet_range(&self.sheet)
            .map_err(|err| IngestError::Workbook {
                source_name: self.source_name.clone(),
                message: err.to_string(),
            })?;

        let rows = range_to_rows(&range);
        debug!(
            workbook = %self.source_name,
            sheet = %self.sheet,
            rows = rows.len(),
            "sheet loaded"
        );
        split_header(&self.sheet, rows)
    }
}

/// Render a cell range as strings, anchored at A1.
///
/// Ranges start at the first used cell, so leading blank rows and columns are
/// restored to keep row numbers and column letters aligned with the sheet.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col as usize];
        row.extend(cells.iter().map(ToString::to_string));
        rows.push(trim_trailing_empty(row));
    }
    rows
}
