//! In-memory tabular data handed to the validation engine.

use serde::{Deserialize, Serialize};

/// A sheet read into memory: the header row plus every data row.
///
/// Rows may be shorter than the header (ragged rows); missing trailing cells
/// are read as empty strings. Cells beyond the header width are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of cells covered by the empty-cell rule.
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Trimmed cell value, or an empty string when the row is too short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", |value| value.trim())
    }

    /// Spreadsheet row number of a data row: the header is row 1.
    pub fn sheet_row_number(data_row: usize) -> usize {
        data_row + 2
    }
}

/// Descriptive information about a loaded sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

impl TableMetadata {
    pub fn from_table(sheet_name: impl Into<String>, table: &Table) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            headers: table.headers.clone(),
            row_count: table.row_count(),
        }
    }
}
