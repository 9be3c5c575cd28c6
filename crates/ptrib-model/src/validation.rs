//! Validation errors and the per-run report.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::category::ErrorCategory;

/// A single rule violation at one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Spreadsheet row number (header is row 1).
    #[serde(rename = "linha")]
    pub row: usize,
    /// Spreadsheet column letter (A, B, ..., AA).
    #[serde(rename = "coluna")]
    pub column: String,
    #[serde(rename = "nomeColuna")]
    pub column_name: String,
    #[serde(rename = "tipo")]
    pub category: ErrorCategory,
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl ValidationError {
    /// Report ordering: column letter as a string, then row number.
    ///
    /// Column letters compare lexicographically, so "AA" sorts before "B".
    pub fn position_cmp(&self, other: &Self) -> Ordering {
        self.column
            .cmp(&other.column)
            .then_with(|| self.row.cmp(&other.row))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ERRO] Linha {}, Coluna {} ({}): {}",
            self.row, self.column, self.column_name, self.message
        )
    }
}

/// Stable sort by column letter, then row.
pub fn sort_by_position(errors: &mut [ValidationError]) {
    errors.sort_by(ValidationError::position_cmp);
}

/// Result of one validation run, grouped by rule category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub file_name: String,
    pub empty_cells: Vec<ValidationError>,
    pub ncm: Vec<ValidationError>,
    pub cst_origin: Vec<ValidationError>,
    pub csosn: Vec<ValidationError>,
    pub item_type: Vec<ValidationError>,
    pub elapsed: Duration,
}

impl ValidationReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn errors(&self, category: ErrorCategory) -> &[ValidationError] {
        match category {
            ErrorCategory::EmptyCell => &self.empty_cells,
            ErrorCategory::Ncm => &self.ncm,
            ErrorCategory::CstOrigin => &self.cst_origin,
            ErrorCategory::Csosn => &self.csosn,
            ErrorCategory::ItemType => &self.item_type,
        }
    }

    pub fn count(&self, category: ErrorCategory) -> usize {
        self.errors(category).len()
    }

    pub fn total_errors(&self) -> usize {
        ErrorCategory::ALL
            .into_iter()
            .map(|category| self.count(category))
            .sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_errors() == 0
    }

    /// Elapsed time rendered the way the report and API show it.
    pub fn processing_time(&self) -> String {
        format_duration(self.elapsed)
    }
}

/// Human-readable duration such as `1.5ms` or `820µs`.
pub fn format_duration(duration: Duration) -> String {
    format!("{duration:?}")
}
