//! Empty-cell check.
//!
//! Covers every column of the header, whatever its name.

use ptrib_model::{Table, ValidationError};

use crate::issue::Violation;

/// Flag every blank cell within the header width.
pub fn check(table: &Table) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for row in 0..table.row_count() {
        let row_number = Table::sheet_row_number(row);
        for (column, name) in table.headers.iter().enumerate() {
            if table.cell(row, column).is_empty() {
                errors.push(Violation::EmptyCell.at(row_number, column, name));
            }
        }
    }

    errors
}
