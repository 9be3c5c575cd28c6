//! Checks bound to a single named column.

use ptrib_model::{Table, ValidationError};

use crate::columns::ColumnIndex;
use crate::issue::Violation;

/// Apply `rule` to every non-empty cell of the named column.
///
/// A missing column yields no errors. Blank cells are skipped; the empty-cell
/// check already reports them.
pub fn check<F>(
    table: &Table,
    columns: &ColumnIndex,
    column_name: &str,
    rule: F,
) -> Vec<ValidationError>
where
    F: Fn(&str) -> Option<Violation>,
{
    let Some(column) = columns.get(column_name) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    for row in 0..table.row_count() {
        let value = table.cell(row, column);
        if value.is_empty() {
            continue;
        }
        if let Some(violation) = rule(value) {
            errors.push(violation.at(Table::sheet_row_number(row), column, column_name));
        }
    }
    errors
}
