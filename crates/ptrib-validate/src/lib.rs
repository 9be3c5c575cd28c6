//! Fiscal rule validation for product spreadsheets.
//!
//! The engine resolves column positions from the header row, runs five
//! independent checks (empty cells, NCM, CST origin, CSOSN, item type) and
//! returns a [`ValidationReport`]. [`to_response`] turns a report into the
//! sorted, serializable API response.

mod aggregate;
mod checks;
pub mod columns;
mod engine;
pub mod issue;
pub mod rules;

pub use aggregate::{merged_errors, to_response};
pub use columns::{ColumnIndex, column_letter};
pub use engine::RuleEngine;
pub use issue::Violation;

use ptrib_model::{Table, ValidationReport, ValidationResponse};

/// Validate a table and return the per-category report.
pub fn validate_table(table: &Table, file_name: &str) -> ValidationReport {
    RuleEngine::new(table).execute(file_name)
}

/// Validate a table and return the API response directly.
pub fn validate_to_response(table: &Table, file_name: &str) -> ValidationResponse {
    to_response(&validate_table(table, file_name))
}
