use std::time::Instant;

use ptrib_model::{Table, ValidationReport};
use tracing::{debug, info_span};

use crate::checks;
use crate::columns::ColumnIndex;

/// Runs every rule check over one table.
///
/// Holds no state beyond the borrowed table and its column index, so each run
/// builds its own engine.
#[derive(Debug)]
pub struct RuleEngine<'a> {
    table: &'a Table,
    columns: ColumnIndex,
}

impl<'a> RuleEngine<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            columns: ColumnIndex::from_headers(&table.headers),
        }
    }

    /// Run the five checks and collect their errors into a report.
    pub fn execute(&self, file_name: &str) -> ValidationReport {
        let span = info_span!(
            "validate",
            file = %file_name,
            rows = self.table.row_count(),
            columns = self.table.column_count()
        );
        let _guard = span.enter();
        let start = Instant::now();

        let report = ValidationReport {
            file_name: file_name.to_string(),
            empty_cells: checks::empty_cells(self.table),
            ncm: checks::ncm(self.table, &self.columns),
            cst_origin: checks::cst_origin(self.table, &self.columns),
            csosn: checks::csosn(self.table, &self.columns),
            item_type: checks::item_type(self.table, &self.columns),
            elapsed: start.elapsed(),
        };

        debug!(
            empty_cells = report.empty_cells.len(),
            ncm = report.ncm.len(),
            cst_origin = report.cst_origin.len(),
            csosn = report.csosn.len(),
            item_type = report.item_type.len(),
            duration_us = report.elapsed.as_micros(),
            "checks complete"
        );
        report
    }
}
