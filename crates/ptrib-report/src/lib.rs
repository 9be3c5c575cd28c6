//! Text output for validation reports.
//!
//! - **Console**: the section listing printed after a run
//! - **Log file**: the dated report written to the log directory

mod console;
mod error;
mod log;

pub use console::{render_all_clear, render_sections};
pub use error::{ReportError, Result};
pub use log::{LOG_RULE_WIDTH, log_path, render_log, save_log};

use ptrib_model::{ValidationError, sort_by_position};

/// Copy of `errors` in report order (column letter, then row).
pub(crate) fn sorted(errors: &[ValidationError]) -> Vec<ValidationError> {
    let mut errors = errors.to_vec();
    sort_by_position(&mut errors);
    errors
}
