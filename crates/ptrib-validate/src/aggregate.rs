//! Merge per-category errors into the public response.

use ptrib_model::{ErrorCategory, ValidationError, ValidationReport, ValidationResponse};

/// All errors of a report in response order: column letter, then row.
///
/// Copies the errors; the report's category lists stay untouched.
pub fn merged_errors(report: &ValidationReport) -> Vec<ValidationError> {
    let mut details: Vec<ValidationError> = ErrorCategory::ALL
        .into_iter()
        .flat_map(|category| report.errors(category).iter().cloned())
        .collect();
    ptrib_model::sort_by_position(&mut details);
    details
}

/// Build the API response for a finished report.
pub fn to_response(report: &ValidationReport) -> ValidationResponse {
    ValidationResponse {
        file_name: report.file_name.clone(),
        processing_time: report.processing_time(),
        total_errors: report.total_errors(),
        empty_cells: report.count(ErrorCategory::EmptyCell),
        ncm: report.count(ErrorCategory::Ncm),
        cst_origin: report.count(ErrorCategory::CstOrigin),
        csosn: report.count(ErrorCategory::Csosn),
        item_type: report.count(ErrorCategory::ItemType),
        details: merged_errors(report),
    }
}
