//! Terminal listing of a run's findings.

use ptrib_model::{ErrorCategory, ValidationReport};

use crate::sorted;

const CONSOLE_RULE_WIDTH: usize = 60;

/// Per-category sections with every error line, sorted by position.
///
/// A report without empty cells says so explicitly; other categories are
/// omitted when they have nothing to show.
pub fn render_sections(report: &ValidationReport) -> String {
    let rule = "=".repeat(CONSOLE_RULE_WIDTH);
    let mut out = String::new();

    for category in ErrorCategory::ALL {
        let errors = report.errors(category);
        if errors.is_empty() {
            if category == ErrorCategory::EmptyCell {
                out.push_str("\n✓ Nenhuma célula vazia encontrada!\n");
            }
            continue;
        }
        out.push('\n');
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!("--- {} ({}) ---\n", category.title(), errors.len()));
        out.push_str(&format!("{rule}\n"));
        for error in sorted(errors) {
            out.push_str(&format!("{error}\n"));
        }
    }
    out
}

/// Block printed when a run finds nothing.
pub fn render_all_clear(report: &ValidationReport) -> String {
    let rule = "=".repeat(CONSOLE_RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n{rule}\n"));
    out.push_str("✓ NENHUM ERRO ENCONTRADO!\n");
    out.push_str(&format!("{rule}\n"));
    out.push_str("✓ Todas as células estão preenchidas\n");
    out.push_str("✓ Todos os NCMs estão no formato correto\n");
    out.push_str("✓ Todos os CST Origem estão válidos\n");
    out.push_str("✓ Todos os CSOSN estão válidos\n");
    out.push_str("✓ Todos os Tipo Item estão válidos\n");
    out.push_str(&format!("\n⏱️  Tempo: {}\n", report.processing_time()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptrib_model::ValidationError;

    #[test]
    fn no_empty_cells_is_announced() {
        let mut report = ValidationReport::new("a.xlsx");
        report.ncm.push(ValidationError {
            row: 4,
            column: "B".to_string(),
            column_name: "NCM".to_string(),
            category: ErrorCategory::Ncm,
            message: "x".to_string(),
        });
        let text = render_sections(&report);
        assert!(text.starts_with("\n✓ Nenhuma célula vazia encontrada!\n"));
        assert!(text.contains("--- ERROS DE VALIDAÇÃO NCM (1) ---\n"));
        assert!(!text.contains("CSOSN"));
    }

    #[test]
    fn all_clear_lists_every_rule() {
        let text = render_all_clear(&ValidationReport::new("a.xlsx"));
        assert_eq!(text.matches('✓').count(), 6);
        assert!(text.ends_with("Tempo: 0ns\n"));
    }
}
