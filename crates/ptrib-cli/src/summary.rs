//! Tables printed by the CLI.

use chrono::{DateTime, Local};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ptrib_ingest::SpreadsheetFile;
use ptrib_model::{ErrorCategory, ValidationReport};

/// Final statistics for a run: cells checked, per-category counts, total and
/// elapsed time.
pub fn statistics_table(report: &ValidationReport, cells_checked: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Estatística"), header_cell("Valor")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Células verificadas"), Cell::new(cells_checked)]);
    for category in ErrorCategory::ALL {
        let color = match category {
            ErrorCategory::EmptyCell => Color::Red,
            _ => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(capitalize(category.label())),
            count_cell(report.count(category), color),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total de erros")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.total_errors(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Tempo total"),
        dim_cell(report.processing_time()),
    ]);
    table
}

/// Spreadsheets in the input directory, newest first and in bold.
pub fn file_list_table(files: &[SpreadsheetFile]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Arquivo"),
        header_cell("Modificado"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, file) in files.iter().enumerate() {
        let modified = DateTime::<Local>::from(file.modified)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string();
        let name = if index == 0 {
            Cell::new(&file.name).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&file.name)
        };
        table.add_row(vec![Cell::new(index + 1), name, dim_cell(modified)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
