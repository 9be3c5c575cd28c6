//! Integration tests for the validation engine and response aggregation.

use ptrib_model::{ErrorCategory, Table, ValidationError};
use ptrib_validate::{to_response, validate_table, validate_to_response};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn make_table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
        strings(headers),
        rows.iter().map(|row| strings(row)).collect(),
    )
}

fn positions(errors: &[ValidationError]) -> Vec<(usize, String)> {
    errors.iter().map(|e| (e.row, e.column.clone())).collect()
}

#[test]
fn empty_named_cell_is_reported_once() {
    let table = make_table(
        &["A", "NCM", "Tipo Item"],
        &[&["x", "12345678", "00"], &["y", "", "01"]],
    );
    let report = validate_table(&table, "produtos.xlsx");

    assert_eq!(positions(&report.empty_cells), vec![(3, "B".to_string())]);
    assert!(report.ncm.iter().all(|e| e.row != 3));
    assert!(report.ncm.is_empty());
    assert!(report.item_type.is_empty());
    assert_eq!(report.total_errors(), 1);
}

#[test]
fn csosn_values() {
    let table = make_table(&["CSOSN"], &[&["101"], &["104"], &[""]]);
    let report = validate_table(&table, "csosn.xlsx");

    assert_eq!(report.csosn.len(), 1);
    assert_eq!(report.csosn[0].row, 3);
    assert!(report.csosn[0].message.starts_with("CSOSN INVÁLIDO"));
    assert!(report.csosn[0].message.ends_with("(atual: '104')"));

    assert_eq!(positions(&report.empty_cells), vec![(4, "A".to_string())]);
}

#[test]
fn cst_origin_values() {
    let table = make_table(&["CST Origem"], &[&["9"], &["abc"], &["3"], &[" 8 "]]);
    let report = validate_table(&table, "cst.xlsx");

    assert_eq!(report.cst_origin.len(), 2);
    assert_eq!(report.cst_origin[0].row, 2);
    assert!(report.cst_origin[0].message.starts_with("CST ORIGEM FORA DO RANGE"));
    assert_eq!(report.cst_origin[1].row, 3);
    assert!(report.cst_origin[1].message.starts_with("CST ORIGEM INVÁLIDO"));
}

#[test]
fn ncm_values() {
    let table = make_table(&["NCM"], &[&["1234567"], &["12345678"]]);
    let report = validate_table(&table, "ncm.xlsx");

    assert_eq!(report.ncm.len(), 1);
    assert_eq!(
        report.ncm[0].message,
        "NCM INVÁLIDO - deve conter exatamente 8 dígitos numéricos (atual: '1234567')"
    );
    assert_eq!(report.ncm[0].column_name, "NCM");
}

#[test]
fn item_type_values() {
    let table = make_table(&["Tipo Item"], &[&["1"], &["07"], &["x"], &["99"]]);
    let report = validate_table(&table, "tipo.xlsx");

    let messages: Vec<&str> = report.item_type.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("TIPO ITEM FORA DA TABELA"));
    assert!(messages[1].starts_with("TIPO ITEM INVÁLIDO"));
}

#[test]
fn missing_named_columns_are_skipped() {
    let table = make_table(&["Codigo", "Descricao"], &[&["1", "Parafuso"]]);
    let report = validate_table(&table, "sem_fiscais.xlsx");
    assert!(report.is_clean());
}

#[test]
fn named_rule_uses_last_duplicate_header() {
    let table = make_table(&["NCM", "NCM"], &[&["abc", "12345678"]]);
    let report = validate_table(&table, "dup.xlsx");
    assert!(report.ncm.is_empty());

    let table = make_table(&["NCM", "NCM"], &[&["12345678", "abc"]]);
    let report = validate_table(&table, "dup.xlsx");
    assert_eq!(positions(&report.ncm), vec![(2, "B".to_string())]);
}

#[test]
fn response_sorts_by_column_string_then_row() {
    let mut headers: Vec<String> = (0..27).map(|i| format!("C{i}")).collect();
    headers[1] = "NCM".to_string();
    let full_row = |ncm: &str| -> Vec<String> {
        (0..27)
            .map(|i| if i == 1 { ncm.to_string() } else { "v".to_string() })
            .collect()
    };
    let mut row_a = full_row("bad");
    row_a[26] = String::new();
    let mut row_b = full_row("12345678");
    row_b[0] = String::new();
    let table = Table::new(headers, vec![row_a, row_b]);

    let response = validate_to_response(&table, "ordem.xlsx");
    let order: Vec<(String, usize, ErrorCategory)> = response
        .details
        .iter()
        .map(|e| (e.column.clone(), e.row, e.category))
        .collect();
    assert_eq!(
        order,
        vec![
            ("A".to_string(), 3, ErrorCategory::EmptyCell),
            ("AA".to_string(), 2, ErrorCategory::EmptyCell),
            ("B".to_string(), 2, ErrorCategory::Ncm),
        ]
    );
    assert_eq!(response.total_errors, 3);
    assert_eq!(response.empty_cells, 2);
    assert_eq!(response.ncm, 1);
}

#[test]
fn response_leaves_report_lists_untouched() {
    let table = make_table(&["A", "B"], &[&["", ""], &["", "x"]]);
    let report = validate_table(&table, "vazios.xlsx");
    let before = report.empty_cells.clone();
    let response = to_response(&report);

    assert_eq!(report.empty_cells, before);
    // Row-major in the report, column-major in the response.
    assert_eq!(
        positions(&report.empty_cells),
        vec![(2, "A".to_string()), (2, "B".to_string()), (3, "A".to_string())]
    );
    assert_eq!(
        positions(&response.details),
        vec![(2, "A".to_string()), (3, "A".to_string()), (2, "B".to_string())]
    );
}

#[test]
fn clean_table_serializes_empty_details() {
    let table = make_table(
        &["NCM", "CST Origem", "CSOSN", "Tipo Item"],
        &[&["12345678", "0", "102", "00"]],
    );
    let response = validate_to_response(&table, "ok.xlsx");
    let json = serde_json::to_value(&response).expect("serialize");

    assert_eq!(json["detalhes"], serde_json::json!([]));
    assert_eq!(json["totalErros"], 0);
    assert_eq!(json["nomeArquivo"], "ok.xlsx");
}

#[test]
fn header_only_table_has_no_errors() {
    let table = make_table(&["NCM", "CSOSN"], &[]);
    let report = validate_table(&table, "so_cabecalho.xlsx");
    assert!(report.is_clean());

    let empty = Table::default();
    assert!(validate_table(&empty, "vazia.xlsx").is_clean());
}
