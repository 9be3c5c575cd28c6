//! Validation check modules.
//!
//! Each check runs independently over every data row and returns its own
//! error list.

mod empty;
mod named;

use ptrib_model::{Table, ValidationError};

use crate::columns::ColumnIndex;
use crate::rules::{
    CSOSN_COLUMN, CST_ORIGIN_COLUMN, ITEM_TYPE_COLUMN, NCM_COLUMN, check_csosn, check_cst_origin,
    check_item_type, check_ncm,
};

/// Blank cells in any column.
pub fn empty_cells(table: &Table) -> Vec<ValidationError> {
    empty::check(table)
}

/// NCM codes that are not eight digits.
pub fn ncm(table: &Table, columns: &ColumnIndex) -> Vec<ValidationError> {
    named::check(table, columns, NCM_COLUMN, check_ncm)
}

/// CST origin codes that are not integers in 0..=8.
pub fn cst_origin(table: &Table, columns: &ColumnIndex) -> Vec<ValidationError> {
    named::check(table, columns, CST_ORIGIN_COLUMN, check_cst_origin)
}

/// CSOSN codes outside the Simples Nacional table.
pub fn csosn(table: &Table, columns: &ColumnIndex) -> Vec<ValidationError> {
    named::check(table, columns, CSOSN_COLUMN, check_csosn)
}

/// Item type codes outside the fiscal item-type table.
pub fn item_type(table: &Table, columns: &ColumnIndex) -> Vec<ValidationError> {
    named::check(table, columns, ITEM_TYPE_COLUMN, check_item_type)
}
