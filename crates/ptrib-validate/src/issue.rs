//! Rule violations.
//!
//! Each variant carries only the data its message needs. A violation becomes a
//! [`ValidationError`] once it is placed at a row and column.

use ptrib_model::{ErrorCategory, ValidationError};

use crate::columns::column_letter;
use crate::rules::{CSOSN_CODES, ITEM_TYPE_CODES};

/// A rule violation found in a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Cell is empty after trimming.
    EmptyCell,
    /// NCM value is not exactly eight digits.
    NcmFormat { value: String },
    /// CST origin value is not an integer.
    CstOriginNotInteger { value: String },
    /// CST origin value is an integer outside 0..=8.
    CstOriginOutOfRange { value: String },
    /// CSOSN value is not a known code.
    CsosnInvalid { value: String },
    /// Item type value is not an integer.
    ItemTypeNotInteger { value: String },
    /// Item type value is an integer but not a listed code.
    ItemTypeNotInTable { value: String },
}

impl Violation {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Violation::EmptyCell => ErrorCategory::EmptyCell,
            Violation::NcmFormat { .. } => ErrorCategory::Ncm,
            Violation::CstOriginNotInteger { .. } | Violation::CstOriginOutOfRange { .. } => {
                ErrorCategory::CstOrigin
            }
            Violation::CsosnInvalid { .. } => ErrorCategory::Csosn,
            Violation::ItemTypeNotInteger { .. } | Violation::ItemTypeNotInTable { .. } => {
                ErrorCategory::ItemType
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Violation::EmptyCell => "CÉLULA VAZIA".to_string(),
            Violation::NcmFormat { value } => format!(
                "NCM INVÁLIDO - deve conter exatamente 8 dígitos numéricos (atual: '{value}')"
            ),
            Violation::CstOriginNotInteger { value } => format!(
                "CST ORIGEM INVÁLIDO - deve ser um número entre 0 e 8 (atual: '{value}')"
            ),
            Violation::CstOriginOutOfRange { value } => format!(
                "CST ORIGEM FORA DO RANGE - deve estar entre 0 e 8 (atual: {value})"
            ),
            Violation::CsosnInvalid { value } => format!(
                "CSOSN INVÁLIDO - deve ser um dos códigos válidos: {} (atual: '{value}')",
                CSOSN_CODES.join(", ")
            ),
            Violation::ItemTypeNotInteger { value } => format!(
                "TIPO ITEM INVÁLIDO - deve ser um número inteiro (atual: '{value}')"
            ),
            Violation::ItemTypeNotInTable { value } => format!(
                "TIPO ITEM FORA DA TABELA - deve ser um dos códigos válidos: {} (atual: '{value}')",
                ITEM_TYPE_CODES.join(", ")
            ),
        }
    }

    /// Place the violation at a spreadsheet cell.
    pub fn at(&self, row: usize, column: usize, column_name: &str) -> ValidationError {
        ValidationError {
            row,
            column: column_letter(column),
            column_name: column_name.to_string(),
            category: self.category(),
            message: self.message(),
        }
    }
}
