use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule category a validation error belongs to.
///
/// The set is closed: every rule pass produces errors of exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Cell is empty after trimming.
    #[serde(rename = "VAZIA")]
    EmptyCell,
    /// NCM commodity code is not eight digits.
    #[serde(rename = "NCM")]
    Ncm,
    /// CST origin code is not an integer in 0..=8.
    #[serde(rename = "CST_ORIGEM")]
    CstOrigin,
    /// CSOSN code is not in the Simples Nacional table.
    #[serde(rename = "CSOSN")]
    Csosn,
    /// Item type code is not in the fiscal item-type table.
    #[serde(rename = "TIPO_ITEM")]
    ItemType,
}

impl ErrorCategory {
    /// All categories, in report order.
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::EmptyCell,
        ErrorCategory::Ncm,
        ErrorCategory::CstOrigin,
        ErrorCategory::Csosn,
        ErrorCategory::ItemType,
    ];

    /// Wire tag used in API responses.
    pub fn tag(self) -> &'static str {
        match self {
            Self::EmptyCell => "VAZIA",
            Self::Ncm => "NCM",
            Self::CstOrigin => "CST_ORIGEM",
            Self::Csosn => "CSOSN",
            Self::ItemType => "TIPO_ITEM",
        }
    }

    /// Section title used in rendered logs.
    pub fn title(self) -> &'static str {
        match self {
            Self::EmptyCell => "CÉLULAS VAZIAS",
            Self::Ncm => "ERROS DE VALIDAÇÃO NCM",
            Self::CstOrigin => "ERROS DE VALIDAÇÃO CST ORIGEM",
            Self::Csosn => "ERROS DE VALIDAÇÃO CSOSN",
            Self::ItemType => "ERROS DE VALIDAÇÃO TIPO ITEM",
        }
    }

    /// Short human label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::EmptyCell => "células vazias",
            Self::Ncm => "erros NCM",
            Self::CstOrigin => "erros CST Origem",
            Self::Csosn => "erros CSOSN",
            Self::ItemType => "erros Tipo Item",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
