use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Machine-readable validation summary returned by the API.
///
/// `details` always serializes as a list, empty when the sheet is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(rename = "nomeArquivo")]
    pub file_name: String,
    #[serde(rename = "processingTime")]
    pub processing_time: String,
    #[serde(rename = "totalErros")]
    pub total_errors: usize,
    #[serde(rename = "errosVazias")]
    pub empty_cells: usize,
    #[serde(rename = "errosNCM")]
    pub ncm: usize,
    #[serde(rename = "errosCSTOrigem")]
    pub cst_origin: usize,
    #[serde(rename = "errosCSOSN")]
    pub csosn: usize,
    #[serde(rename = "errosTipoItem")]
    pub item_type: usize,
    #[serde(rename = "detalhes", default)]
    pub details: Vec<ValidationError>,
}
