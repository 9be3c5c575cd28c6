use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ptrib_ingest::IngestError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"erro": ..., "detalhes": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No `file` field, or the multipart body could not be read.
    #[error("Arquivo não fornecido ou erro no upload")]
    MissingFile(String),

    #[error("Apenas arquivos .xlsx são aceitos")]
    UnsupportedExtension,

    /// The upload is not a readable workbook or lacks the configured sheet.
    #[error("Erro ao abrir arquivo: {source}")]
    Workbook {
        #[source]
        source: IngestError,
        sheet: String,
    },

    #[error("Erro interno: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    erro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detalhes: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detalhes) = match &self {
            AppError::MissingFile(reason) => (StatusCode::BAD_REQUEST, Some(reason.clone())),
            AppError::UnsupportedExtension => (StatusCode::BAD_REQUEST, None),
            AppError::Workbook { sheet, .. } => (
                StatusCode::BAD_REQUEST,
                Some(format!(
                    "Verifique se o arquivo é um .xlsx válido com a aba '{sheet}'"
                )),
            ),
            AppError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorBody {
            erro: self.to_string(),
            detalhes,
        };
        (status, Json(body)).into_response()
    }
}
