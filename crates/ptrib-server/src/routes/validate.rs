//! POST /api/validar -- validate an uploaded workbook.

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use ptrib_ingest::{TabularSource, XlsxSource};
use ptrib_model::ValidationResponse;
use ptrib_validate::validate_to_response;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the workbook.
pub const UPLOAD_FIELD: &str = "file";

/// Workbook contents taken from the request.
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

async fn validate_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ValidationResponse>> {
    let upload = read_upload(&mut multipart).await?;
    if !upload.file_name.to_lowercase().ends_with(".xlsx") {
        return Err(AppError::UnsupportedExtension);
    }

    let sheet = state.config.sheet.clone();
    let response = tokio::task::spawn_blocking(move || validate_workbook(upload, &sheet))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    info!(
        file = %response.file_name,
        total_errors = response.total_errors,
        processing_time = %response.processing_time,
        "upload validated"
    );
    Ok(Json(response))
}

/// Take the first `file` field; other fields are ignored.
async fn read_upload(multipart: &mut Multipart) -> AppResult<Upload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MissingFile(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::MissingFile(e.to_string()))?;
        return Ok(Upload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::MissingFile(format!(
        "campo '{UPLOAD_FIELD}' ausente"
    )))
}

fn validate_workbook(upload: Upload, sheet: &str) -> AppResult<ValidationResponse> {
    let workbook_error = |source| AppError::Workbook {
        source,
        sheet: sheet.to_string(),
    };
    let mut source =
        XlsxSource::from_bytes(&upload.file_name, upload.bytes, sheet).map_err(workbook_error)?;
    let table = source.read_table().map_err(workbook_error)?;
    Ok(validate_to_response(&table, &upload.file_name))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/validar", post(validate_upload))
}
