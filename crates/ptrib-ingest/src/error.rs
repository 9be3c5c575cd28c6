//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a sheet from being loaded.
///
/// These are structural failures: the validation engine never runs when one
/// of them is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file metadata.
    #[error("failed to read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported spreadsheet format.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Workbook Errors ===
    /// Workbook could not be opened or decoded.
    #[error("failed to open workbook {source_name}: {message}")]
    Workbook {
        source_name: String,
        message: String,
    },

    /// Requested sheet does not exist in the workbook.
    #[error("sheet '{sheet}' not found (available: {available})")]
    SheetNotFound { sheet: String, available: String },

    /// Sheet has no rows at all.
    #[error("sheet '{sheet}' is empty")]
    EmptySheet { sheet: String },

    // === CSV Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
