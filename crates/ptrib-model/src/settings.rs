//! Default locations and sheet name used by the front ends.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_DIR: &str = "./xlsxModels";
pub const DEFAULT_SHEET: &str = "Produto";
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Where spreadsheets are read from, which sheet is validated and where logs go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scanned for input spreadsheets.
    pub input_dir: PathBuf,
    /// Name of the sheet that holds the product table.
    pub sheet: String,
    /// Directory where validation logs are written.
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            sheet: DEFAULT_SHEET.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }
}
