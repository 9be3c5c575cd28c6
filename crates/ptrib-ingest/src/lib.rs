//! Spreadsheet ingestion: loading sheets into [`ptrib_model::Table`] and
//! discovering input files.

mod delimited;
pub mod discovery;
pub mod error;
mod source;
mod xlsx;

pub use delimited::CsvSource;
pub use discovery::{SPREADSHEET_EXTENSIONS, SpreadsheetFile, list_spreadsheets};
pub use error::{IngestError, Result};
pub use source::{TabularSource, open_source, read_table};
pub use xlsx::XlsxSource;
