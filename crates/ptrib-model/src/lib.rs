pub mod category;
pub mod response;
pub mod settings;
pub mod table;
pub mod validation;

pub use category::ErrorCategory;
pub use response::ValidationResponse;
pub use settings::Settings;
pub use table::{Table, TableMetadata};
pub use validation::{ValidationError, ValidationReport, format_duration, sort_by_position};
