//! Library components of the `ptrib` command-line validator.

pub mod logging;
pub mod menu;
pub mod pipeline;
pub mod summary;
