//! CLI argument definitions for the fiscal spreadsheet validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ptrib_model::Settings;
use ptrib_model::settings::{DEFAULT_INPUT_DIR, DEFAULT_LOG_DIR, DEFAULT_SHEET};

#[derive(Parser)]
#[command(
    name = "ptrib",
    version,
    about = "Validate fiscal product spreadsheets (NCM, CST Origem, CSOSN, Tipo Item)",
    long_about = "Validate fiscal product spreadsheets.\n\n\
                  Flags empty cells and checks the NCM, CST Origem, CSOSN and\n\
                  Tipo Item columns against their code tables. Each run writes\n\
                  a dated report to the log directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Diagnostic log format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write diagnostics to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Locations shared by every command.
#[derive(Args)]
pub struct PathArgs {
    /// Folder scanned for spreadsheets.
    #[arg(
        long = "input-dir",
        value_name = "DIR",
        env = "PTRIB_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR,
        global = true
    )]
    pub input_dir: PathBuf,

    /// Workbook sheet holding the product table.
    #[arg(
        long = "sheet",
        value_name = "NAME",
        env = "PTRIB_SHEET",
        default_value = DEFAULT_SHEET,
        global = true
    )]
    pub sheet: String,

    /// Folder receiving the validation reports.
    #[arg(
        long = "log-dir",
        value_name = "DIR",
        env = "PTRIB_LOG_DIR",
        default_value = DEFAULT_LOG_DIR,
        global = true
    )]
    pub log_dir: PathBuf,
}

impl PathArgs {
    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_input_dir(self.input_dir.clone())
            .with_sheet(self.sheet.clone())
            .with_log_dir(self.log_dir.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one spreadsheet.
    Validate(ValidateArgs),

    /// List spreadsheets in the input folder, newest first.
    Files,

    /// Pick spreadsheets from a numbered menu (default).
    Menu,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Spreadsheet to validate (.xlsx or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the JSON response instead of the text report.
    #[arg(long = "json")]
    pub json: bool,

    /// Do not write the report to the log folder.
    #[arg(long = "no-log")]
    pub no_log: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
