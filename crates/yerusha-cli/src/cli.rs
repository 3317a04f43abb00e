//! CLI argument definitions for the Yerusha validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "yerusha",
    version,
    about = "Yerusha metadata validator - check archival descriptions against project rules",
    long_about = "Validate the extracted metadata of an archival description against a\n\
                  declarative rule configuration: required fields, value patterns,\n\
                  controlled vocabularies, cross-field dependencies, and minimum lengths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a document's metadata and report the failing fields.
    Validate(ValidateArgs),

    /// List the field specifications of a rule configuration.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the document metadata file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Path to the rule configuration file.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: PathBuf,

    /// Path to the ruleset file supplying display labels.
    #[arg(long = "ruleset", value_name = "FILE")]
    pub ruleset: Option<PathBuf>,

    /// Write a JSON validation report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Suppress the summary table; rely on the exit code and report file.
    #[arg(long = "quiet")]
    pub quiet: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Path to the rule configuration file.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: PathBuf,
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
