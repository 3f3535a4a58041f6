//! CLI argument definitions for the profile edit validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use profile_cli::edits::Edit;

#[derive(Parser)]
#[command(
    name = "profile-edit",
    version,
    about = "Track and validate edits to a user profile",
    long_about = "Apply edits to a profile snapshot, report which fields changed,\n\
                  and validate the result before submission."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include profile values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply edits to a snapshot and validate them.
    Check(CheckArgs),

    /// List field sets, their fields and rules.
    Fields,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Set a field, e.g. `--set firstname=Emma` or `--set age=56`.
    ///
    /// Sets are applied in the order given, before any `--unset`.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = Edit::parse_set)]
    pub set: Vec<Edit>,

    /// Make a field absent.
    #[arg(long = "unset", value_name = "KEY", value_parser = Edit::parse_unset)]
    pub unset: Vec<Edit>,

    /// Result output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
