//! CLI argument definitions for the source map inspector.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "smap",
    version,
    about = "Inspect the mappings field of a source map",
    long_about = "Decode the Base64 VLQ mappings of a source map into generated and\n\
                  original positions, and check that every segment is canonically encoded."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a complete mappings string into a table of positions.
    Mappings(MappingsArgs),

    /// Decode a single segment and check its encoding.
    Decode(DecodeArgs),

    /// Encode integers as a single segment.
    Encode(EncodeArgs),
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Mappings string (read from --file or stdin when omitted).
    #[arg(value_name = "MAPPINGS", conflicts_with = "file")]
    pub mappings: Option<String>,

    /// Read the mappings string from a file.
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show decoded deltas instead of absolute positions.
    #[arg(long = "delta")]
    pub delta: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub offsets: OffsetArgs,
}

/// Start values added to absolute positions (e.g. 1 for one-based lines).
#[derive(Args, Clone, Copy)]
pub struct OffsetArgs {
    /// Start value for generated lines.
    #[arg(
        long = "generated-line-start",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub generated_line: i64,

    /// Start value for generated columns.
    #[arg(
        long = "generated-column-start",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub generated_column: i64,

    /// Start value for original lines.
    #[arg(
        long = "original-line-start",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub original_line: i64,

    /// Start value for original columns.
    #[arg(
        long = "original-column-start",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub original_column: i64,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// A single VLQ segment, e.g. `CAACA`.
    #[arg(value_name = "SEGMENT")]
    pub segment: String,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Values to encode, e.g. `1 0 -1 4`.
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<i32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
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
