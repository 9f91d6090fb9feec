//! CLI argument definitions for the emoji data generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use emoji_output::{DEFAULT_CLASS_NAME, DEFAULT_PACKAGE};

#[derive(Parser)]
#[command(
    name = "gen-emoji-data",
    version,
    about = "Generate the emoji picker data tables from the emoji TSV",
    long_about = "Generate the emoji picker data tables from the emoji TSV.\n\n\
                  Reads the tab-separated emoji table, groups entries by picker\n\
                  category and writes a Java class with six parallel tables per\n\
                  category."
)]
pub struct Cli {
    /// Path to the tab-separated emoji table.
    #[arg(long = "emoji-data", alias = "emoji_data", value_name = "PATH")]
    pub emoji_data: PathBuf,

    /// Path of the generated Java source file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Package of the generated class.
    #[arg(long = "package", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Name of the generated class.
    #[arg(long = "class-name", default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Read and transform the table without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

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
