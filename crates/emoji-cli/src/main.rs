//! Emoji picker data table generator.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use emoji_cli::logging::{LogConfig, LogFormat, init_logging};
use emoji_cli::pipeline::{exit_status, run};
use emoji_cli::types::GenerationOptions;
use emoji_output::JavaOutputOptions;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    let result = run(&generation_options(&cli));
    match &result {
        Ok(summary) => print_summary(summary),
        Err(err) => eprintln!("error: {err:#}"),
    }
    ExitCode::from(exit_status(&result))
}

fn generation_options(cli: &Cli) -> GenerationOptions {
    let java = JavaOutputOptions::default()
        .with_package(cli.package.clone())
        .with_class_name(cli.class_name.clone());
    GenerationOptions::new(cli.emoji_data.clone(), cli.output.clone())
        .with_java(java)
        .with_dry_run(cli.dry_run)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
