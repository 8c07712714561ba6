use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::command_format::{FormatCommandError, run_format};
use crate::command_print::{PrintCommandError, run_print};
use crate::config::load_config_or_default;
use crate::error::CliError;
use crate::logging::init_logging;
use crate::output::IoOptions;

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error("config error: {0}")]
    Config(#[from] CliError),
    #[error(transparent)]
    Format(#[from] FormatCommandError),
    #[error(transparent)]
    Print(#[from] PrintCommandError),
}

pub fn run() -> Result<(), CliAppError> {
    run_with_args(std::env::args().skip(1).collect())
}

pub fn run_with_args(args: Vec<String>) -> Result<(), CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "format" => {
            let options = parse_io_options(args.collect())?;
            let config = load_config_or_default(&options.config_path)?;
            init_logging(&config.log_filter);
            let out_path = run_format(&options, &config)?;
            info!(path = %out_path.display(), "wrote catalog");
            Ok(())
        }
        "print" => {
            let options = parse_io_options(args.collect())?;
            let config = load_config_or_default(&options.config_path)?;
            init_logging(&config.log_filter);
            let out_path = run_print(&options, &config)?;
            info!(path = %out_path.display(), "wrote messages");
            Ok(())
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn parse_io_options(args: Vec<String>) -> Result<IoOptions, CliAppError> {
    let mut input = None;
    let mut out_path = None;
    let mut config_path = PathBuf::from("icu-print.toml");
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--input" => input = Some(PathBuf::from(next_value("--input", &mut iter)?)),
            "--out" => out_path = Some(PathBuf::from(next_value("--out", &mut iter)?)),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let input = input.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(IoOptions {
        input,
        out_path,
        config_path,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: icu-print-cli format --input <extracted.json> [--out <path>] [--config <path>]\n       icu-print-cli print --input <compiled.json> [--out <path>] [--config <path>]".to_string()
}
