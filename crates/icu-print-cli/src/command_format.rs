use std::fs;
use std::path::PathBuf;

use icu_print_catalog::{AlreadyHoisted, CatalogError, NoTextParser, format_catalog, read_extracted};
use thiserror::Error;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{IoOptions, resolve_out_path, write_json};

#[derive(Debug, Error)]
pub enum FormatCommandError {
    #[error("output error: {0}")]
    Output(#[from] CliError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Formats an extracted message file (`formatjs extract --ast`) into a
/// catalog of `{message, description}` entries.
///
/// Trees are printed as extracted, without selector hoisting. Text around a
/// plural or select stays outside the block (`I have \n  {count, plural, ...}`)
/// instead of being moved into each option.
pub fn run_format(options: &IoOptions, config: &CliConfig) -> Result<PathBuf, FormatCommandError> {
    let input = fs::read_to_string(&options.input)?;
    let messages = read_extracted(&input)?;
    info!(input = %options.input.display(), messages = messages.len(), "read extracted messages");
    let catalog = format_catalog(&messages, &NoTextParser, &AlreadyHoisted)?;
    let out_path = resolve_out_path(options, config);
    write_json(&out_path, &catalog, config.pretty)?;
    Ok(out_path)
}
