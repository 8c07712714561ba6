use std::fs;
use std::path::PathBuf;

use icu_print_catalog::{CatalogError, print_compiled, read_compiled};
use thiserror::Error;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{IoOptions, resolve_out_path, write_json};

#[derive(Debug, Error)]
pub enum PrintCommandError {
    #[error("output error: {0}")]
    Output(#[from] CliError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prints compiled syntax trees (`formatjs compile --ast`) back to message text.
pub fn run_print(options: &IoOptions, config: &CliConfig) -> Result<PathBuf, PrintCommandError> {
    let input = fs::read_to_string(&options.input)?;
    let compiled = read_compiled(&input)?;
    info!(input = %options.input.display(), messages = compiled.len(), "read compiled messages");
    let printed = print_compiled(&compiled)?;
    let out_path = resolve_out_path(options, config);
    write_json(&out_path, &printed, config.pretty)?;
    Ok(out_path)
}
