//! CLI command implementations.

pub(crate) mod confluence;
pub(crate) mod convert;

use std::path::Path;

use pagemix_config::Config;
use pagemix_confluence::{ConverterConfig, MixedContentConverter};

use crate::error::CliError;

pub(crate) use confluence::ConfluenceCommand;
pub(crate) use convert::ConvertArgs;

/// Build a converter from the loaded configuration.
pub(crate) fn build_converter(config: &Config) -> Result<MixedContentConverter, CliError> {
    let converter_config = ConverterConfig::from_config(config)?;
    Ok(MixedContentConverter::new(converter_config)?)
}

/// Read a source file, rejecting blank content.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(CliError::Validation(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(content)
}
