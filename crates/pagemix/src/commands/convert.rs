//! `pagemix convert` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagemix_config::{CliSettings, Config};

use super::{build_converter, read_source};
use crate::error::CliError;
use crate::output::{Output, write_body};

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the source file (markdown with embedded diagrams).
    file: PathBuf,

    /// Write the storage body to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fence language tag for diagram blocks (overrides config).
    #[arg(long)]
    language: Option<String>,

    /// Markdown macro name (overrides config).
    #[arg(long)]
    macro_name: Option<String>,

    /// Path to configuration file (default: auto-discover pagemix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            language: self.language.clone(),
            macro_name: self.macro_name.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let converter = build_converter(&config)?;

        let content = read_source(&self.file)?;
        let conversion = converter.convert(&content);

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", conversion.body))?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => write_body(&conversion.body)?,
        }

        output.info(&conversion.summary());
        output.warnings(&conversion.warnings);

        Ok(())
    }
}
