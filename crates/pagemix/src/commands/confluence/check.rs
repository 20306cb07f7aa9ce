//! `pagemix confluence check` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagemix_config::{CliSettings, Config};

use super::{create_client, resolve_space_key};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the confluence check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Space key to look up (overrides config).
    #[arg(short, long)]
    space: Option<String>,

    /// Path to configuration file (default: auto-discover pagemix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            space_key: self.space.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let client = create_client(&config, &output)?;
        let space_key = resolve_space_key(&config)?;

        let space = client.get_space(&space_key)?;

        output.success("Confluence connection OK");
        output.field("Space", format!("{} ({})", space.name, space.key));
        if let Some(space_type) = &space.space_type {
            output.field("Type", space_type);
        }

        Ok(())
    }
}
