//! `pagemix confluence create` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagemix_config::{CliSettings, Config};
use pagemix_confluence::{Conversion, PagePublisher, PublishResult};

use super::{create_client, resolve_space_key};
use crate::commands::{build_converter, read_source};
use crate::error::CliError;
use crate::output::{Output, write_body};

/// Arguments for the confluence create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Path to the source file (markdown with embedded diagrams).
    file: PathBuf,

    /// Page title.
    #[arg(short, long)]
    title: String,

    /// Space key (overrides config).
    #[arg(short, long)]
    space: Option<String>,

    /// Parent page ID.
    #[arg(short, long)]
    parent: Option<String>,

    /// Print the storage body without creating the page.
    #[arg(long)]
    dry_run: bool,

    /// Path to configuration file (default: auto-discover pagemix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CreateArgs {
    /// Execute the create command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete or the page cannot be created.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            space_key: self.space.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let client = create_client(&config, &output)?;
        let space_key = resolve_space_key(&config)?;

        let content = read_source(&self.file)?;
        output.info(&format!("Converting {}...", self.file.display()));

        let publisher = PagePublisher::new(&client, build_converter(&config)?);

        if self.dry_run {
            let conversion = publisher.dry_run(&content);
            print_dry_run(&output, &self.title, &space_key, &conversion)?;
        } else {
            let result = publisher.create(
                &self.title,
                &content,
                &space_key,
                self.parent.as_deref(),
            )?;
            print_create_result(&output, &result);
        }

        Ok(())
    }
}

fn print_dry_run(
    output: &Output,
    title: &str,
    space_key: &str,
    conversion: &Conversion,
) -> Result<(), CliError> {
    output.highlight("\n[DRY RUN] No changes made.");
    output.field("Title", title);
    output.field("Space", space_key);
    output.info(&conversion.summary());
    output.warnings(&conversion.warnings);
    write_body(&conversion.body)?;
    Ok(())
}

fn print_create_result(output: &Output, result: &PublishResult) {
    output.success("\nPage created successfully!");
    output.field("ID", &result.page.id);
    output.field("Title", &result.page.title);
    output.field("URL", &result.url);
    if let Some(conversion) = &result.conversion {
        output.info(&conversion.summary());
        output.warnings(&conversion.warnings);
    }
}
