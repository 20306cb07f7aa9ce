//! `pagemix confluence update` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagemix_config::Config;
use pagemix_confluence::{PagePublisher, PublishResult};

use super::create_client;
use crate::commands::{build_converter, read_source};
use crate::error::CliError;
use crate::output::{Output, write_body};

/// Arguments for the confluence update command.
#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Confluence page ID to update.
    page_id: String,

    /// Path to the source file (default: keep the current body).
    #[arg(required_unless_present = "title")]
    file: Option<PathBuf>,

    /// New page title (default: keep the current title).
    #[arg(short, long)]
    title: Option<String>,

    /// Version message for the update.
    #[arg(short, long)]
    message: Option<String>,

    /// Preview changes without updating Confluence.
    #[arg(long)]
    dry_run: bool,

    /// Path to configuration file (default: auto-discover pagemix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl UpdateArgs {
    /// Execute the update command.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let client = create_client(&config, &output)?;

        let content = match &self.file {
            Some(file) => {
                output.info(&format!("Converting {}...", file.display()));
                Some(read_source(file)?)
            }
            None => None,
        };

        let publisher = PagePublisher::new(&client, build_converter(&config)?);

        if self.dry_run {
            let current_page = client.get_page(&self.page_id, &["version"])?;

            output.highlight("\n[DRY RUN] No changes made.");
            output.field(
                "Current page",
                format!(
                    "\"{}\" (v{})",
                    current_page.title, current_page.version.number
                ),
            );
            if let Some(title) = &self.title {
                output.field("New title", title);
            }
            match &content {
                Some(content) => {
                    let conversion = publisher.dry_run(content);
                    output.info(&conversion.summary());
                    output.warnings(&conversion.warnings);
                    write_body(&conversion.body)?;
                }
                None => output.info("Body unchanged"),
            }
        } else {
            let result = publisher.update(
                &self.page_id,
                content.as_deref(),
                self.title.as_deref(),
                self.message.as_deref(),
            )?;
            print_update_result(&output, &result);
        }

        Ok(())
    }
}

fn print_update_result(output: &Output, result: &PublishResult) {
    output.success("\nPage updated successfully!");
    output.field("ID", &result.page.id);
    output.field("Title", &result.page.title);
    output.field("Version", result.page.version.number);
    output.field("URL", &result.url);
    match &result.conversion {
        Some(conversion) => {
            output.info(&conversion.summary());
            output.warnings(&conversion.warnings);
        }
        None => output.info("Body unchanged"),
    }
}
