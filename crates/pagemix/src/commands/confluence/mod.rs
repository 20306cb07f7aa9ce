//! `pagemix confluence` subcommand group.

mod check;
mod create;
mod search;
mod update;

use clap::Subcommand;
use pagemix_config::Config;
use pagemix_confluence::ConfluenceClient;

use check::CheckArgs;
use create::CreateArgs;
use search::SearchArgs;
use update::UpdateArgs;

use crate::error::CliError;
use crate::output::Output;

/// Confluence commands.
#[derive(Subcommand)]
pub(crate) enum ConfluenceCommand {
    /// Create a page from a file.
    Create(CreateArgs),
    /// Replace the body or title of an existing page.
    Update(UpdateArgs),
    /// Search page content.
    Search(SearchArgs),
    /// Check credentials by fetching a space.
    Check(CheckArgs),
}

impl ConfluenceCommand {
    /// Execute the confluence subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Create(args) => args.execute(),
            Self::Update(args) => args.execute(),
            Self::Search(args) => args.execute(),
            Self::Check(args) => args.execute(),
        }
    }
}

/// Create a client from the `[confluence]` section, explaining what to add if it is missing.
fn create_client(config: &Config, output: &Output) -> Result<ConfluenceClient, CliError> {
    if config.confluence.is_none() {
        output.error("Error: confluence configuration required in pagemix.toml");
        output.info("\nAdd the following to your pagemix.toml:");
        output.info("\n[confluence]");
        output.info(r#"base_url = "https://your-site.atlassian.net""#);
        output.info(r#"email = "${ATLASSIAN_EMAIL}""#);
        output.info(r#"api_token = "${ATLASSIAN_API_TOKEN}""#);
    }
    let conf_config = config.require_confluence()?;
    Ok(ConfluenceClient::from_config(conf_config))
}

/// Space key from `--space` or `confluence.space_key`.
fn resolve_space_key(config: &Config) -> Result<String, CliError> {
    config
        .confluence
        .as_ref()
        .and_then(|c| c.space_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            CliError::Validation(
                "space key required (via --space or confluence.space_key)".to_owned(),
            )
        })
}
