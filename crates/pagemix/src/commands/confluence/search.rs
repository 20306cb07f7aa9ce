//! `pagemix confluence search` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagemix_config::Config;
use pagemix_confluence::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, types::SearchResult};

use super::create_client;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the confluence search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Text to search for.
    query: String,

    /// Restrict results to this space (default: all spaces).
    #[arg(short, long)]
    space: Option<String>,

    /// Maximum number of results.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SEARCH_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SEARCH_LIMIT)),
    )]
    limit: u32,

    /// Path to configuration file (default: auto-discover pagemix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SearchArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.query.trim().is_empty() {
            return Err(CliError::Validation("search query cannot be empty".to_owned()));
        }

        let config = Config::load(self.config.as_deref(), None)?;
        let client = create_client(&config, &output)?;

        let results = client.search_pages(&self.query, self.space.as_deref(), self.limit)?;

        if results.is_empty() {
            output.info(&format!("No results for \"{}\"", self.query));
            return Ok(());
        }

        output.success(&format!("Found {} results", results.len()));
        for result in &results {
            print_result(&output, result);
        }

        Ok(())
    }
}

fn print_result(output: &Output, result: &SearchResult) {
    output.highlight(&format!("\n{}", result.title));
    output.field("ID", &result.id);
    if let Some(space) = &result.space {
        output.field("Space", space);
    }
    if let Some(last_modified) = &result.last_modified {
        output.field("Modified", last_modified);
    }
    output.field("URL", &result.url);
    if let Some(excerpt) = &result.excerpt {
        output.info(excerpt);
    }
}
