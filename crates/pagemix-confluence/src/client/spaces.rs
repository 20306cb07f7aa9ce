//! Space operations for Confluence API.

use tracing::info;

use super::{ConfluenceClient, read_json};
use crate::error::ConfluenceError;
use crate::types::Space;

impl ConfluenceClient {
    /// Get space by key.
    ///
    /// Doubles as a connectivity and credentials check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError`] if the request fails or the space is not visible.
    pub fn get_space(&self, space_key: &str) -> Result<Space, ConfluenceError> {
        let url = format!("{}/space/{}", self.api_url(), space_key);

        info!("Getting space {}", space_key);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        let space: Space = read_json(response)?;
        info!("Found space {} ({})", space.key, space.name);
        Ok(space)
    }
}
