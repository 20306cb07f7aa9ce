//! Result types for page publishing.

use crate::converter::Conversion;
use crate::types::Page;

/// Result of a successful create or update.
#[derive(Debug)]
pub struct PublishResult {
    /// Page as returned by Confluence.
    pub page: Page,
    /// URL to view the page.
    pub url: String,
    /// Conversion that produced the page body.
    ///
    /// `None` for a title-only update, which keeps the stored body.
    pub conversion: Option<Conversion>,
}
