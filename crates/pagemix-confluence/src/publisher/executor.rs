//! Page publisher implementation.

use tracing::{info, warn};

use crate::client::ConfluenceClient;
use crate::converter::{Conversion, MixedContentConverter};
use crate::types::NewPage;

use super::error::PublishError;
use super::result::PublishResult;

/// Longest page title Confluence accepts.
const MAX_TITLE_CHARS: usize = 255;

/// Creates and updates Confluence pages from mixed content.
pub struct PagePublisher<'a> {
    client: &'a ConfluenceClient,
    converter: MixedContentConverter,
}

impl<'a> PagePublisher<'a> {
    /// Create a new page publisher.
    #[must_use]
    pub fn new(client: &'a ConfluenceClient, converter: MixedContentConverter) -> Self {
        Self { client, converter }
    }

    /// Create a page from mixed content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the title or content is empty, or the title is too long
    /// - the Confluence API call fails
    pub fn create(
        &self,
        title: &str,
        content: &str,
        space_key: &str,
        parent_id: Option<&str>,
    ) -> Result<PublishResult, PublishError> {
        validate_title(title)?;
        require_content(content)?;
        if space_key.trim().is_empty() {
            return Err(PublishError::Invalid("space key cannot be empty".to_owned()));
        }

        let conversion = self.convert(content);
        let page = self.client.create_page(&NewPage {
            title: title.to_owned(),
            space_key: space_key.to_owned(),
            parent_id: parent_id.map(str::to_owned),
            body: conversion.body.clone(),
        })?;
        let url = self.client.page_url(&page);

        Ok(PublishResult {
            page,
            url,
            conversion: Some(conversion),
        })
    }

    /// Update an existing page.
    ///
    /// With `content`, the body is replaced by its conversion. Without it, the
    /// current storage body is sent back unchanged, which renames the page.
    /// Keeps the current title unless `title` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - neither content nor title is given
    /// - the content is empty, or the new title is invalid
    /// - Confluence API calls fail
    pub fn update(
        &self,
        page_id: &str,
        content: Option<&str>,
        title: Option<&str>,
        message: Option<&str>,
    ) -> Result<PublishResult, PublishError> {
        if content.is_none() && title.is_none() {
            return Err(PublishError::Invalid(
                "nothing to update: give new content or a new title".to_owned(),
            ));
        }
        if let Some(title) = title {
            validate_title(title)?;
        }
        if let Some(content) = content {
            require_content(content)?;
        }

        let conversion = content.map(|content| self.convert(content));

        // Fetch current page for version and title, and body when it is kept
        let expand: &[&str] = if conversion.is_some() {
            &["version"]
        } else {
            &["version", "body.storage"]
        };
        let current_page = self.client.get_page(page_id, expand)?;
        let title = title.unwrap_or(&current_page.title);
        let body = conversion
            .as_ref()
            .map_or_else(|| current_page.storage_value(), |c| c.body.as_str());

        let page = self.client.update_page(
            page_id,
            title,
            body,
            current_page.version.number,
            message,
        )?;
        let url = self.client.page_url(&page);

        Ok(PublishResult {
            page,
            url,
            conversion,
        })
    }

    /// Convert content without contacting Confluence.
    #[must_use]
    pub fn dry_run(&self, content: &str) -> Conversion {
        self.convert(content)
    }

    fn convert(&self, content: &str) -> Conversion {
        let conversion = self.converter.convert(content);
        for warning in &conversion.warnings {
            warn!("{warning}");
        }
        info!(
            diagrams = conversion.diagram_count,
            sections = conversion.text_count,
            "Converted content"
        );
        conversion
    }
}

fn validate_title(title: &str) -> Result<(), PublishError> {
    if title.trim().is_empty() {
        return Err(PublishError::Invalid("page title cannot be empty".to_owned()));
    }
    let length = title.chars().count();
    if length > MAX_TITLE_CHARS {
        return Err(PublishError::Invalid(format!(
            "page title is {length} characters, the limit is {MAX_TITLE_CHARS}"
        )));
    }
    Ok(())
}

fn require_content(content: &str) -> Result<(), PublishError> {
    if content.trim().is_empty() {
        return Err(PublishError::Invalid("page content cannot be empty".to_owned()));
    }
    Ok(())
}
