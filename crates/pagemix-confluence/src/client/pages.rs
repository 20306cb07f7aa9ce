//! Page operations for Confluence API.

use serde_json::{Value, json};
use tracing::info;

use super::{ConfluenceClient, read_json};
use crate::error::ConfluenceError;
use crate::types::{NewPage, Page};

impl ConfluenceClient {
    /// Get page by ID with optional field expansion.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError`] if the request fails or the page does not exist.
    pub fn get_page(&self, page_id: &str, expand: &[&str]) -> Result<Page, ConfluenceError> {
        let mut url = format!("{}/content/{}", self.api_url(), page_id);

        if !expand.is_empty() {
            url.push_str("?expand=");
            url.push_str(&expand.join(","));
        }

        info!("Getting page {}", page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        read_json(response)
    }

    /// Create a page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError`] if the request fails or Confluence rejects the page.
    pub fn create_page(&self, page: &NewPage) -> Result<Page, ConfluenceError> {
        let url = format!("{}/content", self.api_url());
        let payload_bytes = serde_json::to_vec(&create_payload(page))?;

        info!("Creating page '{}' in space {}", page.title, page.space_key);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let created: Page = read_json(response)?;
        info!("Created page {}", created.id);
        Ok(created)
    }

    /// Update existing page (auto-increments version).
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError`] if the request fails, e.g. on a version conflict.
    pub fn update_page(
        &self,
        page_id: &str,
        title: &str,
        body: &str,
        version: u32,
        message: Option<&str>,
    ) -> Result<Page, ConfluenceError> {
        let url = format!("{}/content/{}", self.api_url(), page_id);
        let payload_bytes = serde_json::to_vec(&update_payload(title, body, version, message))?;

        info!(
            "Updating page {} from version {} to {}",
            page_id,
            version,
            version + 1
        );

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let page: Page = read_json(response)?;
        info!(
            "Updated page {} to version {}",
            page_id, page.version.number
        );
        Ok(page)
    }
}

/// Request body for `POST /content`.
pub(crate) fn create_payload(page: &NewPage) -> Value {
    let mut payload = json!({
        "type": "page",
        "title": page.title,
        "space": {"key": page.space_key},
        "body": {
            "storage": {
                "value": page.body,
                "representation": "storage"
            }
        }
    });

    if let Some(parent_id) = &page.parent_id {
        payload["ancestors"] = json!([{"id": parent_id}]);
    }

    payload
}

/// Request body for `PUT /content/{id}`.
///
/// `version` is the current version; the payload carries `version + 1`.
pub(crate) fn update_payload(title: &str, body: &str, version: u32, message: Option<&str>) -> Value {
    let mut payload = json!({
        "type": "page",
        "title": title,
        "body": {
            "storage": {
                "value": body,
                "representation": "storage"
            }
        },
        "version": {"number": version + 1}
    });

    if let Some(msg) = message {
        payload["version"]["message"] = json!(msg);
    }

    payload
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_page(parent_id: Option<&str>) -> NewPage {
        NewPage {
            title: "Architecture".to_owned(),
            space_key: "ENG".to_owned(),
            parent_id: parent_id.map(str::to_owned),
            body: "<p>body</p>".to_owned(),
        }
    }

    #[test]
    fn test_create_payload() {
        assert_eq!(
            create_payload(&new_page(None)),
            json!({
                "type": "page",
                "title": "Architecture",
                "space": {"key": "ENG"},
                "body": {"storage": {"value": "<p>body</p>", "representation": "storage"}}
            })
        );
    }

    #[test]
    fn test_create_payload_with_parent() {
        let payload = create_payload(&new_page(Some("99")));
        assert_eq!(payload["ancestors"], json!([{"id": "99"}]));
    }

    #[test]
    fn test_update_payload_bumps_version() {
        assert_eq!(
            update_payload("Title", "<p>x</p>", 4, None),
            json!({
                "type": "page",
                "title": "Title",
                "body": {"storage": {"value": "<p>x</p>", "representation": "storage"}},
                "version": {"number": 5}
            })
        );
    }

    #[test]
    fn test_update_payload_with_message() {
        let payload = update_payload("Title", "", 1, Some("Sync from repo"));
        assert_eq!(
            payload["version"],
            json!({"number": 2, "message": "Sync from repo"})
        );
    }
}
