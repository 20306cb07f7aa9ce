//! Confluence REST API client.
//!
//! Provides sync HTTP client for the Confluence Cloud REST API
//! with HTTP Basic authentication (account email and API token).

mod pages;
mod search;
mod spaces;

pub use search::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};

use std::time::Duration;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use pagemix_config::ConfluenceConfig;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::ConfluenceError;
use crate::types::Page;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    /// Site URL without the `/wiki` context path.
    site_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Create client for a Confluence Cloud site.
    ///
    /// `base_url` may include the `/wiki` context path or not.
    #[must_use]
    pub fn new(base_url: &str, email: &str, api_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let trimmed = base_url.trim_end_matches('/');
        let site_url = trimmed.strip_suffix("/wiki").unwrap_or(trimmed).to_owned();

        Self {
            agent,
            site_url,
            auth_header: basic_auth(email, api_token),
        }
    }

    /// Create client from the `[confluence]` config section.
    #[must_use]
    pub fn from_config(config: &ConfluenceConfig) -> Self {
        Self::new(&config.base_url, &config.email, &config.api_token)
    }

    /// Web URL for a page returned by the API.
    ///
    /// Falls back to the `viewpage.action` URL when the response carried no links.
    #[must_use]
    pub fn page_url(&self, page: &Page) -> String {
        let links = page.links.as_ref();
        self.content_url(
            links.and_then(|l| l.base.as_deref()),
            links.and_then(|l| l.webui.as_deref()),
            &page.id,
        )
    }

    /// Join a `webui` path onto `base` (or the site's wiki URL).
    fn content_url(&self, base: Option<&str>, webui: Option<&str>, content_id: &str) -> String {
        match (webui, base) {
            (Some(webui), Some(base)) => format!("{base}{webui}"),
            (Some(webui), None) => format!("{}{webui}", self.wiki_url()),
            (None, _) => format!(
                "{}/pages/viewpage.action?pageId={content_id}",
                self.wiki_url()
            ),
        }
    }

    fn wiki_url(&self) -> String {
        format!("{}/wiki", self.site_url)
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/rest/api", self.wiki_url())
    }
}

/// `Authorization` header value for HTTP Basic auth.
fn basic_auth(email: &str, api_token: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{email}:{api_token}"))
    )
}

/// Decode a JSON response, turning error statuses into [`ConfluenceError::HttpResponse`].
fn read_json<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, ConfluenceError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(ConfluenceError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body_reader.read_json()?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{Links, Version};

    fn page(links: Option<Links>) -> Page {
        Page {
            id: "42".to_owned(),
            content_type: "page".to_owned(),
            title: "Title".to_owned(),
            version: Version {
                number: 1,
                message: None,
            },
            space: None,
            body: None,
            links,
        }
    }

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(basic_auth("user", "pass"), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_api_url_normalizes_base() {
        for base in [
            "https://acme.atlassian.net",
            "https://acme.atlassian.net/",
            "https://acme.atlassian.net/wiki",
            "https://acme.atlassian.net/wiki/",
        ] {
            let client = ConfluenceClient::new(base, "bot@acme.com", "token");
            assert_eq!(client.api_url(), "https://acme.atlassian.net/wiki/rest/api");
        }
    }

    #[test]
    fn test_page_url_uses_links_base() {
        let client = ConfluenceClient::new("https://acme.atlassian.net", "e", "t");
        let page = page(Some(Links {
            webui: Some("/spaces/ENG/pages/42/Title".to_owned()),
            base: Some("https://acme.atlassian.net/wiki".to_owned()),
            self_link: None,
        }));

        assert_eq!(
            client.page_url(&page),
            "https://acme.atlassian.net/wiki/spaces/ENG/pages/42/Title"
        );
    }

    #[test]
    fn test_page_url_without_base_link() {
        let client = ConfluenceClient::new("https://acme.atlassian.net", "e", "t");
        let page = page(Some(Links {
            webui: Some("/spaces/ENG/pages/42/Title".to_owned()),
            base: None,
            self_link: None,
        }));

        assert_eq!(
            client.page_url(&page),
            "https://acme.atlassian.net/wiki/spaces/ENG/pages/42/Title"
        );
    }

    #[test]
    fn test_page_url_fallback() {
        let client = ConfluenceClient::new("https://acme.atlassian.net/wiki", "e", "t");
        assert_eq!(
            client.page_url(&page(None)),
            "https://acme.atlassian.net/wiki/pages/viewpage.action?pageId=42"
        );
    }
}
