//! Confluence page types.

use serde::{Deserialize, Serialize};

use super::Space;

/// Confluence page as returned by the content API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Content type (always "page").
    #[serde(rename = "type")]
    pub content_type: String,
    /// Page title.
    pub title: String,
    /// Version information.
    pub version: Version,
    /// Owning space (when expanded).
    #[serde(default)]
    pub space: Option<Space>,
    /// Page body content (when expanded).
    #[serde(default)]
    pub body: Option<Body>,
    /// Hypermedia links.
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

impl Page {
    /// Storage-format body, or `""` if the body was not expanded.
    #[must_use]
    pub fn storage_value(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|b| b.storage.as_ref())
            .map_or("", |s| s.value.as_str())
    }
}

/// Page version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Version {
    /// Version number.
    pub number: u32,
    /// Version message/comment.
    #[serde(default)]
    pub message: Option<String>,
}

/// Page body content.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Body {
    /// Storage format content.
    #[serde(default)]
    pub storage: Option<Storage>,
}

/// Storage format representation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Storage {
    /// XHTML content in Confluence storage format.
    pub value: String,
    /// Content representation (always "storage").
    pub representation: String,
}

/// Hypermedia links.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Links {
    /// Web UI path, relative to `base`.
    #[serde(default)]
    pub webui: Option<String>,
    /// Site base URL including the context path (e.g. `https://acme.atlassian.net/wiki`).
    #[serde(default)]
    pub base: Option<String>,
    /// API self link.
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

/// Page to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPage {
    /// Page title.
    pub title: String,
    /// Key of the space the page is created in.
    pub space_key: String,
    /// Parent page, or `None` for a top-level page.
    pub parent_id: Option<String>,
    /// Storage-format body.
    pub body: String,
}
