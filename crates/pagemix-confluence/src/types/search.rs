//! Content search types.

use serde::Deserialize;

use super::{Links, Space};

/// Response of the CQL search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Hits on this result page.
    #[serde(default)]
    pub results: Vec<SearchHit>,
    /// Number of hits in `results`.
    #[serde(default)]
    pub size: usize,
    /// Total number of matches, when reported.
    #[serde(rename = "totalSize", default)]
    pub total_size: Option<usize>,
    /// Carries `base`, the site URL including the context path.
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

/// One search hit.
///
/// Hits on spaces or users carry no `content`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub content: Option<SearchContent>,
    /// Text around the match.
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Content summary inside a search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchContent {
    pub id: String,
    /// "page", "blogpost", "attachment", ...
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    /// Present with `content.space` expanded.
    #[serde(default)]
    pub space: Option<Space>,
    /// Present with `content.version` expanded.
    #[serde(default)]
    pub version: Option<ContentVersion>,
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

/// Version details of a search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentVersion {
    pub number: u32,
    /// Timestamp of the last edit (ISO 8601).
    #[serde(default)]
    pub when: Option<String>,
}

/// Search hit flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Content ID.
    pub id: String,
    pub title: String,
    /// Space display name.
    pub space: Option<String>,
    /// URL to view the content.
    pub url: String,
    pub excerpt: Option<String>,
    /// Timestamp of the last edit.
    pub last_modified: Option<String>,
}
