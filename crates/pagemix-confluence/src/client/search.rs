//! Content search for Confluence API.

use tracing::info;

use super::{ConfluenceClient, read_json};
use crate::error::ConfluenceError;
use crate::types::{SearchResponse, SearchResult};

/// Hits returned when the caller has no preference.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Largest page of hits the client asks for.
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Expansions needed to fill [`SearchResult`].
const SEARCH_EXPAND: &str = "content.space,content.version";

impl ConfluenceClient {
    /// Full-text search, optionally restricted to one space.
    ///
    /// `limit` is clamped to `1..=MAX_SEARCH_LIMIT`. Hits without content
    /// (spaces, users) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError`] if the request fails or the query is rejected.
    pub fn search_pages(
        &self,
        query: &str,
        space_key: Option<&str>,
        limit: u32,
    ) -> Result<Vec<SearchResult>, ConfluenceError> {
        let url = format!("{}/search", self.api_url());
        let cql = build_cql(query, space_key);
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT);

        info!("Searching: {}", cql);

        let response = self
            .agent
            .get(&url)
            .query("cql", &cql)
            .query("limit", limit.to_string())
            .query("expand", SEARCH_EXPAND)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        let response: SearchResponse = read_json(response)?;
        let results = self.search_results(response);
        info!("Found {} results", results.len());
        Ok(results)
    }

    fn search_results(&self, response: SearchResponse) -> Vec<SearchResult> {
        let base = response.links.and_then(|l| l.base);

        response
            .results
            .into_iter()
            .filter_map(|hit| {
                let content = hit.content?;
                let url = self.content_url(
                    base.as_deref(),
                    content.links.as_ref().and_then(|l| l.webui.as_deref()),
                    &content.id,
                );
                Some(SearchResult {
                    id: content.id,
                    title: content.title,
                    space: content.space.map(|s| s.name),
                    url,
                    excerpt: hit.excerpt.filter(|e| !e.is_empty()),
                    last_modified: content.version.and_then(|v| v.when),
                })
            })
            .collect()
    }
}

/// CQL full-text query: `text ~ "<query>"`, plus `AND space = "<key>"`.
pub(crate) fn build_cql(query: &str, space_key: Option<&str>) -> String {
    let mut cql = format!("text ~ \"{}\"", cql_escape(query));
    if let Some(key) = space_key.map(str::trim).filter(|k| !k.is_empty()) {
        cql.push_str(&format!(" AND space = \"{}\"", cql_escape(key)));
    }
    cql
}

/// Backslash-escape characters that end a CQL string literal.
fn cql_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build_cql() {
        assert_eq!(build_cql("sequence diagram", None), r#"text ~ "sequence diagram""#);
        assert_eq!(
            build_cql("gantt", Some("ENG")),
            r#"text ~ "gantt" AND space = "ENG""#
        );
    }

    #[test]
    fn test_build_cql_blank_space_ignored() {
        assert_eq!(build_cql("gantt", Some("  ")), r#"text ~ "gantt""#);
    }

    #[test]
    fn test_build_cql_escapes_quotes() {
        assert_eq!(
            build_cql(r#"say "hi" \o/"#, Some(r#"EN"G"#)),
            r#"text ~ "say \"hi\" \\o/" AND space = "EN\"G""#
        );
    }

    #[test]
    fn test_search_results_flattens_hits() {
        let client = ConfluenceClient::new("https://acme.atlassian.net", "e", "t");
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "results": [
                    {
                        "content": {
                            "id": "7",
                            "type": "page",
                            "title": "Runbook",
                            "space": {"key": "OPS", "name": "Operations"},
                            "version": {"number": 3, "when": "2026-05-04T08:00:00.000Z"},
                            "_links": {"webui": "/spaces/OPS/pages/7/Runbook"}
                        },
                        "excerpt": "restart the service"
                    },
                    {"title": "Operations", "excerpt": "space"},
                    {
                        "content": {"id": "8", "type": "page", "title": "Bare"},
                        "excerpt": ""
                    }
                ],
                "size": 3,
                "_links": {"base": "https://acme.atlassian.net/wiki"}
            }"#,
        )
        .unwrap();

        let results = client.search_results(response);

        assert_eq!(
            results,
            vec![
                SearchResult {
                    id: "7".to_owned(),
                    title: "Runbook".to_owned(),
                    space: Some("Operations".to_owned()),
                    url: "https://acme.atlassian.net/wiki/spaces/OPS/pages/7/Runbook".to_owned(),
                    excerpt: Some("restart the service".to_owned()),
                    last_modified: Some("2026-05-04T08:00:00.000Z".to_owned()),
                },
                SearchResult {
                    id: "8".to_owned(),
                    title: "Bare".to_owned(),
                    space: None,
                    url: "https://acme.atlassian.net/wiki/pages/viewpage.action?pageId=8"
                        .to_owned(),
                    excerpt: None,
                    last_modified: None,
                },
            ]
        );
    }
}
