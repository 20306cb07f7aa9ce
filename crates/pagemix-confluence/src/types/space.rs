//! Confluence space types.

use serde::{Deserialize, Serialize};

/// Confluence space.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Space {
    /// Numeric space ID.
    #[serde(default)]
    pub id: Option<u64>,
    /// Space key (e.g. "DOCS").
    pub key: String,
    /// Display name.
    pub name: String,
    /// Space type ("global" or "personal").
    #[serde(rename = "type", default)]
    pub space_type: Option<String>,
    /// Hypermedia links.
    #[serde(rename = "_links", default)]
    pub links: Option<super::Links>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_space() {
        let json = r#"{
            "id": 98306,
            "key": "DOCS",
            "name": "Documentation",
            "type": "global",
            "_links": {"webui": "/spaces/DOCS"}
        }"#;

        let space: Space = serde_json::from_str(json).unwrap();

        assert_eq!(space.id, Some(98306));
        assert_eq!(space.key, "DOCS");
        assert_eq!(space.name, "Documentation");
        assert_eq!(space.space_type.as_deref(), Some("global"));
        assert_eq!(
            space.links.and_then(|l| l.webui).as_deref(),
            Some("/spaces/DOCS")
        );
    }
}
