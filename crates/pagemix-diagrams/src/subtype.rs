//! Diagram subtype keywords.
//!
//! A subtype is the suffix in `@start<subtype>` / `@end<subtype>` markers
//! (`uml`, `mindmap`, `gantt`, ...). The set is plain data so deployments can
//! extend it from configuration.

use crate::consts::DEFAULT_SUBTYPES;
use crate::error::ScanError;

/// Ordered, deduplicated set of lowercase subtype keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtypeSet {
    keywords: Vec<String>,
}

impl SubtypeSet {
    /// Build a set from keywords.
    ///
    /// Keywords are trimmed and lowercased. Duplicates keep their first position.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidSubtype`] for keywords that are empty or contain
    /// anything but ASCII letters and digits, and [`ScanError::NoSubtypes`] when
    /// the input is empty.
    pub fn new<I, S>(keywords: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for keyword in keywords {
            let raw = keyword.as_ref();
            let normalized = raw.trim().to_ascii_lowercase();
            if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ScanError::InvalidSubtype(raw.to_owned()));
            }
            if !set.contains(&normalized) {
                set.push(normalized);
            }
        }

        if set.is_empty() {
            return Err(ScanError::NoSubtypes);
        }

        Ok(Self { keywords: set })
    }

    /// Keywords in insertion order.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(keyword))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Never true for a set built with [`new`](Self::new) or [`Default`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for SubtypeSet {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_SUBTYPES.iter().map(|&k| k.to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_plantuml_family() {
        let set = SubtypeSet::default();
        for keyword in ["uml", "mindmap", "gantt", "wbs", "seqdiag", "json"] {
            assert!(set.contains(keyword), "missing {keyword}");
        }
        assert_eq!(set.len(), DEFAULT_SUBTYPES.len());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = SubtypeSet::default();
        assert!(set.contains("UML"));
        assert!(set.contains("MindMap"));
        assert!(!set.contains("markdown"));
    }

    #[test]
    fn test_new_normalizes_and_dedups() {
        let set = SubtypeSet::new(["UML", " gantt ", "uml", "Chen"]).unwrap();
        assert_eq!(set.keywords(), ["uml", "gantt", "chen"]);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_keyword() {
        let err = SubtypeSet::new(["uml", "foo|bar"]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidSubtype(ref k) if k == "foo|bar"));

        let err = SubtypeSet::new(["  "]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidSubtype(_)));
    }

    #[test]
    fn test_new_rejects_empty_input() {
        let err = SubtypeSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ScanError::NoSubtypes));
    }
}
