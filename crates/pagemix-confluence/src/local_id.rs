//! Local identifiers for extension nodes.
//!
//! Confluence requires every extension node on a page to carry a `local-id`.
//! Identifiers only need to be unique within one assembled document.

/// Source of `local-id` values.
pub trait LocalIdGenerator {
    /// Return the next identifier.
    fn next_id(&mut self) -> String;
}

/// Counter-based identifiers: `plantuml-1`, `plantuml-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl LocalIdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random identifiers: `plantuml-<uuid v4>`.
///
/// Useful when the same page is assembled from several conversions and
/// counters would collide.
#[derive(Debug, Clone)]
pub struct RandomIds {
    prefix: String,
}

impl RandomIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl LocalIdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        format!("{}-{}", self.prefix, uuid::Uuid::new_v4().simple())
    }
}

/// Prefix used by the default generators.
pub const DEFAULT_PREFIX: &str = "plantuml";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "plantuml-1");
        assert_eq!(ids.next_id(), "plantuml-2");
        assert_eq!(ids.next_id(), "plantuml-3");
    }

    #[test]
    fn test_sequential_custom_prefix() {
        let mut ids = SequentialIds::new("diagram");
        assert_eq!(ids.next_id(), "diagram-1");
    }

    #[test]
    fn test_random_ids_unique() {
        let mut ids = RandomIds::default();
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.starts_with("plantuml-")));
    }

    #[test]
    fn test_random_id_shape() {
        let id = RandomIds::new("x").next_id();
        let suffix = id.strip_prefix("x-").unwrap();
        assert_eq!(suffix.len(), 32);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
