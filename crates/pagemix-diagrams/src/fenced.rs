//! Fenced diagram extraction.
//!
//! Finds code fences tagged with the diagram language:
//!
//! ````text
//! ```plantuml
//! @startuml
//! A -> B
//! @enduml
//! ```
//! ````

use regex::Regex;

use crate::block::{DiagramBlock, Origin};
use crate::error::ScanError;

/// Extracts diagrams from fenced code blocks of one language.
#[derive(Debug, Clone)]
pub struct FencedExtractor {
    pattern: Regex,
}

impl FencedExtractor {
    /// Compile an extractor for the given fence language tag.
    ///
    /// The tag is matched case-insensitively and literally (regex metacharacters
    /// in the tag have no special meaning).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EmptyLanguage`] for a blank tag.
    pub fn new(language: &str) -> Result<Self, ScanError> {
        let language = language.trim();
        if language.is_empty() {
            return Err(ScanError::EmptyLanguage);
        }

        // Opening fence: ```<lang>, trailing blanks, newline.
        // Closing fence: newline, leading blanks, ```.
        let pattern = Regex::new(&format!(
            r"(?is)```{}[^\S\n]*\r?\n(.*?)\r?\n[^\S\n]*```",
            regex::escape(language)
        ))?;

        Ok(Self { pattern })
    }

    /// Find every fenced diagram, in document order.
    ///
    /// Each block closes at the nearest closing fence. The span covers the
    /// fences; the body is the trimmed inner text.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<DiagramBlock> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let inner = caps.get(1).map_or("", |m| m.as_str());
                Some(DiagramBlock::new(whole.range(), inner, Origin::Fenced))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<DiagramBlock> {
        FencedExtractor::new("plantuml").unwrap().extract(text)
    }

    #[test]
    fn test_single_block() {
        let text = "Intro\n```plantuml\n@startuml\nA->B\n@enduml\n```\nOutro";
        let blocks = extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "@startuml\nA->B\n@enduml");
        assert_eq!(blocks[0].origin, Origin::Fenced);
        assert_eq!(&text[blocks[0].span.clone()], "```plantuml\n@startuml\nA->B\n@enduml\n```");
    }

    #[test]
    fn test_multiple_blocks_are_non_greedy() {
        let text = "```plantuml\nfirst\n```\nmiddle\n```plantuml\nsecond\n```";
        let blocks = extract(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "first");
        assert_eq!(blocks[1].body, "second");
        assert!(blocks[0].end() <= blocks[1].start());
    }

    #[test]
    fn test_body_is_trimmed() {
        let blocks = extract("```plantuml\n\n   A -> B   \n\n```");
        assert_eq!(blocks[0].body, "A -> B");
    }

    #[test]
    fn test_blank_body_is_empty_diagram() {
        let text = "Intro\n```plantuml\n\n```\nOutro";
        let blocks = extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "");
        assert_eq!(&text[blocks[0].span.clone()], "```plantuml\n\n```");
    }

    #[test]
    fn test_language_case_insensitive() {
        let blocks = extract("```PlantUML\nA -> B\n```");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let blocks = extract("```plantuml\r\nA -> B\r\n```\r\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "A -> B");
    }

    #[test]
    fn test_other_language_ignored() {
        assert!(extract("```rust\nfn main() {}\n```").is_empty());
        assert!(extract("```plantumlx\nA\n```").is_empty());
    }

    #[test]
    fn test_unterminated_fence_ignored() {
        assert!(extract("```plantuml\n@startuml\nA -> B\n@enduml\n").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(extract("Hello **world**").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_custom_language_is_literal() {
        let extractor = FencedExtractor::new("c4+uml").unwrap();
        assert_eq!(extractor.extract("```c4+uml\nA\n```").len(), 1);
        assert!(extractor.extract("```c4uml\nA\n```").is_empty());
    }

    #[test]
    fn test_empty_language_rejected() {
        assert!(matches!(
            FencedExtractor::new("  "),
            Err(ScanError::EmptyLanguage)
        ));
    }
}
