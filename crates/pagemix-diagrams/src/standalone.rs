//! Standalone diagram extraction.
//!
//! Finds diagrams written directly in the document, delimited by
//! `@start<subtype>` and the nearest following `@end<subtype>` of the same
//! subtype. The markers belong to the diagram language and stay in the body.

use std::collections::HashMap;

use regex::Regex;

use crate::block::{DiagramBlock, Origin};
use crate::error::ScanError;
use crate::subtype::SubtypeSet;

/// Result of a standalone scan.
#[derive(Debug, Default)]
pub struct StandaloneMatches {
    /// Matched blocks in document order.
    pub blocks: Vec<DiagramBlock>,
    /// One entry per start marker that never found its end marker.
    pub warnings: Vec<String>,
}

/// Extracts `@start<subtype>` ... `@end<subtype>` blocks.
#[derive(Debug, Clone)]
pub struct StandaloneExtractor {
    /// Any start marker from the subtype set; group 1 is the subtype.
    start: Regex,
    /// End marker per lowercase subtype.
    ends: HashMap<String, Regex>,
}

impl StandaloneExtractor {
    /// Compile start and end patterns for every subtype in the set.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if a pattern fails to compile.
    pub fn new(subtypes: &SubtypeSet) -> Result<Self, ScanError> {
        let alternation = subtypes
            .keywords()
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        // ASCII-only case folding: the matched subtype lowercases to a key of `ends`.
        let start = Regex::new(&format!(r"(?i-u)@start({alternation})\b"))?;

        let mut ends = HashMap::with_capacity(subtypes.len());
        for keyword in subtypes.keywords() {
            let end = Regex::new(&format!(r"(?i-u)@end{}\b", regex::escape(keyword)))?;
            ends.insert(keyword.clone(), end);
        }

        Ok(Self { start, ends })
    }

    /// Find every standalone diagram, in document order.
    ///
    /// Scanning resumes after each matched block, so blocks never overlap.
    /// A start marker without a matching end marker is left as text and
    /// reported in [`StandaloneMatches::warnings`].
    #[must_use]
    pub fn extract(&self, text: &str) -> StandaloneMatches {
        let mut matches = StandaloneMatches::default();
        let mut pos = 0;

        while let Some(caps) = self.start.captures_at(text, pos) {
            let (Some(marker), Some(subtype)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let keyword = subtype.as_str().to_ascii_lowercase();

            let closing = self
                .ends
                .get(&keyword)
                .and_then(|end| end.find_at(text, marker.end()));

            if let Some(closing) = closing {
                let span = marker.start()..closing.end();
                matches.blocks.push(DiagramBlock::new(
                    span.clone(),
                    &text[span],
                    Origin::Standalone,
                ));
                pos = closing.end();
            } else {
                matches.warnings.push(format!(
                    "unterminated @start{keyword} at byte {}",
                    marker.start()
                ));
                pos = marker.end();
            }
        }

        matches
    }
}
