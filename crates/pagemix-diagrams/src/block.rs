//! Diagram blocks and document segments.

use std::ops::Range;

/// How a diagram block was delimited in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Fenced code block tagged with the diagram language.
    Fenced,
    /// Bare `@start<subtype>` ... `@end<subtype>` markers.
    Standalone,
}

/// Diagram found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    /// Byte range of the whole block, delimiters included.
    pub span: Range<usize>,
    /// Diagram source with fences stripped and outer whitespace trimmed.
    ///
    /// Standalone blocks keep their `@start`/`@end` markers.
    pub body: String,
    /// Which extractor produced this block.
    pub origin: Origin,
}

impl DiagramBlock {
    /// Create a block, trimming the body.
    pub(crate) fn new(span: Range<usize>, body: &str, origin: Origin) -> Self {
        debug_assert!(span.start < span.end, "empty diagram span {span:?}");
        Self {
            span,
            body: body.trim().to_owned(),
            origin,
        }
    }

    /// Start offset (inclusive).
    #[must_use]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// End offset (exclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Whether the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }
}

/// Segment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Prose passed through to the text macro.
    Text,
    /// Diagram source passed to the extension macro.
    Diagram,
}

/// Contiguous piece of a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Trimmed text, or the diagram body.
    pub content: String,
    /// Byte range in the source document this segment was taken from.
    ///
    /// For text segments this is the untrimmed gap between diagrams.
    pub span: Range<usize>,
}

impl Segment {
    pub(crate) fn text(content: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind: SegmentKind::Text,
            content: content.into(),
            span,
        }
    }

    pub(crate) fn diagram(block: DiagramBlock) -> Self {
        Self {
            kind: SegmentKind::Diagram,
            content: block.body,
            span: block.span,
        }
    }

    #[must_use]
    pub fn is_diagram(&self) -> bool {
        self.kind == SegmentKind::Diagram
    }
}
