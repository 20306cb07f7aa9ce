//! Diagram scanner combining both extractors.
//!
//! [`DiagramScanner`] owns the compiled patterns for one [`ScanConfig`] and
//! runs the full pipeline: fenced extraction, standalone extraction, overlap
//! resolution, segmentation.

use tracing::{debug, warn};

use crate::block::Segment;
use crate::consts::DEFAULT_LANGUAGE;
use crate::error::ScanError;
use crate::fenced::FencedExtractor;
use crate::resolve::resolve_overlaps;
use crate::segment::segment;
use crate::standalone::StandaloneExtractor;
use crate::subtype::SubtypeSet;

/// What counts as a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Fence language tag (default: `plantuml`).
    pub language: String,
    /// Subtypes accepted in `@start<subtype>` markers.
    pub subtypes: SubtypeSet,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            subtypes: SubtypeSet::default(),
        }
    }
}

/// Segments of one document plus anything worth telling the user.
#[derive(Debug, Default)]
pub struct Scan {
    /// Text and diagram segments in document order.
    pub segments: Vec<Segment>,
    /// Warnings (unterminated start markers).
    pub warnings: Vec<String>,
}

impl Scan {
    /// Number of diagram segments.
    #[must_use]
    pub fn diagram_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_diagram()).count()
    }
}

/// Splits mixed markdown/diagram documents into segments.
///
/// Holds no per-document state: one scanner can serve any number of
/// documents, from any number of threads.
///
/// # Example
///
/// ```
/// use pagemix_diagrams::{DiagramScanner, ScanConfig, SegmentKind};
///
/// let scanner = DiagramScanner::new(&ScanConfig::default()).unwrap();
/// let scan = scanner.scan("Intro\n```plantuml\n@startuml\nA->B\n@enduml\n```\nOutro");
///
/// let kinds: Vec<_> = scan.segments.iter().map(|s| s.kind).collect();
/// assert_eq!(kinds, [SegmentKind::Text, SegmentKind::Diagram, SegmentKind::Text]);
/// ```
#[derive(Debug, Clone)]
pub struct DiagramScanner {
    fenced: FencedExtractor,
    standalone: StandaloneExtractor,
}

impl DiagramScanner {
    /// Compile a scanner.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the language tag is empty or a pattern fails
    /// to compile.
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        Ok(Self {
            fenced: FencedExtractor::new(&config.language)?,
            standalone: StandaloneExtractor::new(&config.subtypes)?,
        })
    }

    /// Split a document into segments.
    ///
    /// Never fails: malformed markers are left in the surrounding text.
    #[must_use]
    pub fn scan(&self, text: &str) -> Scan {
        let fenced = self.fenced.extract(text);
        let standalone = self.standalone.extract(text);

        for warning in &standalone.warnings {
            warn!("{warning}");
        }

        let fenced_count = fenced.len();
        let standalone_count = standalone.blocks.len();
        let blocks = resolve_overlaps(fenced, standalone.blocks);

        debug!(
            fenced = fenced_count,
            standalone = standalone_count,
            resolved = blocks.len(),
            "Resolved diagram blocks"
        );

        Scan {
            segments: segment(text, blocks),
            warnings: standalone.warnings,
        }
    }
}
