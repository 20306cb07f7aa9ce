//! Diagram detection for mixed markdown content.
//!
//! Authors write prose and `PlantUML` diagrams in one string. This crate finds
//! the diagrams and splits the string into ordered text and diagram segments:
//!
//! 1. [`FencedExtractor`] finds ```` ```plantuml ```` code fences
//! 2. [`StandaloneExtractor`] finds bare `@start<subtype>` ... `@end<subtype>` blocks
//! 3. [`resolve_overlaps`] merges both, fenced blocks first
//! 4. [`segment()`] walks the document and emits [`Segment`]s
//!
//! [`DiagramScanner`] runs all four steps. Nothing here performs I/O, and
//! malformed input never produces an error: unmatched markers simply stay in
//! the surrounding text.
//!
//! # Example
//!
//! ```
//! use pagemix_diagrams::{DiagramScanner, ScanConfig};
//!
//! let scanner = DiagramScanner::new(&ScanConfig::default())?;
//! let scan = scanner.scan("# Flow\n\n@startuml\nA -> B\n@enduml\n");
//!
//! assert_eq!(scan.segments.len(), 2);
//! assert_eq!(scan.diagram_count(), 1);
//! # Ok::<(), pagemix_diagrams::ScanError>(())
//! ```

mod block;
mod consts;
mod error;
mod fenced;
mod resolve;
mod scanner;
mod segment;
mod standalone;
mod subtype;

pub use block::{DiagramBlock, Origin, Segment, SegmentKind};
pub use consts::{DEFAULT_LANGUAGE, DEFAULT_SUBTYPES};
pub use error::ScanError;
pub use fenced::FencedExtractor;
pub use resolve::resolve_overlaps;
pub use scanner::{DiagramScanner, Scan, ScanConfig};
pub use segment::segment;
pub use standalone::{StandaloneExtractor, StandaloneMatches};
pub use subtype::SubtypeSet;
