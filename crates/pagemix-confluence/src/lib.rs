//! Confluence integration for pagemix.
//!
//! This crate turns mixed markdown and diagram content into a Confluence
//! storage-format page body and publishes it:
//! - [`MixedContentConverter`]: segment content and assemble macro envelopes
//! - [`ConfluenceClient`]: REST API client with HTTP Basic authentication and CQL search
//! - [`PagePublisher`](publisher::PagePublisher): create/update workflow
//!
//! # Conversion
//!
//! ```
//! use pagemix_confluence::{ConverterConfig, MixedContentConverter};
//!
//! let converter = MixedContentConverter::new(ConverterConfig::default())?;
//! let conversion = converter.convert("Hello **world**");
//!
//! assert!(conversion.body.starts_with("<ac:structured-macro ac:name=\"markdown\">"));
//! assert_eq!(conversion.diagram_count, 0);
//! # Ok::<(), pagemix_confluence::ConvertError>(())
//! ```

// Storage-format assembly
mod converter;
mod escape;
mod local_id;
mod macros;

pub use converter::{Conversion, ConverterConfig, MixedContentConverter, assemble};
pub use escape::escape_html;
pub use local_id::{DEFAULT_PREFIX, LocalIdGenerator, RandomIds, SequentialIds};
pub use macros::{DiagramMacro, TextMacro};
pub use pagemix_config::ExtensionDescriptor;

// API client
mod client;
pub use client::{ConfluenceClient, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};

// Types (exposed via client and result structs)
pub mod types;

// Page publisher
pub mod publisher;
pub use publisher::{PagePublisher, PublishError, PublishResult};

// Errors
pub mod error;
pub use error::{ConfluenceError, ConvertError};
