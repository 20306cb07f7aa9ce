//! Page publishing for Confluence.
//!
//! [`PagePublisher`] converts mixed content and writes it to Confluence:
//!
//! 1. Convert content to Confluence storage format
//! 2. Fetch the current page (updates only; title-only updates keep its body)
//! 3. Create or update the page
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pagemix_confluence::{ConfluenceClient, ConverterConfig, MixedContentConverter, PagePublisher};
//!
//! let client = ConfluenceClient::new("https://acme.atlassian.net", "bot@acme.com", "token");
//! let converter = MixedContentConverter::new(ConverterConfig::default())?;
//! let publisher = PagePublisher::new(&client, converter);
//!
//! let created = publisher.create("Design", "# Design\n\n@startuml\nA -> B\n@enduml", "ENG", None)?;
//! println!("Created: {}", created.url);
//!
//! let updated = publisher.update(&created.page.id, Some("# Design v2"), None, Some("Revise"))?;
//! println!("Updated to version {}", updated.page.version.number);
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;
mod result;

pub use error::PublishError;
pub use executor::PagePublisher;
pub use result::PublishResult;
