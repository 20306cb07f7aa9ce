//! Confluence API types.

mod page;
mod search;
mod space;

pub use page::{Body, Links, NewPage, Page, Storage, Version};
pub use search::{ContentVersion, SearchContent, SearchHit, SearchResponse, SearchResult};
pub use space::Space;
