//! facet-core — catalog index and faceted search engine.
//!
//! # Architecture
//!
//! ```text
//! CatalogConfig ──► Domains + [Item] ──► CatalogIndex ──► SearchEngine ──► SearchResult
//! ```
//!
//! The index is built once from a borrowed snapshot and never mutated. A
//! [`SearchEngine`] is `Send + Sync`; share it by reference across threads.

pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod search;
pub mod types;

pub use domain::{Domain, Domains};
pub use error::{CatalogError, Result};
pub use index::CatalogIndex;
pub use search::{FacetCount, FacetCounts, Filter, SearchEngine, SearchResult};
pub use types::{Attribute, Color, ColorId, Item, ItemId, Size, SizeId};
