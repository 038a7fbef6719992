//! facetshop — faceted search over a fixed in-memory catalog.
//!
//! This crate re-exports [`facet_core`] so that the binary and the integration
//! harnesses share one import path. See that crate for the index and engine.

pub use facet_core::*;
