//! Catalog index — items grouped by their exact `(color, size)` pair.
//!
//! The index is built once from a borrowed snapshot and is read-only from then
//! on. Every item of the snapshot lands in exactly one bucket, and buckets keep
//! the relative input order of their items.

use crate::error::{CatalogError, Result};
use crate::types::{ColorId, Item, SizeId};
use std::collections::{HashMap, HashSet};

/// Composite key of one bucket.
pub type PairKey = (ColorId, SizeId);

/// Read-only `(color, size) → items` lookup over a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex<'a> {
    buckets: HashMap<PairKey, Vec<&'a Item>>,
    len: usize,
}

impl<'a> CatalogIndex<'a> {
    /// Group `items` by `(color, size)`.
    ///
    /// Fails with [`CatalogError::DuplicateItemId`] if two items share an id.
    /// An empty slice yields an empty index.
    pub fn build(items: &'a [Item]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut buckets: HashMap<PairKey, Vec<&'a Item>> = HashMap::new();

        for item in items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItemId(item.id));
            }
            buckets.entry(item.key()).or_default().push(item);
        }

        tracing::debug!(
            items = items.len(),
            buckets = buckets.len(),
            "catalog index built"
        );

        Ok(Self {
            buckets,
            len: items.len(),
        })
    }

    /// Items carrying exactly this pair, in snapshot order. A pair with no
    /// items returns `None`.
    pub fn get(&self, color: ColorId, size: SizeId) -> Option<&[&'a Item]> {
        self.buckets.get(&(color, size)).map(Vec::as_slice)
    }

    /// Total number of indexed items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct non-empty pairs.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate over buckets in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (PairKey, &[&'a Item])> + '_ {
        self.buckets.iter().map(|(key, items)| (*key, items.as_slice()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
