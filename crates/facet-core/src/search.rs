//! Search layer — cross-product key expansion and facet counting.
//!
//! A [`Filter`] is a conjunction of disjunctions: any requested color AND any
//! requested size. The index is keyed on exact pairs, so every pair implied by
//! the filter is probed individually. An empty dimension in the filter means
//! "every value in the domain".
//!
//! Facet counts always cover the *full* domain of each dimension, including
//! values that were not requested and values with no matches, so a caller can
//! render `(0) Yellow` next to `(3) Red`.

use crate::domain::{Domain, Domains};
use crate::error::{CatalogError, Result};
use crate::index::CatalogIndex;
use crate::types::{Attribute, Color, ColorId, Item, Size, SizeId};
use serde::Serialize;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Requested attribute values per dimension. Empty means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub colors: HashSet<ColorId>,
    pub sizes: HashSet<SizeId>,
}

impl Filter {
    /// A filter with no constraints; matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(colors: impl IntoIterator<Item = ColorId>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            sizes: HashSet::new(),
        }
    }

    pub fn with_sizes(sizes: impl IntoIterator<Item = SizeId>) -> Self {
        Self {
            colors: HashSet::new(),
            sizes: sizes.into_iter().collect(),
        }
    }

    pub fn color(mut self, id: ColorId) -> Self {
        self.colors.insert(id);
        self
    }

    pub fn size(mut self, id: SizeId) -> Self {
        self.sizes.insert(id);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Facet counts
// ---------------------------------------------------------------------------

/// Number of matching items carrying one attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount<'a, A> {
    pub value: &'a A,
    pub count: usize,
}

/// One count per domain value, in domain declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetCounts<'a, A> {
    entries: Vec<FacetCount<'a, A>>,
}

impl<'a, A: Attribute> FacetCounts<'a, A> {
    fn zeroed(domain: &'a Domain<A>) -> Self {
        Self {
            entries: domain
                .iter()
                .map(|value| FacetCount { value, count: 0 })
                .collect(),
        }
    }

    /// Count for `id`, or `None` if `id` is not in the domain. Linear in the
    /// domain size.
    pub fn get(&self, id: A::Id) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.value.id() == id)
            .map(|e| e.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacetCount<'a, A>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Search result
// ---------------------------------------------------------------------------

/// Matching items plus full-domain facet counts for one query.
///
/// Items are ordered by candidate key (colors outer, sizes inner, both in
/// domain order), then by snapshot order within a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    pub items: Vec<&'a Item>,
    pub color_counts: FacetCounts<'a, Color>,
    pub size_counts: FacetCounts<'a, Size>,
}

impl SearchResult<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Faceted search over an immutable catalog snapshot.
///
/// The engine borrows the snapshot and the domains and owns nothing mutable;
/// `search` takes `&self` and may run concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct SearchEngine<'a> {
    domains: &'a Domains,
    index: CatalogIndex<'a>,
}

impl<'a> SearchEngine<'a> {
    /// Validate `items` against `domains` and build the index.
    ///
    /// Fails if an item id repeats or an item carries a color or size that is
    /// not in its domain. An empty slice is a valid, empty catalog.
    pub fn new(domains: &'a Domains, items: &'a [Item]) -> Result<Self> {
        for item in items {
            if !domains.colors.contains(item.color) {
                return Err(CatalogError::UnknownColor {
                    item: item.id,
                    color: item.color,
                });
            }
            if !domains.sizes.contains(item.size) {
                return Err(CatalogError::UnknownSize {
                    item: item.id,
                    size: item.size,
                });
            }
        }

        Ok(Self {
            domains,
            index: CatalogIndex::build(items)?,
        })
    }

    /// An engine over an empty catalog. Every search returns no items and
    /// all-zero counts.
    pub fn empty(domains: &'a Domains) -> Self {
        Self {
            domains,
            index: CatalogIndex::default(),
        }
    }

    pub fn domains(&self) -> &'a Domains {
        self.domains
    }

    pub fn index(&self) -> &CatalogIndex<'a> {
        &self.index
    }

    /// Run `filter` against the catalog.
    ///
    /// Never fails. Requested values that are not in the domain are ignored;
    /// a dimension whose requested values are all unknown matches nothing.
    pub fn search(&self, filter: &Filter) -> SearchResult<'a> {
        let domains = self.domains;
        let colors = effective(&domains.colors, &filter.colors);
        let sizes = effective(&domains.sizes, &filter.sizes);

        let mut items = Vec::new();
        let mut color_counts = FacetCounts::zeroed(&domains.colors);
        let mut size_counts = FacetCounts::zeroed(&domains.sizes);

        for &(ci, color) in &colors {
            for &(si, size) in &sizes {
                if let Some(bucket) = self.index.get(color.id, size.id) {
                    items.extend_from_slice(bucket);
                    color_counts.entries[ci].count += bucket.len();
                    size_counts.entries[si].count += bucket.len();
                }
            }
        }

        tracing::debug!(
            colors = colors.len(),
            sizes = sizes.len(),
            matched = items.len(),
            "search complete"
        );

        SearchResult {
            items,
            color_counts,
            size_counts,
        }
    }
}

/// Domain values selected by `requested`, paired with their domain position.
/// An empty request selects the whole domain.
fn effective<'d, A: Attribute>(
    domain: &'d Domain<A>,
    requested: &HashSet<A::Id>,
) -> Vec<(usize, &'d A)> {
    if requested.is_empty() {
        return domain.iter().enumerate().collect();
    }

    for id in requested {
        if !domain.contains(*id) {
            tracing::debug!(%id, "ignoring filter value outside the domain");
        }
    }

    domain
        .iter()
        .enumerate()
        .filter(|(_, value)| requested.contains(&value.id()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
