//! Domain-specific assertions for facetshop harnesses.
//!
//! The oracle here recomputes a search by brute force over the snapshot, so
//! harnesses can check the engine against an independent definition of
//! "matching item" and "facet count".

use facet_core::{Attribute, Domains, FacetCounts, Filter, Item, ItemId, SearchResult};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Brute-force oracle
// ---------------------------------------------------------------------------

/// Whether `item` satisfies `filter` (empty dimension = unconstrained).
pub fn matches(filter: &Filter, item: &Item) -> bool {
    (filter.colors.is_empty() || filter.colors.contains(&item.color))
        && (filter.sizes.is_empty() || filter.sizes.contains(&item.size))
}

/// Ids of the items a correct engine must return, sorted.
pub fn expected_ids(filter: &Filter, items: &[Item]) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = items
        .iter()
        .filter(|i| matches(filter, i))
        .map(|i| i.id)
        .collect();
    ids.sort();
    ids
}

/// Result item ids, sorted, for order-insensitive comparison.
pub fn result_ids(result: &SearchResult<'_>) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = result.items.iter().map(|i| i.id).collect();
    ids.sort();
    ids
}

/// Facet counts as `label → count`, for readable diffs.
pub fn count_table<A: Attribute>(counts: &FacetCounts<'_, A>) -> BTreeMap<String, usize> {
    counts
        .iter()
        .map(|c| (c.value.label().to_string(), c.count))
        .collect()
}

/// Check every invariant a search result must satisfy against the oracle:
/// the matched item set, and a full-domain count table per dimension where
/// each entry is the number of matched items carrying that value.
pub fn assert_consistent(domains: &Domains, items: &[Item], filter: &Filter, result: &SearchResult<'_>) {
    pretty_assertions::assert_eq!(result_ids(result), expected_ids(filter, items));

    assert_eq!(result.color_counts.len(), domains.colors.len());
    for (entry, color) in result.color_counts.iter().zip(domains.colors.iter()) {
        assert_eq!(entry.value.id, color.id, "color counts out of domain order");
        let expected = items
            .iter()
            .filter(|i| matches(filter, i) && i.color == color.id)
            .count();
        assert_eq!(entry.count, expected, "color count for {}", color.name);
    }

    assert_eq!(result.size_counts.len(), domains.sizes.len());
    for (entry, size) in result.size_counts.iter().zip(domains.sizes.iter()) {
        assert_eq!(entry.value.id, size.id, "size counts out of domain order");
        let expected = items
            .iter()
            .filter(|i| matches(filter, i) && i.size == size.id)
            .count();
        assert_eq!(entry.count, expected, "size count for {}", size.name);
    }
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

/// Assert a facet count table against `label => count` pairs. Labels not
/// listed must have a zero count.
///
/// ```rust
/// assert_counts!(result.color_counts, { "Red" => 3, "Blue" => 1 });
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($counts:expr, { $($label:expr => $count:expr),* $(,)? }) => {{
        let actual = $crate::common::count_table(&$counts);
        let mut expected: std::collections::BTreeMap<String, usize> =
            actual.keys().map(|k| (k.clone(), 0)).collect();
        $(
            assert!(
                expected.contains_key($label),
                "assert_counts! failed: {:?} is not in the domain. Available: {:?}",
                $label,
                actual.keys().collect::<Vec<_>>()
            );
            expected.insert($label.to_string(), $count);
        )*
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

/// Assert that a result holds exactly the named items, in any order.
///
/// ```rust
/// assert_items!(result, catalog, ["Red - Large", "Blue - Large"]);
/// ```
#[macro_export]
macro_rules! assert_items {
    ($result:expr, $catalog:expr, [$($name:expr),* $(,)?]) => {{
        let mut expected = $catalog.ids_named(&[$($name),*]);
        expected.sort();
        let actual = $crate::common::result_ids(&$result);
        if actual != expected {
            let names: Vec<&str> = $result.items.iter().map(|i| i.name.as_str()).collect();
            panic!(
                "assert_items! failed:\n  expected: {:?}\n  actual:   {:?}",
                [$($name),*],
                names
            );
        }
    }};
}
