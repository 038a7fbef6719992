//! Catalog fixtures used across harnesses.

use super::builders::{Catalog, CatalogBuilder};
use facet_core::{Color, ColorId, Domains, Item, Size, SizeId};

/// The five-shirt catalog over {Red, Black, Blue} × {Small, Medium, Large}.
pub fn shirt_catalog() -> Catalog {
    CatalogBuilder::new()
        .colors(&["Red", "Black", "Blue"])
        .sizes(&["Small", "Medium", "Large"])
        .item("Red", "Small")
        .item("Black", "Medium")
        .item("Blue", "Large")
        .item("Red", "Large")
        .item("Red", "Medium")
        .build()
}

/// The same five shirts over the built-in standard domains, which also
/// declare Yellow and White.
pub fn standard_shirt_catalog() -> Catalog {
    let domains = Domains::standard();
    let pick = |color: &str, size: &str| {
        let c = domains.colors.find_by_label(color).unwrap().id;
        let s = domains.sizes.find_by_label(size).unwrap().id;
        Item::new(format!("{color} - {size}"), c, s)
    };
    let items = vec![
        pick("Red", "Small"),
        pick("Black", "Medium"),
        pick("Blue", "Large"),
        pick("Red", "Large"),
        pick("Red", "Medium"),
    ];
    Catalog { domains, items }
}

/// A synthetic catalog of `n` items spread round-robin over `colors × sizes`
/// values. Used by throughput tests and benches.
pub fn synthetic_catalog(n: usize, colors: u32, sizes: u32) -> Catalog {
    let domains = Domains::new(
        (0..colors).map(|i| Color::new(i, format!("color-{i}"))).collect(),
        (0..sizes).map(|i| Size::new(i, format!("size-{i}"))).collect(),
    )
    .expect("synthetic domains have unique ids");
    let items = (0..n)
        .map(|i| {
            let i = i as u32;
            Item::new(
                format!("item-{i}"),
                ColorId(i % colors),
                SizeId((i / colors) % sizes),
            )
        })
        .collect();
    Catalog { domains, items }
}
