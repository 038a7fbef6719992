//! Attribute domains — the complete, ordered set of legal values per dimension.
//!
//! Domains are supplied once at engine construction and never change. The
//! search engine iterates them in declaration order, which is what pins the
//! order of both the result items and the facet count tables.

use crate::error::Result;
use crate::types::{Attribute, Color, Size};
use std::collections::HashMap;
use std::fmt;

/// An ordered, id-unique set of values for one attribute dimension.
#[derive(Clone)]
pub struct Domain<A: Attribute> {
    values: Vec<A>,
    positions: HashMap<A::Id, usize>,
}

impl<A: Attribute> Domain<A> {
    /// Build a domain, rejecting duplicate ids.
    pub fn new(values: Vec<A>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(values.len());
        for (pos, value) in values.iter().enumerate() {
            if positions.insert(value.id(), pos).is_some() {
                return Err(A::duplicate_id(value.id()));
            }
        }
        Ok(Self { values, positions })
    }


    /// Look up a value by id.
    pub fn get(&self, id: A::Id) -> Option<&A> {
        self.positions.get(&id).map(|&pos| &self.values[pos])
    }

    /// Declaration-order position of `id`, if it belongs to this domain.
    pub fn position(&self, id: A::Id) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: A::Id) -> bool {
        self.positions.contains_key(&id)
    }

    /// Case-insensitive lookup by display label. Returns the first match in
    /// declaration order.
    pub fn find_by_label(&self, label: &str) -> Option<&A> {
        self.values
            .iter()
            .find(|v| v.label().eq_ignore_ascii_case(label))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<A: Attribute + fmt::Debug> fmt::Debug for Domain<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl<'a, A: Attribute> IntoIterator for &'a Domain<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// The color and size domains the engine is built against.
#[derive(Debug, Clone)]
pub struct Domains {
    pub colors: Domain<Color>,
    pub sizes: Domain<Size>,
}

impl Domains {
    /// Validate and pair up both domains.
    pub fn new(colors: Vec<Color>, sizes: Vec<Size>) -> Result<Self> {
        Ok(Self {
            colors: Domain::new(colors)?,
            sizes: Domain::new(sizes)?,
        })
    }

    /// The built-in shirt domains: five colors and three sizes.
    pub fn standard() -> Self {
        let colors = vec![
            Color::new(1, "Red"),
            Color::new(2, "Blue"),
            Color::new(3, "Yellow"),
            Color::new(4, "White"),
            Color::new(5, "Black"),
        ];
        let sizes = vec![
            Size::new(1, "Small"),
            Size::new(2, "Medium"),
            Size::new(3, "Large"),
        ];
        Self::new(colors, sizes).expect("built-in domains have unique ids")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
