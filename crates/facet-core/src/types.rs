//! Core types for facet-core.
//!
//! This module defines the records shared by the index and the search
//! engine: the two attribute dimensions ([`Color`] and [`Size`]), their
//! stable ids, and the catalog [`Item`].
//!
//! Attribute values are identified by id, never by label. Two colors with the
//! same label but different ids are different facets.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// Stable identifier of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u32);

/// Stable identifier of a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeId(pub u32);

/// Unique identifier of a catalog [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a fresh random id.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color#{}", self.0)
    }
}

impl fmt::Display for SizeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One categorical attribute dimension.
///
/// Implemented by [`Color`] and [`Size`] so that domains and facet counts can
/// be written once for both.
pub trait Attribute {
    /// The id type keying this dimension.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// Stable id of this value.
    fn id(&self) -> Self::Id;

    /// Display label, e.g. `"Red"`.
    fn label(&self) -> &str;

    /// Error reported when `id` appears twice in one domain.
    fn duplicate_id(id: Self::Id) -> CatalogError;
}

/// A color attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: String,
}

impl Color {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ColorId(id),
            name: name.into(),
        }
    }
}

impl Attribute for Color {
    type Id = ColorId;

    fn id(&self) -> ColorId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn duplicate_id(id: ColorId) -> CatalogError {
        CatalogError::DuplicateColorId(id)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A size attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub id: SizeId,
    pub name: String,
}

impl Size {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: SizeId(id),
            name: name.into(),
        }
    }
}

impl Attribute for Size {
    type Id = SizeId;

    fn id(&self) -> SizeId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn duplicate_id(id: SizeId) -> CatalogError {
        CatalogError::DuplicateSizeId(id)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A catalog item, e.g. one shirt.
///
/// Items are owned by whoever supplies the catalog snapshot. The index and the
/// search engine only ever hold shared references to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique across the snapshot.
    pub id: ItemId,
    /// Human-readable label, e.g. `"Red - Small"`.
    pub name: String,
    /// Id of this item's value in the color domain.
    pub color: ColorId,
    /// Id of this item's value in the size domain.
    pub size: SizeId,
}

impl Item {
    /// Build an item with a freshly generated id.
    pub fn new(name: impl Into<String>, color: ColorId, size: SizeId) -> Self {
        Self {
            id: ItemId::new_v4(),
            name: name.into(),
            color,
            size,
        }
    }

    /// The composite key the catalog index groups this item under.
    pub fn key(&self) -> (ColorId, SizeId) {
        (self.color, self.size)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
