//! Error types for catalog construction.
//!
//! Every variant is an invalid-input error detected while the engine is being
//! built. Searching never fails.

use crate::types::{ColorId, ItemId, SizeId};
use thiserror::Error;

/// Errors raised while validating domains or building the catalog index.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two items in the snapshot share an id.
    #[error("duplicate item id: {0}")]
    DuplicateItemId(ItemId),

    /// Two values in the color domain share an id.
    #[error("duplicate color id in domain: {0}")]
    DuplicateColorId(ColorId),

    /// Two values in the size domain share an id.
    #[error("duplicate size id in domain: {0}")]
    DuplicateSizeId(SizeId),

    /// An item references a color that is not in the color domain.
    #[error("item {item} references unknown color {color}")]
    UnknownColor {
        /// The offending item.
        item: ItemId,
        /// The color id it carries.
        color: ColorId,
    },

    /// An item references a size that is not in the size domain.
    #[error("item {item} references unknown size {size}")]
    UnknownSize {
        /// The offending item.
        item: ItemId,
        /// The size id it carries.
        size: SizeId,
    },

    /// The catalog configuration could not be read or deserialized.
    #[error("catalog config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
