//! Catalog configuration for facetshop.
//!
//! [`CatalogConfig::load`] reads a TOML catalog file describing both attribute
//! domains and the item snapshot. [`CatalogConfig::defaults`] returns the
//! embedded demo catalog without touching the filesystem (useful in tests).

use crate::domain::Domains;
use crate::error::Result;
use crate::types::{Color, Item, Size};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CATALOG: &str = r#"
colors = [
    { id = 1, name = "Red" },
    { id = 2, name = "Blue" },
    { id = 3, name = "Yellow" },
    { id = 4, name = "White" },
    { id = 5, name = "Black" },
]

sizes = [
    { id = 1, name = "Small" },
    { id = 2, name = "Medium" },
    { id = 3, name = "Large" },
]

[[items]]
id    = "0b6f4a1e-3c55-4f6e-9d0a-6a1f2d7c8e01"
name  = "Red - Small"
color = 1
size  = 1

[[items]]
id    = "0b6f4a1e-3c55-4f6e-9d0a-6a1f2d7c8e02"
name  = "Black - Medium"
color = 5
size  = 2

[[items]]
id    = "0b6f4a1e-3c55-4f6e-9d0a-6a1f2d7c8e03"
name  = "Blue - Large"
color = 2
size  = 3

[[items]]
id    = "0b6f4a1e-3c55-4f6e-9d0a-6a1f2d7c8e04"
name  = "Red - Large"
color = 1
size  = 3

[[items]]
id    = "0b6f4a1e-3c55-4f6e-9d0a-6a1f2d7c8e05"
name  = "Red - Medium"
color = 1
size  = 2
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// A catalog file: both domains plus the item snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl CatalogConfig {
    /// Load a TOML catalog from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Load `path` if given, otherwise the catalog at [`default_path`] if one
    /// exists, otherwise the embedded demo catalog.
    ///
    /// [`default_path`]: CatalogConfig::default_path
    pub fn load_or_defaults(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let fallback = Self::default_path();
        if fallback.exists() {
            tracing::debug!(path = %fallback.display(), "loading catalog from config dir");
            return Self::load(&fallback);
        }
        Ok(Self::defaults())
    }

    /// Return the embedded demo catalog without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CATALOG, config::FileFormat::Toml))
            .build()
            .expect("built-in default catalog must be valid TOML")
            .try_deserialize()
            .expect("built-in default catalog must deserialize correctly")
    }

    /// `$XDG_CONFIG_HOME/facetshop/catalog.toml`, falling back to
    /// `$HOME/.config`.
    pub fn default_path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                    .join(".config")
            })
            .join("facetshop")
            .join("catalog.toml")
    }

    /// Validate the domains and hand back the pieces an engine is built from.
    pub fn into_parts(self) -> Result<(Domains, Vec<Item>)> {
        let domains = Domains::new(self.colors, self.sizes)?;
        Ok((domains, self.items))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
