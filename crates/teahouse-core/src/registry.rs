//! # Product Registry
//!
//! Maps a display name to a freshly built [`Product`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Registry Lifecycle                               │
//! │                                                                         │
//! │  Catalog ──► ProductRegistry::build() ──► frozen registry               │
//! │                  │                             │                        │
//! │                  ├── bad key/name?  ─► Invalid │                        │
//! │                  ├── name twice?    ─► DuplicateName                    │
//! │                  └── unknown part?  ─► UnknownConstituent               │
//! │                                                ▼                        │
//! │  "紅茶" ──────────────────────────────► resolve() ──► Product::Atomic    │
//! │  "珍珠奶茶" ──────────────────────────► resolve() ──► Product::Null      │
//! │                                                                         │
//! │  No mutation after build: shared `&ProductRegistry` reads need no lock │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use teahouse_core::{Money, ProductRegistry};
//!
//! let registry = ProductRegistry::standard().unwrap();
//!
//! assert_eq!(registry.resolve("奶茶").price().unwrap(), Money::from_major(40));
//! assert!(registry.resolve("珍珠奶茶").is_null());
//! ```

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Recipe};
use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;
use crate::product::Product;
use crate::validation::{validate_display_name, validate_variant_key};

/// Build instructions for one variant, with constituents already resolved
/// to entry indices.
#[derive(Debug)]
enum Blueprint {
    Atomic(Money),
    /// Indices always point at earlier entries.
    Composite(Vec<usize>),
}

#[derive(Debug)]
struct Entry {
    key: &'static str,
    name: &'static str,
    blueprint: Blueprint,
}

/// Name-keyed product registry, immutable once built.
#[derive(Debug)]
pub struct ProductRegistry {
    entries: Vec<Entry>,
    by_name: HashMap<&'static str, usize>,
}

impl ProductRegistry {
    /// Builds a registry from a catalog, failing on the first bad declaration.
    ///
    /// ## Errors
    /// - `Invalid` for a malformed key or display name
    /// - `DuplicateKey` when a variant key repeats
    /// - `UnknownConstituent` when a composite names a key not declared before it
    /// - `DuplicateName` when two variants share a display name (both keys reported)
    pub fn build(catalog: &Catalog) -> CatalogResult<Self> {
        let mut entries: Vec<Entry> = Vec::with_capacity(catalog.len());
        let mut by_key: HashMap<&'static str, usize> = HashMap::with_capacity(catalog.len());
        let mut by_name: HashMap<&'static str, usize> = HashMap::with_capacity(catalog.len());

        for decl in catalog.decls() {
            validate_variant_key(decl.key)?;
            validate_display_name(decl.name)?;

            if by_key.contains_key(decl.key) {
                return Err(CatalogError::DuplicateKey {
                    key: decl.key.to_string(),
                });
            }

            let blueprint = match decl.recipe {
                Recipe::Atomic(price) => Blueprint::Atomic(price),
                Recipe::Composite(parts) => Blueprint::Composite(
                    parts
                        .iter()
                        .map(|part| {
                            by_key.get(part).copied().ok_or_else(|| {
                                CatalogError::UnknownConstituent {
                                    variant: decl.key.to_string(),
                                    constituent: part.to_string(),
                                }
                            })
                        })
                        .collect::<CatalogResult<Vec<_>>>()?,
                ),
            };

            if let Some(&first) = by_name.get(decl.name) {
                return Err(CatalogError::DuplicateName {
                    name: decl.name.to_string(),
                    first: entries[first].key.to_string(),
                    second: decl.key.to_string(),
                });
            }

            let index = entries.len();
            by_key.insert(decl.key, index);
            by_name.insert(decl.name, index);
            entries.push(Entry {
                key: decl.key,
                name: decl.name,
                blueprint,
            });

            debug!(key = decl.key, name = decl.name, "Registered product");
        }

        info!(products = entries.len(), "Product registry built");

        Ok(ProductRegistry { entries, by_name })
    }

    /// Builds the registry for the tea house menu.
    pub fn standard() -> CatalogResult<Self> {
        Self::build(&Catalog::standard())
    }

    /// Resolves a display name to a new product instance.
    ///
    /// Unknown names, including the empty string, yield `Product::Null`.
    /// Each hit builds an independent instance.
    pub fn resolve(&self, name: &str) -> Product {
        match self.by_name.get(name) {
            Some(&index) => {
                debug!(name, "Resolved product");
                self.instantiate(index)
            }
            None => {
                warn!(name, "Unknown product name, using null product");
                Product::Null
            }
        }
    }

    fn instantiate(&self, index: usize) -> Product {
        let entry = &self.entries[index];
        match &entry.blueprint {
            Blueprint::Atomic(price) => Product::atomic(entry.name, *price),
            Blueprint::Composite(parts) => Product::composite(
                entry.name,
                parts.iter().map(|&part| self.instantiate(part)).collect(),
            ),
        }
    }

    /// Whether `name` is a registered display name.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered display names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
