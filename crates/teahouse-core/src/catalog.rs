//! # Catalog
//!
//! The closed, compile-time list of product declarations.
//!
//! Each declaration names a variant key, a display name and a [`Recipe`].
//! Composites list their constituents by variant key, and may only refer to
//! keys declared *earlier* in the catalog, so a cycle cannot be written down.
//!
//! ```text
//! key         name     recipe
//! ─────────   ──────   ─────────────────────────
//! BlackTea    紅茶      Atomic(20)
//! GreenTea    綠茶      Atomic(20)
//! OolongTea   烏龍茶    Atomic(20)
//! Milk        牛奶      Atomic(20)
//! MilkTea     奶茶      Composite[Milk, BlackTea]
//! ```

use crate::money::Money;

/// How a declared variant is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Fixed price.
    Atomic(Money),
    /// Ordered constituent variant keys.
    Composite(&'static [&'static str]),
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDecl {
    /// Variant identity, referenced by composites and by error reports.
    pub key: &'static str,
    /// Display name typed by the operator and printed on receipts.
    pub name: &'static str,
    pub recipe: Recipe,
}

impl ProductDecl {
    pub const fn atomic(key: &'static str, name: &'static str, price: Money) -> Self {
        ProductDecl {
            key,
            name,
            recipe: Recipe::Atomic(price),
        }
    }

    pub const fn composite(
        key: &'static str,
        name: &'static str,
        constituents: &'static [&'static str],
    ) -> Self {
        ProductDecl {
            key,
            name,
            recipe: Recipe::Composite(constituents),
        }
    }
}

// =============================================================================
// Tea House Menu
// =============================================================================

const TEA_PRICE: Money = Money::from_major(20);

pub const BLACK_TEA: ProductDecl = ProductDecl::atomic("BlackTea", "紅茶", TEA_PRICE);
pub const GREEN_TEA: ProductDecl = ProductDecl::atomic("GreenTea", "綠茶", TEA_PRICE);
pub const OOLONG_TEA: ProductDecl = ProductDecl::atomic("OolongTea", "烏龍茶", TEA_PRICE);
pub const MILK: ProductDecl = ProductDecl::atomic("Milk", "牛奶", Money::from_major(20));
pub const MILK_TEA: ProductDecl = ProductDecl::composite("MilkTea", "奶茶", MILK_TEA_PARTS);

const MILK_TEA_PARTS: &[&str] = &["Milk", "BlackTea"];

const STANDARD: &[ProductDecl] = &[BLACK_TEA, GREEN_TEA, OOLONG_TEA, MILK, MILK_TEA];

// =============================================================================
// Catalog
// =============================================================================

/// An ordered set of declarations, consumed by `ProductRegistry::build`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    decls: Vec<ProductDecl>,
}

impl Catalog {
    /// Creates a catalog from declarations, keeping their order.
    pub fn new(decls: impl IntoIterator<Item = ProductDecl>) -> Self {
        Catalog {
            decls: decls.into_iter().collect(),
        }
    }

    /// The tea house menu.
    pub fn standard() -> Self {
        Catalog::new(STANDARD.iter().copied())
    }

    pub fn decls(&self) -> &[ProductDecl] {
        &self.decls
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let names: Vec<_> = catalog.decls().iter().map(|d| d.name).collect();
        assert_eq!(names, ["紅茶", "綠茶", "烏龍茶", "牛奶", "奶茶"]);
    }

    #[test]
    fn test_milk_tea_recipe() {
        assert_eq!(MILK_TEA.recipe, Recipe::Composite(&["Milk", "BlackTea"]));
        assert_eq!(BLACK_TEA.recipe, Recipe::Atomic(Money::from_cents(2000)));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(Catalog::default().is_empty());
        assert_eq!(Catalog::standard().len(), 5);
    }
}
