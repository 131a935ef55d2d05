//! # Product Model
//!
//! Every product exposes a display `name` and a `price`. The variant set is
//! closed and matched exhaustively:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Product Variants                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │     Atomic      │   │      Composite       │   │      Null       │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  name: 紅茶      │   │  name: 奶茶           │   │  name: ""       │  │
//! │  │  price: 20      │   │  parts: [牛奶, 紅茶]  │   │  price: 0       │  │
//! │  │  (constant)     │   │  price: Σ parts      │   │  (sentinel)     │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! │                                                                         │
//! │  Equality and hashing use the name only: two 紅茶 are the same product │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are normally obtained from [`ProductRegistry::resolve`], which
//! hands out a fresh instance per call.
//!
//! [`ProductRegistry::resolve`]: crate::registry::ProductRegistry::resolve

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Variants
// =============================================================================

/// A product whose price is a constant fixed at declaration time.
#[derive(Debug, Clone)]
pub struct AtomicProduct {
    name: String,
    price: Money,
}

impl AtomicProduct {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        AtomicProduct {
            name: name.into(),
            price,
        }
    }
}

/// A product priced as the sum of the constituents it owns.
///
/// Membership is fixed at construction; constituents may themselves be
/// composites.
#[derive(Debug, Clone)]
pub struct CompositeProduct {
    name: String,
    constituents: Vec<Product>,
}

impl CompositeProduct {
    pub fn new(name: impl Into<String>, constituents: Vec<Product>) -> Self {
        CompositeProduct {
            name: name.into(),
            constituents,
        }
    }

    fn sum_constituents(&self) -> CoreResult<Money> {
        self.constituents.iter().try_fold(Money::zero(), |acc, part| {
            acc.checked_add(part.price()?)
                .ok_or_else(|| CoreError::PriceOverflow {
                    product: self.name.clone(),
                })
        })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable product.
///
/// `Product::Null` stands in for an unresolved name: it has an empty name,
/// costs nothing and can be added to an order like any other product.
#[derive(Debug, Clone)]
pub enum Product {
    Atomic(AtomicProduct),
    Composite(CompositeProduct),
    Null,
}

impl Product {
    /// Shorthand for an atomic product.
    pub fn atomic(name: impl Into<String>, price: Money) -> Self {
        Product::Atomic(AtomicProduct::new(name, price))
    }

    /// Shorthand for a composite product.
    pub fn composite(name: impl Into<String>, constituents: Vec<Product>) -> Self {
        Product::Composite(CompositeProduct::new(name, constituents))
    }

    /// The null product.
    #[inline]
    pub const fn null() -> Self {
        Product::Null
    }

    /// Display name, also the registry key. Empty for `Null`.
    pub fn name(&self) -> &str {
        match self {
            Product::Atomic(p) => &p.name,
            Product::Composite(p) => &p.name,
            Product::Null => "",
        }
    }

    /// Evaluates the price.
    ///
    /// Composite prices are summed recursively over constituents in order.
    ///
    /// ## Errors
    /// - `InvalidPrice` if this product or any constituent evaluates negative
    /// - `PriceOverflow` if a composite sum does not fit
    ///
    /// ## Example
    /// ```rust
    /// use teahouse_core::{Money, Product};
    ///
    /// let milk_tea = Product::composite(
    ///     "奶茶",
    ///     vec![
    ///         Product::atomic("牛奶", Money::from_major(20)),
    ///         Product::atomic("紅茶", Money::from_major(20)),
    ///     ],
    /// );
    /// assert_eq!(milk_tea.price().unwrap(), Money::from_major(40));
    /// assert!(Product::null().price().unwrap().is_zero());
    /// ```
    pub fn price(&self) -> CoreResult<Money> {
        let price = match self {
            Product::Atomic(p) => p.price,
            Product::Composite(p) => p.sum_constituents()?,
            Product::Null => Money::zero(),
        };

        if price.is_negative() {
            return Err(CoreError::InvalidPrice {
                product: self.name().to_string(),
                cents: price.cents(),
            });
        }

        Ok(price)
    }

    /// Constituents of a composite; empty for every other variant.
    pub fn constituents(&self) -> &[Product] {
        match self {
            Product::Composite(p) => &p.constituents,
            Product::Atomic(_) | Product::Null => &[],
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Product::Null)
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Product::Composite(_))
    }
}

impl Default for Product {
    fn default() -> Self {
        Product::Null
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tea(name: &str) -> Product {
        Product::atomic(name, Money::from_major(20))
    }

    fn milk_tea() -> Product {
        Product::composite("奶茶", vec![tea("牛奶"), tea("紅茶")])
    }

    #[test]
    fn test_atomic_price_is_constant() {
        let black_tea = tea("紅茶");
        assert_eq!(black_tea.name(), "紅茶");
        assert_eq!(black_tea.price().unwrap(), Money::from_major(20));
        assert_eq!(black_tea.price().unwrap(), black_tea.price().unwrap());
    }

    #[test]
    fn test_composite_sums_constituents() {
        let product = milk_tea();
        assert_eq!(product.price().unwrap(), Money::from_major(40));
        assert_eq!(product.constituents().len(), 2);
        assert_eq!(product.constituents()[0].name(), "牛奶");
    }

    #[test]
    fn test_nested_composite_sums_recursively() {
        let set = Product::composite(
            "下午茶組",
            vec![milk_tea(), tea("綠茶"), Product::atomic("餅乾", Money::from_cents(1550))],
        );
        assert_eq!(set.price().unwrap(), Money::from_cents(4000 + 2000 + 1550));
    }

    #[test]
    fn test_empty_composite_is_free() {
        let empty = Product::composite("空杯", Vec::new());
        assert!(empty.price().unwrap().is_zero());
    }

    #[test]
    fn test_null_product() {
        let null = Product::null();
        assert!(null.is_null());
        assert_eq!(null.name(), "");
        assert_eq!(null.to_string(), "");
        assert!(null.price().unwrap().is_zero());
        assert!(null.constituents().is_empty());
        assert_eq!(Product::default(), null);
    }

    #[test]
    fn test_negative_atomic_price_is_rejected_on_read() {
        let broken = Product::atomic("壞茶", Money::from_cents(-1));
        let err = broken.price().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidPrice { ref product, cents: -1 } if product == "壞茶"
        ));
    }

    #[test]
    fn test_negative_constituent_poisons_composite() {
        let broken = Product::composite(
            "奶茶",
            vec![tea("牛奶"), Product::atomic("壞茶", Money::from_major(-100))],
        );
        // The constituent is reported, not the composite
        assert!(matches!(
            broken.price(),
            Err(CoreError::InvalidPrice { ref product, .. }) if product == "壞茶"
        ));
    }

    #[test]
    fn test_composite_overflow() {
        let huge = Product::composite(
            "巨杯",
            vec![
                Product::atomic("a", Money::from_cents(i64::MAX)),
                Product::atomic("b", Money::from_cents(1)),
            ],
        );
        assert!(matches!(
            huge.price(),
            Err(CoreError::PriceOverflow { ref product }) if product == "巨杯"
        ));
    }

    #[test]
    fn test_equality_by_name() {
        assert_eq!(tea("紅茶"), tea("紅茶"));
        assert_ne!(tea("紅茶"), tea("綠茶"));
        // Same name, different structure: still equal
        assert_eq!(Product::atomic("奶茶", Money::from_major(99)), milk_tea());
        assert_eq!(Product::null(), Product::null());
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(tea("紅茶"));
        set.insert(tea("紅茶"));
        set.insert(milk_tea());
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Product::atomic("紅茶", Money::zero())));
    }

    #[test]
    fn test_comparison_with_missing_product() {
        let black_tea = tea("紅茶");
        let missing: Option<&Product> = None;
        assert_ne!(Some(&black_tea), missing);
        assert_eq!(Some(&black_tea), Some(&tea("紅茶")));
    }
}
