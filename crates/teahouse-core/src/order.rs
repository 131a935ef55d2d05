//! # Order
//!
//! An ordered, append-only list of resolved products for one operator session.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Operations                                 │
//! │                                                                         │
//! │  registry.resolve("紅茶") ──► add_product() ──► products.push(p)        │
//! │  registry.resolve("奶茶") ──► add_product() ──► products.push(p)        │
//! │  registry.resolve("???")  ──► add_product() ──► products.push(Null)     │
//! │                                                                         │
//! │  total_price() ──► Σ price() in insertion order ──► 60                  │
//! │                                                                         │
//! │  No dedup, no removal: the same 紅茶 twice is charged twice.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;

/// A customer order.
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    opened_at: DateTime<Utc>,
    products: Vec<Product>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            products: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Appends a product. Any product is accepted, including `Product::Null`.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Sums every product's price in insertion order.
    ///
    /// Returns zero for an empty order.
    ///
    /// ## Errors
    /// Propagates the first `InvalidPrice` or `PriceOverflow` encountered.
    pub fn total_price(&self) -> CoreResult<Money> {
        self.products.iter().try_fold(Money::zero(), |total, product| {
            total
                .checked_add(product.price()?)
                .ok_or_else(|| CoreError::PriceOverflow {
                    product: product.name().to_string(),
                })
        })
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// One priced line of an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub price_cents: i64,
}

/// Priced snapshot of an order, for receipts and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub item_count: usize,
    pub total_cents: i64,
}

impl TryFrom<&Order> for OrderSummary {
    type Error = CoreError;

    fn try_from(order: &Order) -> CoreResult<Self> {
        let lines = order
            .products()
            .iter()
            .map(|product| {
                Ok(OrderLine {
                    name: product.name().to_string(),
                    price_cents: product.price()?.cents(),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(OrderSummary {
            order_id: order.id(),
            opened_at: order.opened_at(),
            item_count: lines.len(),
            total_cents: order.total_price()?.cents(),
            lines,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ProductRegistry;

    fn order_of(names: &[&str]) -> Order {
        let registry = ProductRegistry::standard().unwrap();
        let mut order = Order::new();
        for name in names {
            order.add_product(registry.resolve(name));
        }
        order
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.total_price().unwrap(), Money::zero());
    }

    #[test]
    fn test_single_black_tea() {
        assert_eq!(order_of(&["紅茶"]).total_price().unwrap(), Money::from_major(20));
    }

    #[test]
    fn test_single_milk_tea() {
        assert_eq!(order_of(&["奶茶"]).total_price().unwrap(), Money::from_major(40));
    }

    #[test]
    fn test_unknown_product_contributes_nothing() {
        let order = order_of(&["珍珠奶茶"]);
        assert_eq!(order.len(), 1);
        assert!(order.products()[0].is_null());
        assert_eq!(order.total_price().unwrap(), Money::zero());
    }

    #[test]
    fn test_mixed_order() {
        let order = order_of(&["紅茶", "綠茶", "奶茶"]);
        assert_eq!(order.total_price().unwrap(), Money::from_major(80));
    }

    #[test]
    fn test_duplicates_are_charged_each_time() {
        let once = order_of(&["烏龍茶"]).total_price().unwrap();
        let twice = order_of(&["烏龍茶", "烏龍茶"]).total_price().unwrap();
        assert_eq!(twice.cents(), once.cents() * 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let order = order_of(&["奶茶", "", "紅茶", "奶茶"]);
        let names: Vec<_> = order.products().iter().map(Product::name).collect();
        assert_eq!(names, ["奶茶", "", "紅茶", "奶茶"]);
    }

    #[test]
    fn test_invalid_price_propagates() {
        let mut order = order_of(&["紅茶"]);
        order.add_product(Product::atomic("壞茶", Money::from_cents(-1)));
        assert!(matches!(
            order.total_price(),
            Err(CoreError::InvalidPrice { cents: -1, .. })
        ));
    }

    #[test]
    fn test_total_overflow() {
        let mut order = Order::new();
        order.add_product(Product::atomic("a", Money::from_cents(i64::MAX)));
        order.add_product(Product::atomic("b", Money::from_cents(1)));
        assert!(matches!(
            order.total_price(),
            Err(CoreError::PriceOverflow { ref product }) if product == "b"
        ));
    }

    #[test]
    fn test_summary() {
        let order = order_of(&["奶茶", "珍珠奶茶"]);
        let summary = OrderSummary::try_from(&order).unwrap();

        assert_eq!(summary.order_id, order.id());
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_cents, 4000);
        assert_eq!(
            summary.lines,
            vec![
                OrderLine { name: "奶茶".to_string(), price_cents: 4000 },
                OrderLine { name: String::new(), price_cents: 0 },
            ]
        );

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalCents"], 4000);
        assert_eq!(json["lines"][0]["priceCents"], 4000);
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        assert_ne!(Order::new().id(), Order::new().id());
    }
}
