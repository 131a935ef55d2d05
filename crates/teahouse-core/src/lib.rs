//! # teahouse-core: Pure Pricing Logic for Teahouse POS
//!
//! Resolves operator-typed product names and prices orders. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Teahouse POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/counter (operator console)                 │   │
//! │  │        read name ──► resolve ──► add ──► print total            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ teahouse-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │─►│ registry  │─►│  product  │─►│   order   │  │   │
//! │  │   │  decls    │  │ name→ctor │  │ price()   │  │ total()   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Atomic, composite and null products
//! - [`catalog`] - The closed list of product declarations
//! - [`registry`] - Name to product resolution, built once
//! - [`order`] - Order and its total
//! - [`validation`] - Declaration checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use teahouse_core::{Money, Order, ProductRegistry};
//!
//! let registry = ProductRegistry::standard()?;
//!
//! let mut order = Order::new();
//! order.add_product(registry.resolve("紅茶"));
//! order.add_product(registry.resolve("綠茶"));
//! order.add_product(registry.resolve("奶茶"));
//!
//! assert_eq!(order.total_price()?, Money::from_major(80));
//! # Ok::<(), teahouse_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod product;
pub mod registry;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, ProductDecl, Recipe};
pub use error::{CatalogError, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine, OrderSummary};
pub use product::{AtomicProduct, CompositeProduct, Product};
pub use registry::ProductRegistry;
