//! # Error Types
//!
//! Domain-specific error types for teahouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError           - price evaluation failures                       │
//! │  └── CatalogError    - startup-time catalog configuration errors       │
//! │      └── ValidationError - malformed display names / variant keys      │
//! │                                                                         │
//! │  Unknown product names are NOT errors: they resolve to Product::Null.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, variant key)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while pricing products or orders.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A price evaluated to a negative amount.
    ///
    /// ## When This Occurs
    /// Only when a catalog entry is mis-declared. It is a programming error
    /// surfaced to the caller of `price()`, never clamped to zero.
    #[error("Invalid price for '{product}': {cents} cents is negative")]
    InvalidPrice { product: String, cents: i64 },

    /// Summing constituent prices overflowed the money representation.
    #[error("Price of '{product}' overflows")]
    PriceOverflow { product: String },

    /// Catalog could not be turned into a registry.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog configuration errors, reported when the registry is built.
///
/// All of these abort initialization before any name is resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two variants declare the same display name.
    #[error("Duplicate catalog name '{name}' declared by {first} and {second}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// Two declarations use the same variant key.
    #[error("Duplicate variant key '{key}'")]
    DuplicateKey { key: String },

    /// A composite references a variant that is not declared before it.
    #[error("Variant {variant} references undeclared constituent {constituent}")]
    UnknownConstituent {
        variant: String,
        constituent: String,
    },

    /// A declaration failed validation.
    #[error("Invalid declaration: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Declaration field validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for registry construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
