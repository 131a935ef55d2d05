//! # Validation Module
//!
//! Checks applied to catalog declarations while the registry is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Registry build (startup)                                     │
//! │  ├── THIS MODULE: display name / variant key format                    │
//! │  └── Duplicate names, unknown constituents (registry.rs)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Price read (Product::price)                                  │
//! │  └── Negative price → CoreError::InvalidPrice                         │
//! │                                                                         │
//! │  Operator input is NEVER validated: unknown names resolve to Null.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use teahouse_core::validation::{validate_display_name, validate_variant_key};
//!
//! assert!(validate_display_name("奶茶").is_ok());
//! assert!(validate_variant_key("MilkTea").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest display name accepted, counted in characters (not bytes).
pub const MAX_DISPLAY_NAME_CHARS: usize = 64;

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty or whitespace only (empty is reserved for Null)
/// - At most 64 characters; CJK names count one per character
/// - No control characters (names are printed on receipts)
///
/// ## Example
/// ```rust
/// use teahouse_core::validation::validate_display_name;
///
/// assert!(validate_display_name("烏龍茶").is_ok());
/// assert!(validate_display_name("").is_err());
/// assert!(validate_display_name("紅\n茶").is_err());
/// ```
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_DISPLAY_NAME_CHARS,
        });
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a variant key (the identity a composite refers to).
///
/// ## Rules
/// - Must not be empty
/// - ASCII letters, digits and underscores only, not starting with a digit
pub fn validate_variant_key(key: &str) -> ValidationResult<()> {
    let Some(first) = key.chars().next() else {
        return Err(ValidationError::Required {
            field: "key".to_string(),
        });
    };

    if first.is_ascii_digit()
        || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "key".to_string(),
            reason: "must be an ASCII identifier".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("紅茶").is_ok());
        assert!(validate_display_name("Earl Grey").is_ok());

        assert!(matches!(
            validate_display_name("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_display_name("\t紅茶"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_display_name_length_counts_chars() {
        // 64 CJK chars is 192 bytes but still within the limit
        let at_limit = "茶".repeat(MAX_DISPLAY_NAME_CHARS);
        assert!(validate_display_name(&at_limit).is_ok());

        let over = "茶".repeat(MAX_DISPLAY_NAME_CHARS + 1);
        assert!(matches!(
            validate_display_name(&over),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_validate_variant_key() {
        assert!(validate_variant_key("BlackTea").is_ok());
        assert!(validate_variant_key("tea_2").is_ok());

        assert!(validate_variant_key("").is_err());
        assert!(validate_variant_key("2tea").is_err());
        assert!(validate_variant_key("Black Tea").is_err());
        assert!(validate_variant_key("紅茶").is_err());
    }
}
