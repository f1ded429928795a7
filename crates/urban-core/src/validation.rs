//! # Validation Module
//!
//! Input validation utilities for Urban Lunch.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog authoring (load time)                                │
//! │  ├── Names, prices, size labels                                        │
//! │  └── Exactly one pricing source per product                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session commands                                             │
//! │  ├── Choice applicability (visibility module)                          │
//! │  └── THIS MODULE: checkout address fields                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Completeness (visibility module)                             │
//! │  └── Not an error: an alert, fixed by the customer                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of the floor / office fields.
pub const MAX_ADDRESS_PART_LEN: usize = 50;

/// Highest price, in rubles, a catalog entry may carry.
pub const MAX_PRICE_RUBLES: i64 = 1_000_000;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use urban_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Капучино").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed, negative or absurd amounts are not.
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.rubles() > MAX_PRICE_RUBLES {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_RUBLES,
        });
    }

    Ok(())
}

/// Parses a size label into its volume in millilitres.
///
/// Size labels are the volume printed on the menu. Anything that is not a
/// positive integer is rejected so that size tiers never depend on guessing.
///
/// ## Example
/// ```rust
/// use urban_core::validation::validate_size_label;
///
/// assert_eq!(validate_size_label("400"), Ok(400));
/// assert!(validate_size_label("large").is_err());
/// assert!(validate_size_label("0").is_err());
/// ```
pub fn validate_size_label(label: &str) -> ValidationResult<u32> {
    let volume: u32 = label
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "size".to_string(),
            reason: format!("'{}' is not a volume in ml", label),
        })?;

    if volume == 0 {
        return Err(ValidationError::OutOfRange {
            field: "size".to_string(),
            min: 1,
            max: u32::MAX as i64,
        });
    }

    Ok(volume)
}

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates one part of the delivery address (floor or office).
///
/// ## Returns
/// The trimmed value.
pub fn validate_address_part(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_ADDRESS_PART_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ADDRESS_PART_LEN,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Раф лавандовый").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"Я".repeat(200)).is_ok());
        assert!(validate_product_name(&"Я".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::zero()).is_ok());
        assert!(validate_price("price", Money::from_rubles(250)).is_ok());
        assert!(validate_price("price", Money::from_rubles(-1)).is_err());
        assert!(validate_price("price", Money::from_rubles(MAX_PRICE_RUBLES)).is_ok());
        assert_eq!(
            validate_price("size price", Money::from_rubles(i64::MAX / 10)),
            Err(ValidationError::OutOfRange {
                field: "size price".to_string(),
                min: 0,
                max: MAX_PRICE_RUBLES,
            })
        );
    }

    #[test]
    fn test_validate_size_label() {
        assert_eq!(validate_size_label("300"), Ok(300));
        assert_eq!(validate_size_label(" 250 "), Ok(250));
        assert!(validate_size_label("").is_err());
        assert!(validate_size_label("300ml").is_err());
        assert!(validate_size_label("-300").is_err());
        assert!(validate_size_label("0").is_err());
    }

    #[test]
    fn test_validate_address_part() {
        assert_eq!(validate_address_part("floor", " 5 "), Ok("5".to_string()));
        assert_eq!(
            validate_address_part("office", "  "),
            Err(ValidationError::Required {
                field: "office".to_string()
            })
        );
        assert!(validate_address_part("office", &"1".repeat(51)).is_err());
    }
}
