//! # Error Types
//!
//! Domain-specific error types for urban-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  urban-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input / catalog validation failures            │
//! │                                                                         │
//! │  NOT an error: visibility::Incomplete                                  │
//! │  └── A missing size or temperature is an ordinary state of the         │
//! │      product sheet, surfaced as an alert and fixed by the user         │
//! │                                                                         │
//! │  urban-miniapp errors (app crate)                                      │
//! │  └── ApiError         - What the web view sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Web view               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::options::FieldKind;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core ordering logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not part of the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A choice was made for a field the product does not offer.
    ///
    /// ## When This Occurs
    /// - Picking a milk for a tea or a juice variant
    /// - Picking a temperature for a coffee
    /// - Anything beyond size for food
    #[error("Product {product_id} has no {field} option")]
    FieldNotApplicable {
        product_id: ProductId,
        field: FieldKind,
    },

    /// A size label that the product does not declare.
    #[error("Product {product_id} has no size '{label}'")]
    UnknownSize { product_id: ProductId, label: String },

    /// A catalog entry broke the authoring contract.
    #[error("Invalid catalog entry {product_id}: {source}")]
    InvalidProduct {
        product_id: ProductId,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Catalog or payload (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for catalog authoring checks and for the checkout address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric size label).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
