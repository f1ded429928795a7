//! # urban-core: Pure Ordering Logic for Urban Lunch
//!
//! This crate is the **heart** of the Urban Lunch Mini App. It decides which
//! customization options a product offers, when a selection is complete, what
//! it costs, and how a cart is turned into an order for the Telegram host.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Urban Lunch Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Telegram Mini App web view                       │   │
//! │  │    Categories ──► Product sheet ──► Cart ──► Checkout           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 urban-miniapp (session layer)                   │   │
//! │  │    open_product, choose, add_to_cart, checkout, etc.            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ urban-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  options  │  │ visibility │  │  pricing  │  │   cart    │  │   │
//! │  │   │ Selected  │  │  FieldSet  │  │  Price    │  │ LineItem  │  │   │
//! │  │   │ Options   │  │ Incomplete │  │ Describe  │  │   Cart    │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO HOST CALLS • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Product, Category, SizeOption)
//! - [`options`] - Option value sets and the `SelectedOptions` record
//! - [`visibility`] - Which fields apply to a product, and completeness
//! - [`pricing`] - Price and description composer
//! - [`cart`] - Line items and cart aggregation
//! - [`catalog`] - Catalog documents, browsing and price hints
//! - [`stop_list`] - Temporarily unavailable products
//! - [`payload`] - Messages handed to the Telegram host
//! - [`money`] - Whole-ruble money type
//! - [`alerts`] - Fixed user-facing alert texts
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use urban_core::options::{Choice, Milk, SelectedOptions, Temperature};
//! use urban_core::types::{Category, Product, SizeOption};
//! use urban_core::{pricing, visibility};
//!
//! let latte = Product::sized(
//!     7,
//!     Category::Ice,
//!     "Айс латте",
//!     vec![SizeOption::new(300, 220), SizeOption::new(400, 260)],
//! );
//!
//! let options = SelectedOptions::default()
//!     .toggled(Choice::Size(SizeOption::new(400, 260)))
//!     .toggled(Choice::Milk(Milk::Oat));
//!
//! // Still missing a temperature
//! assert!(!visibility::is_complete(&latte, &options));
//!
//! let options = options.toggled(Choice::Temperature(Temperature::Cold));
//! assert!(visibility::is_complete(&latte, &options));
//!
//! // 260 + 90 (plant milk on a large cup)
//! assert_eq!(pricing::compute_price(&latte, &options).rubles(), 350);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod alerts;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod options;
pub mod payload;
pub mod pricing;
pub mod stop_list;
pub mod types;
pub mod validation;
pub mod visibility;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use options::{Choice, FieldKind, SelectedOptions};
pub use payload::BridgePayload;
pub use stop_list::StopList;
pub use types::{Category, Product, ProductId, SizeOption};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minor currency units per ruble (kopecks).
///
/// The Telegram host expects order amounts in the minor unit, so every line
/// price is multiplied by this factor when the order payload is built.
pub const MINOR_UNITS_PER_RUBLE: i64 = 100;
