//! # Cart
//!
//! Line items and their aggregation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  push   ┌──────────┐  checkout  ┌──────────────────────┐  │
//! │  │  Empty   │───────► │ In Cart  │──────────► │ payload sent to host │  │
//! │  │  Cart    │ ◄────── │          │            │ (cart untouched)     │  │
//! │  └──────────┘  clear  └──────────┘            └──────────────────────┘  │
//! │                          │    ▲                                         │
//! │                          └────┘ remove(id)   (absent id: no-op)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A [`LineItem`] freezes name, details and price when it is created. It is
//! never repriced, even if the catalog changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing::{Description, FRAGMENT_SEPARATOR};
use crate::types::{Product, ProductId};

// =============================================================================
// Line Item
// =============================================================================

/// A priced, described cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique entry id (UUID v4), the handle for removal.
    pub id: String,

    /// Catalog product this entry was configured from.
    pub product_id: ProductId,

    /// Display name: product name plus size.
    pub name: String,

    /// Product name at time of adding (frozen).
    pub base_name: String,

    /// Remaining option fragments.
    pub details: String,

    /// Final price at time of adding (frozen).
    pub price: Money,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates an entry with a fresh id.
    pub fn new(product: &Product, description: Description, price: Money) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id,
            name: description.display_name,
            base_name: product.name.clone(),
            details: description.details,
            price,
            added_at: Utc::now(),
        }
    }

    /// Single-line label used on the order: name followed by details.
    pub fn label(&self) -> String {
        if self.details.is_empty() {
            self.name.clone()
        } else {
            format!("{}{}{}", self.name, FRAGMENT_SEPARATOR, self.details)
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Sum of line prices.
pub fn cart_total(items: &[LineItem]) -> Money {
    items.iter().map(|i| i.price).sum()
}

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Entry ids are unique (fresh UUID per entry)
/// - The same product may appear many times with different options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the entry with `id`.
    ///
    /// Returns `true` if something was removed. An unknown id leaves the
    /// cart unchanged and is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Value-returning form of [`remove`](Self::remove).
    #[must_use]
    pub fn without(mut self, id: &str) -> Self {
        self.remove(id);
        self
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all entry prices.
    pub fn total(&self) -> Money {
        cart_total(&self.items)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
