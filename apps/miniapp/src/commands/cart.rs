//! # Cart Commands
//!
//! Commands for cart inspection and manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Address  │────►│ Sent to  │       │
//! │  │  Cart    │     │          │     │  form    │     │   bot    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart (sheet.rs)            checkout            │
//! │                   remove_from_cart                  (checkout.rs)       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use urban_core::cart::CartTotals;
use urban_core::{Cart, LineItem};

use crate::bridge::HostBridge;
use crate::session::MenuSession;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    /// Total formatted for the checkout button
    pub total_text: String,
}

impl CartResponse {
    pub(crate) fn build<B: HostBridge>(session: &MenuSession<B>) -> Self {
        let cart: &Cart = &session.cart;
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            total_text: session.config.format_price(cart.total()),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart<B: HostBridge>(session: &MenuSession<B>) -> CartResponse {
    debug!("get_cart command");
    CartResponse::build(session)
}

/// Removes a line from the cart.
///
/// Removing an id that is not in the cart is a no-op.
pub fn remove_from_cart<B: HostBridge>(session: &mut MenuSession<B>, id: &str) -> CartResponse {
    debug!(id = %id, "remove_from_cart command");
    if !session.cart.remove(id) {
        debug!(id = %id, "Cart line already gone");
    }
    CartResponse::build(session)
}

/// Clears all items from the cart.
pub fn clear_cart<B: HostBridge>(session: &mut MenuSession<B>) -> CartResponse {
    debug!("clear_cart command");
    session.cart.clear();
    CartResponse::build(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::session;
    use urban_core::pricing::compose_line_item;
    use urban_core::{Money, SelectedOptions};

    fn add_flat<B: HostBridge>(session: &mut MenuSession<B>, product_id: u32) -> String {
        let product = session.catalog.get(product_id).unwrap().clone();
        let item = compose_line_item(
            &product,
            &SelectedOptions::default(),
            product.flat_price().unwrap(),
        );
        let id = item.id.clone();
        session.cart.push(item);
        id
    }

    #[test]
    fn test_get_cart_empty() {
        let response = get_cart(&session());
        assert!(response.items.is_empty());
        assert_eq!(response.totals.item_count, 0);
        assert_eq!(response.total_text, "0 ₽");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut s = session();
        let croissant = add_flat(&mut s, 19);
        add_flat(&mut s, 20);

        let response = remove_from_cart(&mut s, &croissant);
        assert_eq!(response.totals.item_count, 1);
        assert_eq!(response.totals.total, Money::from_rubles(320));

        let again = remove_from_cart(&mut s, &croissant);
        assert_eq!(again, response);
    }

    #[test]
    fn test_clear_cart() {
        let mut s = session();
        add_flat(&mut s, 19);
        add_flat(&mut s, 19);
        assert_eq!(get_cart(&s).total_text, "360 ₽");

        let response = clear_cart(&mut s);
        assert!(response.items.is_empty());
        assert!(s.cart().is_empty());
    }
}
