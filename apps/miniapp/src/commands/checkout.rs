//! # Checkout Command
//!
//! Hands the cart to the bot as an order payload.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {"cmd":"checkout","floor":"5","office":"512"}                          │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Floor or office blank?  ─► alert "Укажите этаж и офис!"    │    │
//! │  │  2. Cart empty?             ─► alert "Корзина пуста"           │    │
//! │  │  3. Build order payload (amounts in kopecks)                   │    │
//! │  │  4. bridge.send_data(json)   (fire-and-forget)                 │    │
//! │  │  5. Clear cart if configured                                   │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};
use urban_core::error::ValidationError;
use urban_core::payload::DeliveryAddress;
use urban_core::{alerts, BridgePayload, Money};

use crate::bridge::HostBridge;
use crate::error::ApiError;
use crate::session::MenuSession;

/// Result of `checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutResponse {
    /// The order was handed to the host.
    Sent {
        item_count: usize,
        total: Money,
        address: String,
    },
    /// Nothing was sent; the alert text was shown.
    Rejected { alert: String },
}

/// Submits the cart with the delivery address.
///
/// Missing address parts and an empty cart are reported through an alert,
/// not as errors. An over-long address part is a validation error.
pub fn checkout<B: HostBridge>(
    session: &mut MenuSession<B>,
    floor: &str,
    office: &str,
) -> Result<CheckoutResponse, ApiError> {
    debug!(floor = %floor, office = %office, "checkout command");

    let address = match DeliveryAddress::new(floor, office) {
        Ok(address) => address,
        Err(ValidationError::Required { .. }) => {
            return Ok(reject(session, alerts::ADDRESS_REQUIRED));
        }
        Err(e) => return Err(ApiError::validation(e.to_string())),
    };

    if session.cart.is_empty() {
        return Ok(reject(session, alerts::CART_EMPTY));
    }

    let payload = BridgePayload::order(
        &session.cart,
        &address,
        session.config.minor_units_per_major,
    );
    let json = payload.to_json()?;
    session.bridge.send_data(&json);

    let response = CheckoutResponse::Sent {
        item_count: session.cart.len(),
        total: session.cart.total(),
        address: address.to_string(),
    };
    info!(
        items = session.cart.len(),
        total = %session.cart.total(),
        address = %address,
        "Order handed to host"
    );

    if session.config.clear_cart_on_checkout {
        session.cart.clear();
    }

    Ok(response)
}

fn reject<B: HostBridge>(session: &mut MenuSession<B>, alert: &str) -> CheckoutResponse {
    debug!(alert, "Checkout rejected");
    session.bridge.show_alert(alert);
    CheckoutResponse::Rejected {
        alert: alert.to_string(),
    }
}
