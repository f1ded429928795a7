//! # Host Bridge Payloads
//!
//! Messages handed to the Telegram client through `WebApp.sendData`.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order                                                                  │
//! │  { "type": "order",                                                     │
//! │    "items": [ { "label": "Латте 400мл (Кокосовое)", "amount": 34000 } ],│
//! │    "address": "Этаж 5, Офис 512" }                                      │
//! │                                                                         │
//! │  Stop list sync (admin)                                                 │
//! │  { "type": "admin_sync", "stop_list": [3, 7] }                          │
//! │                                                                         │
//! │  amount is in kopecks: line price × 100                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::stop_list::StopList;
use crate::types::ProductId;
use crate::validation::{validate_address_part, ValidationResult};

// =============================================================================
// Delivery Address
// =============================================================================

/// Where in the building the order goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct DeliveryAddress {
    floor: String,
    office: String,
}

impl DeliveryAddress {
    /// Validates and trims both parts. Both are required.
    pub fn new(floor: &str, office: &str) -> ValidationResult<Self> {
        Ok(DeliveryAddress {
            floor: validate_address_part("floor", floor)?,
            office: validate_address_part("office", office)?,
        })
    }

    pub fn floor(&self) -> &str {
        &self.floor
    }

    pub fn office(&self) -> &str {
        &self.office
    }
}

impl fmt::Display for DeliveryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Этаж {}, Офис {}", self.floor, self.office)
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// One order line as the bot receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub label: String,
    /// Price in minor units (kopecks).
    pub amount: i64,
}

/// Everything the Mini App ever sends to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgePayload {
    Order {
        items: Vec<OrderLine>,
        address: String,
    },
    AdminSync {
        stop_list: Vec<ProductId>,
    },
}

impl BridgePayload {
    /// Builds the order submission for the whole cart, in cart order.
    ///
    /// ```rust
    /// use urban_core::payload::{BridgePayload, DeliveryAddress};
    /// use urban_core::Cart;
    ///
    /// let address = DeliveryAddress::new("5", "512").unwrap();
    /// let payload = BridgePayload::order(&Cart::new(), &address, 100);
    /// assert_eq!(
    ///     payload.to_json().unwrap(),
    ///     r#"{"type":"order","items":[],"address":"Этаж 5, Офис 512"}"#
    /// );
    /// ```
    pub fn order(cart: &Cart, address: &DeliveryAddress, minor_per_major: i64) -> Self {
        BridgePayload::Order {
            items: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    label: item.label(),
                    amount: item.price.to_minor_units(minor_per_major),
                })
                .collect(),
            address: address.to_string(),
        }
    }

    /// Builds the stop-list sync message.
    pub fn admin_sync(stop_list: &StopList) -> Self {
        BridgePayload::AdminSync {
            stop_list: stop_list.ids().to_vec(),
        }
    }

    /// Serialized form handed to `sendData`.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Choice, Milk, SelectedOptions};
    use crate::pricing::{compose_line_item, compute_price};
    use crate::types::{Category, Product, SizeOption};
    use crate::MINOR_UNITS_PER_RUBLE;

    #[test]
    fn test_address() {
        let address = DeliveryAddress::new(" 3 ", "Бухгалтерия").unwrap();
        assert_eq!(address.to_string(), "Этаж 3, Офис Бухгалтерия");
        assert_eq!(address.floor(), "3");
        assert!(DeliveryAddress::new("", "12").is_err());
        assert!(DeliveryAddress::new("3", " ").is_err());
    }

    #[test]
    fn test_order_payload() {
        let latte = Product::sized(
            1,
            Category::Coffee,
            "Латте",
            vec![SizeOption::new(200, 150), SizeOption::new(400, 250)],
        );
        let croissant = Product::flat(2, Category::Food, "Круассан", 180);

        let options = SelectedOptions::default()
            .toggled(Choice::Size(SizeOption::new(400, 250)))
            .toggled(Choice::Milk(Milk::Coconut));

        let mut cart = Cart::new();
        cart.push(compose_line_item(&latte, &options, compute_price(&latte, &options)));
        let plain = SelectedOptions::default();
        cart.push(compose_line_item(&croissant, &plain, compute_price(&croissant, &plain)));

        let address = DeliveryAddress::new("5", "512").unwrap();
        let payload = BridgePayload::order(&cart, &address, MINOR_UNITS_PER_RUBLE);

        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "order",
                "items": [
                    { "label": "Латте 400мл (Кокосовое)", "amount": 34000 },
                    { "label": "Круассан", "amount": 18000 }
                ],
                "address": "Этаж 5, Офис 512"
            })
        );
    }

    #[test]
    fn test_admin_sync_payload() {
        let payload = BridgePayload::admin_sync(&StopList::parse("3,7"));
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"type":"admin_sync","stop_list":[3,7]}"#
        );
    }
}
