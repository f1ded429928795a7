//! # Product Sheet Commands
//!
//! Opening a product, picking options and adding the result to the cart.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer taps a tile                                                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  {"cmd":"open_product","product_id":4}                                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Латте                                          от 200 ₽       │    │
//! │  │  Объем:   [300] [400]                                          │    │
//! │  │  Молоко:  [Обычное] [Овсяное] [Кокосовое] ...                  │    │
//! │  │  Сироп:   [Карамель] [Ваниль] ...                              │    │
//! │  │                                       [ В корзину  340 ₽ ]     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │  {"cmd":"choose","choice":{"field":"size","value":"400"}}               │
//! │  {"cmd":"choose","choice":{"field":"milk","value":"coconut"}}           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  {"cmd":"add_to_cart"}                                                  │
//! │     incomplete ─► alert "Выберите объем!", sheet stays open            │
//! │     complete   ─► line item appended, sheet closes                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use urban_core::cart::CartTotals;
use urban_core::options::{JuiceFlavor, Milk, Sugar, Syrup, Temperature};
use urban_core::visibility::Incomplete;
use urban_core::{Choice, CoreError, CoreResult, FieldKind, LineItem, Product, ProductId};

use crate::bridge::HostBridge;
use crate::error::ApiError;
use crate::session::MenuSession;
use crate::state::{ProductSheet, SheetView};

/// A pick as the web view sends it. Sizes are named by their label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ChoiceInput {
    Size(String),
    Temperature(Temperature),
    Milk(Milk),
    Syrup(Syrup),
    Sugar(Sugar),
    Cinnamon,
    JuiceFlavor(JuiceFlavor),
}

impl ChoiceInput {
    /// Turns the input into a core choice against the product's sizes.
    pub fn resolve(self, product: &Product) -> CoreResult<Choice> {
        Ok(match self {
            ChoiceInput::Size(label) => match product.size(label.trim()) {
                Some(size) => Choice::Size(size.clone()),
                None if !product.has_sizes() => {
                    return Err(CoreError::FieldNotApplicable {
                        product_id: product.id,
                        field: FieldKind::Size,
                    })
                }
                None => {
                    return Err(CoreError::UnknownSize {
                        product_id: product.id,
                        label,
                    })
                }
            },
            ChoiceInput::Temperature(t) => Choice::Temperature(t),
            ChoiceInput::Milk(m) => Choice::Milk(m),
            ChoiceInput::Syrup(s) => Choice::Syrup(s),
            ChoiceInput::Sugar(s) => Choice::Sugar(s),
            ChoiceInput::Cinnamon => Choice::Cinnamon,
            ChoiceInput::JuiceFlavor(j) => Choice::JuiceFlavor(j),
        })
    }
}

/// Result of `add_to_cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddToCartResponse {
    /// Appended; the sheet is closed.
    Added { item: LineItem, cart: CartTotals },
    /// A mandatory field is unset; the sheet stays open.
    Incomplete { missing: Incomplete, sheet: SheetView },
}

/// Opens the product sheet with nothing selected.
///
/// Replaces any sheet that was already open. Customers cannot open
/// products on the stop list.
pub fn open_product<B: HostBridge>(
    session: &mut MenuSession<B>,
    product_id: ProductId,
) -> Result<SheetView, ApiError> {
    debug!(product_id, "open_product command");

    let product = session.catalog.get(product_id)?;
    if session.admin.is_stopped(product_id) && !session.admin.is_enabled() {
        warn!(product_id, "Stopped product requested");
        return Err(ApiError::unavailable(product_id));
    }

    let sheet = ProductSheet::open(product.clone());
    let view = sheet.view();
    session.sheet = Some(sheet);
    Ok(view)
}

/// Applies one pick to the open sheet and returns the refreshed sheet.
///
/// Picking the selected value again clears it.
pub fn choose<B: HostBridge>(
    session: &mut MenuSession<B>,
    input: ChoiceInput,
) -> Result<SheetView, ApiError> {
    debug!(?input, "choose command");

    let sheet = session.sheet.as_mut().ok_or_else(ApiError::no_product_open)?;
    let result = input
        .resolve(sheet.product())
        .and_then(|choice| sheet.choose(choice));

    if let Err(e) = result {
        warn!(error = %e, "Choice rejected");
        return Err(e.into());
    }

    Ok(sheet.view())
}

/// Closes the sheet without adding anything.
pub fn close_product<B: HostBridge>(session: &mut MenuSession<B>) {
    debug!("close_product command");
    session.sheet = None;
}

/// Adds the configured product to the cart.
///
/// When a size or temperature is still missing, the matching alert goes
/// to the host and the cart is left untouched.
pub fn add_to_cart<B: HostBridge>(
    session: &mut MenuSession<B>,
) -> Result<AddToCartResponse, ApiError> {
    debug!("add_to_cart command");

    let sheet = session.sheet.as_ref().ok_or_else(ApiError::no_product_open)?;
    let item = match sheet.finish() {
        Ok(item) => item,
        Err(missing) => {
            debug!(?missing, "Selection incomplete");
            session.bridge.show_alert(missing.alert_message());
            return Ok(AddToCartResponse::Incomplete {
                missing,
                sheet: sheet.view(),
            });
        }
    };

    info!(product_id = item.product_id, price = %item.price, "Added to cart");
    session.cart.push(item.clone());
    session.sheet = None;

    Ok(AddToCartResponse::Added {
        item,
        cart: CartTotals::from(&session.cart),
    })
}
