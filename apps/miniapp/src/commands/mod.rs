//! # Commands Module
//!
//! All commands exposed to the Mini App web view.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Command enum, dispatch)
//! ├── catalog.rs   ◄─── Categories and tiles
//! ├── sheet.rs     ◄─── Product sheet and add to cart
//! ├── cart.rs      ◄─── Cart inspection and manipulation
//! ├── checkout.rs  ◄─── Order hand-off
//! ├── admin.rs     ◄─── Admin mode and stop list
//! └── config.rs    ◄─── Public configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Web view                                                               │
//! │  ────────                                                               │
//! │  {"cmd":"open_product","product_id":4}                                  │
//! │         │                                                               │
//! │         │ (one JSON object per line)                                    │
//! │         ▼                                                               │
//! │  Rust session                                                           │
//! │  ────────────                                                           │
//! │  handle_line ──► Command ──► dispatch ──► sheet::open_product(..)       │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"ok":true,"data":{...}}   or   {"ok":false,"error":{...}}             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bridge calls made while a command runs (alerts, `sendData`) are written
//! before the command's reply.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod sheet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use urban_core::{Category, ProductId};

use crate::bridge::HostBridge;
use crate::error::ApiError;
use crate::session::MenuSession;

pub use sheet::ChoiceInput;

/// A command from the web view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    GetConfig,
    ListCategories,
    Browse { category: Category },
    OpenProduct { product_id: ProductId },
    Choose { choice: ChoiceInput },
    CloseProduct,
    AddToCart,
    GetCart,
    RemoveFromCart { id: String },
    ClearCart,
    Checkout { floor: String, office: String },
    UnlockAdmin { pin: String },
    ToggleStop { product_id: ProductId },
    SaveStopList,
}

/// One reply line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Ok { ok: bool, data: Value },
    Err { ok: bool, error: ApiError },
}

impl From<Result<Value, ApiError>> for Reply {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Reply::Ok { ok: true, data },
            Err(error) => Reply::Err { ok: false, error },
        }
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

/// Runs one command against the session.
pub fn dispatch<B: HostBridge>(
    session: &mut MenuSession<B>,
    command: Command,
) -> Result<Value, ApiError> {
    match command {
        Command::GetConfig => to_value(config::get_config(session)),
        Command::ListCategories => to_value(catalog::list_categories(session)),
        Command::Browse { category } => to_value(catalog::browse(session, category)),
        Command::OpenProduct { product_id } => to_value(sheet::open_product(session, product_id)?),
        Command::Choose { choice } => to_value(sheet::choose(session, choice)?),
        Command::CloseProduct => to_value(sheet::close_product(session)),
        Command::AddToCart => to_value(sheet::add_to_cart(session)?),
        Command::GetCart => to_value(cart::get_cart(session)),
        Command::RemoveFromCart { id } => to_value(cart::remove_from_cart(session, &id)),
        Command::ClearCart => to_value(cart::clear_cart(session)),
        Command::Checkout { floor, office } => {
            to_value(checkout::checkout(session, &floor, &office)?)
        }
        Command::UnlockAdmin { pin } => to_value(admin::unlock_admin(session, &pin)),
        Command::ToggleStop { product_id } => to_value(admin::toggle_stop(session, product_id)?),
        Command::SaveStopList => to_value(admin::save_stop_list(session)?),
    }
}

/// Parses a command line, runs it and returns the reply.
pub fn handle_line<B: HostBridge>(session: &mut MenuSession<B>, line: &str) -> Reply {
    let result = serde_json::from_str::<Command>(line)
        .map_err(|e| {
            warn!(error = %e, "Unparseable command");
            ApiError::bad_command(e.to_string())
        })
        .and_then(|command| dispatch(session, command));

    if let Err(e) = &result {
        warn!(code = ?e.code, message = %e.message, "Command failed");
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::session::testing::session;

    fn run<B: HostBridge>(s: &mut MenuSession<B>, line: &str) -> Value {
        serde_json::to_value(handle_line(s, line)).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        let cmd: Command = serde_json::from_str(r#"{"cmd":"open_product","product_id":3}"#).unwrap();
        assert_eq!(cmd, Command::OpenProduct { product_id: 3 });

        let cmd: Command = serde_json::from_str(r#"{"cmd":"browse","category":"punsh"}"#).unwrap();
        assert_eq!(cmd, Command::Browse { category: Category::Punsh });

        let cmd: Command = serde_json::from_str(
            r#"{"cmd":"choose","choice":{"field":"sugar","value":"grams10"}}"#,
        )
        .unwrap();
        assert!(matches!(cmd, Command::Choose { .. }));

        let cmd: Command = serde_json::from_str(r#"{"cmd":"save_stop_list"}"#).unwrap();
        assert_eq!(cmd, Command::SaveStopList);
    }

    #[test]
    fn test_reply_shapes() {
        let mut s = session();

        let ok = run(&mut s, r#"{"cmd":"get_config"}"#);
        assert_eq!(ok["ok"], true);
        assert_eq!(ok["data"]["storeName"], "Urban Lunch");

        let err = run(&mut s, r#"{"cmd":"open_product","product_id":999}"#);
        assert_eq!(err["ok"], false);
        assert_eq!(err["error"]["code"], "NOT_FOUND");

        let bad = run(&mut s, r#"{"cmd":"fly"}"#);
        assert_eq!(bad["error"]["code"], "BAD_COMMAND");

        let bad = run(&mut s, "not json");
        assert_eq!(bad["ok"], false);
    }

    #[test]
    fn test_full_order_over_lines() {
        let mut s = session();
        run(&mut s, r#"{"cmd":"open_product","product_id":3}"#);
        run(&mut s, r#"{"cmd":"choose","choice":{"field":"size","value":"300"}}"#);
        run(&mut s, r#"{"cmd":"choose","choice":{"field":"sugar","value":"grams5"}}"#);
        let added = run(&mut s, r#"{"cmd":"add_to_cart"}"#);
        assert_eq!(added["data"]["status"], "added");
        assert_eq!(added["data"]["item"]["name"], "Капучино 300мл");

        let cart = run(&mut s, r#"{"cmd":"get_cart"}"#);
        assert_eq!(cart["data"]["totalText"], "200 ₽");

        let sent = run(&mut s, r#"{"cmd":"checkout","floor":"3","office":"301"}"#);
        assert_eq!(sent["data"]["status"], "sent");

        let payload: Value = serde_json::from_str(s.bridge().sent()[0]).unwrap();
        assert_eq!(payload["items"][0]["label"], "Капучино 300мл сахар 5г");
        assert_eq!(payload["items"][0]["amount"], 20000);
    }

    #[test]
    fn test_dispatch_error_code_passthrough() {
        let mut s = session();
        let err = dispatch(&mut s, Command::ToggleStop { product_id: 1 }).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
