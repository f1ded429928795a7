//! # Config Commands
//!
//! Public view of the session configuration.

use serde::Serialize;
use tracing::debug;

use crate::bridge::HostBridge;
use crate::session::MenuSession;

/// What the web view may know about the configuration.
///
/// The admin PIN never leaves the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub store_name: String,
    pub currency_symbol: String,
    pub admin: bool,
}

/// Gets the public configuration.
pub fn get_config<B: HostBridge>(session: &MenuSession<B>) -> ConfigResponse {
    debug!("get_config command");
    ConfigResponse {
        store_name: session.config.store_name.clone(),
        currency_symbol: session.config.currency_symbol.clone(),
        admin: session.admin.is_enabled(),
    }
}
