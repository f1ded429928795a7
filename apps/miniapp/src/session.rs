//! # Menu Session
//!
//! Everything one Mini App launch owns: configuration, the menu, the cart,
//! the open product sheet, admin mode and the host bridge.

use tracing::info;
use urban_core::{Cart, Catalog, StopList};

use crate::bridge::HostBridge;
use crate::error::{AppError, AppResult};
use crate::state::{AdminState, ConfigState, ProductSheet};

/// Menu shipped with the binary, used when no catalog path is configured.
pub const SAMPLE_CATALOG: &str = include_str!("../catalog.json");

/// Loads the configured catalog file, or the embedded sample menu.
pub fn load_catalog(config: &ConfigState) -> AppResult<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(?path, "Loading catalog from file");
            let json = std::fs::read_to_string(path)?;
            Catalog::from_json(&json)
        }
        None => Catalog::from_json(SAMPLE_CATALOG),
    }
    .map_err(AppError::CatalogLoadFailed)?;

    info!(products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// State of one Mini App launch.
///
/// Commands take `&mut MenuSession`, so they always run one at a time.
pub struct MenuSession<B: HostBridge> {
    pub(crate) config: ConfigState,
    pub(crate) catalog: Catalog,
    pub(crate) cart: Cart,
    pub(crate) sheet: Option<ProductSheet>,
    pub(crate) admin: AdminState,
    pub(crate) bridge: B,
}

impl<B: HostBridge> MenuSession<B> {
    pub fn new(config: ConfigState, catalog: Catalog, stop_list: StopList, bridge: B) -> Self {
        MenuSession {
            config,
            catalog,
            cart: Cart::new(),
            sheet: None,
            admin: AdminState::new(stop_list),
            bridge,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn sheet(&self) -> Option<&ProductSheet> {
        self.sheet.as_ref()
    }

    pub fn admin(&self) -> &AdminState {
        &self.admin
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }
}
