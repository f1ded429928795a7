//! # Admin State
//!
//! Admin mode flag and the working copy of the stop list.

use tracing::{info, warn};
use urban_core::{ProductId, StopList};

/// Admin mode and stop-list state.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    enabled: bool,
    stop_list: StopList,
}

impl AdminState {
    /// Starts in customer mode with the stop list from the launch URL.
    pub fn new(stop_list: StopList) -> Self {
        AdminState {
            enabled: false,
            stop_list,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stop_list(&self) -> &StopList {
        &self.stop_list
    }

    pub fn is_stopped(&self, id: ProductId) -> bool {
        self.stop_list.contains(id)
    }

    /// Turns admin mode on if `pin` matches. A wrong PIN changes nothing.
    ///
    /// Returns `true` only when this call switched the mode on.
    pub fn unlock(&mut self, pin: &str, expected: &str) -> bool {
        if pin.trim() != expected {
            warn!("Admin unlock rejected");
            return false;
        }
        if self.enabled {
            return false;
        }
        self.enabled = true;
        info!("Admin mode enabled");
        true
    }

    /// Flips a product on the stop list. Returns the new stopped state,
    /// or `None` outside admin mode.
    pub fn toggle_stop(&mut self, id: ProductId) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        Some(self.stop_list.toggle(id))
    }
}
