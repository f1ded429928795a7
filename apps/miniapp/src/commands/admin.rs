//! # Admin Commands
//!
//! Hidden staff mode for editing the stop list.
//!
//! ```text
//!  unlock_admin(pin) ──► admin on, alert "Режим администратора включен"
//!        │
//!        ▼
//!  toggle_stop(id) ...  (tiles stay visible, flagged)
//!        │
//!        ▼
//!  save_stop_list ──► sendData {"type":"admin_sync","stop_list":[...]}
//! ```

use serde::Serialize;
use tracing::{debug, info};
use urban_core::{alerts, BridgePayload, ProductId};

use crate::bridge::HostBridge;
use crate::error::ApiError;
use crate::session::MenuSession;

/// Admin mode and the working stop list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub admin: bool,
    pub stop_list: Vec<ProductId>,
}

impl AdminResponse {
    fn build<B: HostBridge>(session: &MenuSession<B>) -> Self {
        AdminResponse {
            admin: session.admin.is_enabled(),
            stop_list: session.admin.stop_list().ids().to_vec(),
        }
    }
}

/// Turns on admin mode when the PIN matches.
///
/// A wrong PIN is a silent no-op.
pub fn unlock_admin<B: HostBridge>(session: &mut MenuSession<B>, pin: &str) -> AdminResponse {
    debug!("unlock_admin command");
    let expected = session.config.admin_pin.clone();
    if session.admin.unlock(pin, &expected) {
        session.bridge.show_alert(alerts::ADMIN_ENABLED);
    }
    AdminResponse::build(session)
}

/// Adds or removes a product on the stop list.
pub fn toggle_stop<B: HostBridge>(
    session: &mut MenuSession<B>,
    product_id: ProductId,
) -> Result<AdminResponse, ApiError> {
    debug!(product_id, "toggle_stop command");

    session.catalog.get(product_id)?;
    let stopped = session
        .admin
        .toggle_stop(product_id)
        .ok_or_else(|| ApiError::forbidden("toggle_stop"))?;

    info!(product_id, stopped, "Stop list changed");
    Ok(AdminResponse::build(session))
}

/// Sends the stop list to the bot.
pub fn save_stop_list<B: HostBridge>(
    session: &mut MenuSession<B>,
) -> Result<AdminResponse, ApiError> {
    debug!("save_stop_list command");

    if !session.admin.is_enabled() {
        return Err(ApiError::forbidden("save_stop_list"));
    }

    let json = BridgePayload::admin_sync(session.admin.stop_list()).to_json()?;
    session.bridge.send_data(&json);
    info!(count = session.admin.stop_list().len(), "Stop list sent");

    Ok(AdminResponse::build(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::session::testing::{session, session_with};
    use crate::state::ConfigState;
    use urban_core::StopList;

    #[test]
    fn test_unlock_admin() {
        let mut s = session();
        let response = unlock_admin(&mut s, "1234");
        assert!(!response.admin);
        assert!(s.bridge().events().is_empty());

        let response = unlock_admin(&mut s, "7654");
        assert!(response.admin);
        assert_eq!(s.bridge().alerts(), vec![alerts::ADMIN_ENABLED]);
    }

    #[test]
    fn test_unlock_uses_configured_pin() {
        let config = ConfigState {
            admin_pin: "0042".to_string(),
            ..ConfigState::default()
        };
        let mut s = session_with(config, StopList::default());
        assert!(!unlock_admin(&mut s, "7654").admin);
        assert!(unlock_admin(&mut s, "0042").admin);
    }

    #[test]
    fn test_stop_list_requires_admin() {
        let mut s = session();
        assert_eq!(toggle_stop(&mut s, 3).unwrap_err().code, ErrorCode::Forbidden);
        assert_eq!(save_stop_list(&mut s).unwrap_err().code, ErrorCode::Forbidden);
        assert!(s.bridge().sent().is_empty());
    }

    #[test]
    fn test_toggle_and_save() {
        let mut s = session_with(ConfigState::default(), StopList::parse("7"));
        unlock_admin(&mut s, "7654");

        toggle_stop(&mut s, 3).unwrap();
        let response = toggle_stop(&mut s, 7).unwrap();
        assert_eq!(response.stop_list, vec![3]);

        assert_eq!(toggle_stop(&mut s, 500).unwrap_err().code, ErrorCode::NotFound);

        save_stop_list(&mut s).unwrap();
        assert_eq!(
            s.bridge().sent(),
            vec![r#"{"type":"admin_sync","stop_list":[3]}"#]
        );
    }
}
