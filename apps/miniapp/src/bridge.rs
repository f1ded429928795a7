//! # Host Bridge
//!
//! The only way the session talks to the Telegram client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuSession ──► HostBridge::send_data(json) ──► WebApp.sendData        │
//! │              └─► HostBridge::show_alert(text) ──► WebApp.showAlert      │
//! │                                                                         │
//! │  Fire-and-forget: the session never waits for, retries, or reconciles  │
//! │  on the outcome of either call.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::io::Write;
use tracing::error;

/// Outbound calls to the hosting Telegram client.
pub trait HostBridge {
    /// Hands a serialized payload to the host.
    fn send_data(&mut self, payload: &str);

    /// Shows a blocking alert to the customer.
    fn show_alert(&mut self, message: &str);
}

/// A bridge call, as written by [`WriterBridge`] and kept by [`RecordingBridge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeEvent {
    SendData { payload: String },
    Alert { message: String },
}

// =============================================================================
// Writer Bridge
// =============================================================================

/// Writes each bridge call as one JSON line.
///
/// Used by the stdin/stdout driver, where the embedding process forwards
/// the lines to the real web view.
#[derive(Debug)]
pub struct WriterBridge<W: Write> {
    writer: W,
}

impl<W: Write> WriterBridge<W> {
    pub fn new(writer: W) -> Self {
        WriterBridge { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: &BridgeEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to encode bridge event");
                return;
            }
        };
        if let Err(e) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
            error!(error = %e, "Failed to write bridge event");
        }
    }
}

impl<W: Write> HostBridge for WriterBridge<W> {
    fn send_data(&mut self, payload: &str) {
        self.emit(&BridgeEvent::SendData {
            payload: payload.to_string(),
        });
    }

    fn show_alert(&mut self, message: &str) {
        self.emit(&BridgeEvent::Alert {
            message: message.to_string(),
        });
    }
}

// =============================================================================
// Recording Bridge
// =============================================================================

/// Keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    events: Vec<BridgeEvent>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BridgeEvent] {
        &self.events
    }

    /// Payloads passed to `send_data`, oldest first.
    pub fn sent(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BridgeEvent::SendData { payload } => Some(payload.as_str()),
                BridgeEvent::Alert { .. } => None,
            })
            .collect()
    }

    /// Alert texts, oldest first.
    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BridgeEvent::Alert { message } => Some(message.as_str()),
                BridgeEvent::SendData { .. } => None,
            })
            .collect()
    }
}

impl HostBridge for RecordingBridge {
    fn send_data(&mut self, payload: &str) {
        self.events.push(BridgeEvent::SendData {
            payload: payload.to_string(),
        });
    }

    fn show_alert(&mut self, message: &str) {
        self.events.push(BridgeEvent::Alert {
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_bridge_writes_json_lines() {
        let mut bridge = WriterBridge::new(Vec::new());
        bridge.show_alert("Выберите объем!");
        bridge.send_data(r#"{"type":"admin_sync","stop_list":[]}"#);

        let out = String::from_utf8(bridge.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"event":"alert","message":"Выберите объем!"}"#);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "send_data");
        assert_eq!(second["payload"], r#"{"type":"admin_sync","stop_list":[]}"#);
    }

    #[test]
    fn test_recording_bridge_splits_events() {
        let mut bridge = RecordingBridge::new();
        bridge.send_data("a");
        bridge.show_alert("b");
        bridge.send_data("c");
        assert_eq!(bridge.sent(), vec!["a", "c"]);
        assert_eq!(bridge.alerts(), vec!["b"]);
        assert_eq!(bridge.events().len(), 3);
    }
}
