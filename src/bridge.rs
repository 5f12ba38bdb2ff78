//! Cross-window bridge
//!
//! Floating tabs live in separate top-level windows owned by the host
//! windowing system. The shell only ever asks the host to create, close or
//! raise such windows; it never waits on them. Dragging a detached window back
//! over the docking surface carries a small JSON payload identifying the
//! plugin and the window it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME-like type under which detached windows advertise their drag payload
pub const PLUGIN_DRAG_MIME: &str = "application/x-dockshell-plugin";

/// Opaque handle to a top-level window
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub String);

impl WindowHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors reported by the windowing host
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The host refused or failed to open a window
    CreateFailed { plugin: String, reason: String },
    /// The handle does not name an open window
    UnknownWindow(WindowHandle),
    /// A drag payload could not be decoded
    InvalidPayload(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::CreateFailed { plugin, reason } => {
                write!(f, "failed to open window for {}: {}", plugin, reason)
            }
            BridgeError::UnknownWindow(handle) => write!(f, "no open window {}", handle),
            BridgeError::InvalidPayload(e) => write!(f, "invalid drag payload: {}", e),
        }
    }
}

impl std::error::Error for BridgeError {}

/// The windowing host that owns detached windows
pub trait WindowHost {
    fn create_detached_window(&mut self, plugin: &str) -> Result<WindowHandle, BridgeError>;
    fn close_window(&mut self, handle: &WindowHandle) -> Result<(), BridgeError>;
    fn bring_to_front(&mut self, handle: &WindowHandle) -> Result<(), BridgeError>;
}

/// Payload carried when a detached window is dragged back onto the dock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub plugin_name: String,
    #[serde(default, alias = "windowId", skip_serializing_if = "Option::is_none")]
    pub origin_window_id: Option<WindowHandle>,
}

impl DragPayload {
    pub fn new(plugin_name: impl Into<String>, origin: Option<WindowHandle>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            origin_window_id: origin,
        }
    }

    /// Decode the JSON text found under `PLUGIN_DRAG_MIME`
    pub fn from_json(data: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(data).map_err(|e| BridgeError::InvalidPayload(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

// ============================================================================
// Headless host
// ============================================================================

/// A `WindowHost` with no real windows.
///
/// Hands out `window-N` handles and tracks which are open and which one is
/// frontmost. Used by the command-line shell and by tests.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    next_window: u64,
    open: Vec<WindowHandle>,
    front: Option<WindowHandle>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_windows(&self) -> &[WindowHandle] {
        &self.open
    }

    pub fn front(&self) -> Option<&WindowHandle> {
        self.front.as_ref()
    }

    fn position(&self, handle: &WindowHandle) -> Result<usize, BridgeError> {
        self.open
            .iter()
            .position(|h| h == handle)
            .ok_or_else(|| BridgeError::UnknownWindow(handle.clone()))
    }
}

impl WindowHost for HeadlessHost {
    fn create_detached_window(&mut self, plugin: &str) -> Result<WindowHandle, BridgeError> {
        self.next_window += 1;
        let handle = WindowHandle(format!("window-{}", self.next_window));
        tracing::info!(%handle, plugin, "opened detached window");
        self.open.push(handle.clone());
        self.front = Some(handle.clone());
        Ok(handle)
    }

    fn close_window(&mut self, handle: &WindowHandle) -> Result<(), BridgeError> {
        let index = self.position(handle)?;
        self.open.remove(index);
        if self.front.as_ref() == Some(handle) {
            self.front = self.open.last().cloned();
        }
        tracing::info!(%handle, "closed detached window");
        Ok(())
    }

    fn bring_to_front(&mut self, handle: &WindowHandle) -> Result<(), BridgeError> {
        self.position(handle)?;
        self.front = Some(handle.clone());
        tracing::debug!(%handle, "raised detached window");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accepts_window_id_alias() {
        let payload =
            DragPayload::from_json(r#"{"pluginName":"traffic-grapher","windowId":"7"}"#).unwrap();
        assert_eq!(payload.plugin_name, "traffic-grapher");
        assert_eq!(payload.origin_window_id, Some(WindowHandle::new("7")));
    }

    #[test]
    fn test_payload_encodes_camel_case() {
        let payload = DragPayload::new("sniffer", Some(WindowHandle::new("window-2")));
        let json: serde_json::Value = serde_json::from_str(&payload.to_json()).unwrap();
        assert_eq!(json["pluginName"], "sniffer");
        assert_eq!(json["originWindowId"], "window-2");
    }

    #[test]
    fn test_payload_without_origin() {
        let payload = DragPayload::from_json(r#"{"pluginName":"sniffer"}"#).unwrap();
        assert_eq!(payload.origin_window_id, None);
        assert!(matches!(
            DragPayload::from_json("not json"),
            Err(BridgeError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_headless_host_tracks_windows() {
        let mut host = HeadlessHost::new();
        let a = host.create_detached_window("a").unwrap();
        let b = host.create_detached_window("b").unwrap();
        assert_eq!(a.as_str(), "window-1");
        assert_eq!(host.front(), Some(&b));

        host.bring_to_front(&a).unwrap();
        assert_eq!(host.front(), Some(&a));

        host.close_window(&a).unwrap();
        assert_eq!(host.open_windows(), &[b.clone()]);
        assert_eq!(host.front(), Some(&b));

        assert_eq!(
            host.close_window(&a),
            Err(BridgeError::UnknownWindow(a.clone()))
        );
    }
}
