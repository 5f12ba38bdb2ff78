//! Message types for the Elm-style architecture
//!
//! All layout changes flow through these message types.

use crate::bridge::WindowHandle;
use crate::dock::DropTarget;
use crate::model::{Point, Rect, TabId};

/// Tab and panel operations triggered by UI controls or scripts
#[derive(Debug, Clone, PartialEq)]
pub enum DockMsg {
    /// Close a tab (docked or floating) and destroy its content
    CloseTab(TabId),
    /// Show a tab: activate it in its panel or raise its window
    ActivateTab(TabId),
    /// Pop a docked tab out into its own window
    FloatTab(TabId),
    /// Move a docked tab onto a panel zone without a pointer gesture
    MoveTab { tab: TabId, target: DropTarget },
    /// Switch to next tab in the active panel
    NextTab,
    /// Switch to previous tab in the active panel
    PrevTab,
    /// The docking surface changed size
    Resize(Rect),
    /// The host finished opening the window for a floating tab
    WindowOpened { tab: TabId, window: WindowHandle },
}

/// Pointer events on tab headers and the docking surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Button pressed on a tab header
    Down { tab: TabId, pos: Point },
    /// Pointer moved (anywhere)
    Move { pos: Point },
    /// Button released
    Up { pos: Point },
    /// Gesture aborted (focus lost, escape)
    Cancel,
}

/// Drags originating in another top-level window
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalMsg {
    /// A detached window is hovering over the docking surface
    DragOver { pos: Point },
    /// The host drag left the docking surface or ended elsewhere
    Leave,
    /// A detached window was dropped; `data` is the payload offered under
    /// the `mime` type
    Drop {
        mime: String,
        data: String,
        pos: Point,
    },
}

/// Plugin-level requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginMsg {
    /// Open a new instance of a plugin in the default panel
    Open(String),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Tab and panel operations
    Dock(DockMsg),
    /// Pointer gestures on tab headers
    Pointer(PointerMsg),
    /// Drags from detached windows
    External(ExternalMsg),
    /// Plugin instantiation
    Plugin(PluginMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn pointer_down(tab: TabId, x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Down {
            tab,
            pos: Point::new(x, y),
        })
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Move {
            pos: Point::new(x, y),
        })
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Up {
            pos: Point::new(x, y),
        })
    }

    /// Create a resize message for a viewport anchored at the origin
    pub fn resize(width: f32, height: f32) -> Self {
        Msg::Dock(DockMsg::Resize(Rect::new(0.0, 0.0, width, height)))
    }

    pub fn open_plugin(name: impl Into<String>) -> Self {
        Msg::Plugin(PluginMsg::Open(name.into()))
    }
}
