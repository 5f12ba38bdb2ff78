//! Update functions for the Elm-style architecture
//!
//! All layout changes flow through these functions. Each handler applies one
//! message to the `DockManager` and returns the side effects it queued.

mod dock;
mod external;
mod pointer;

use crate::commands::Cmd;
use crate::dock::DockManager;
use crate::messages::{Msg, PluginMsg};

#[cfg(debug_assertions)]
use crate::tracing::LayoutSummary;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dock::update_dock;
pub use external::update_external;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(dock: &mut DockManager, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(dock, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(dock, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(dock: &mut DockManager, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Dock(m) => update_dock(dock, m),
        Msg::Pointer(m) => update_pointer(dock, m),
        Msg::External(m) => update_external(dock, m),
        Msg::Plugin(PluginMsg::Open(plugin)) => {
            let mut cmds = dock.take_commands();
            cmds.push(Cmd::InstantiatePlugin {
                plugin,
                target: None,
            });
            Cmd::batch(cmds)
        }
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs every message except pointer moves, logs a summary diff when the
/// layout shape changes, and checks the invariants after each message.
#[cfg(debug_assertions)]
fn update_traced(dock: &mut DockManager, msg: Msg) -> Option<Cmd> {
    use crate::messages::PointerMsg;

    // Pointer moves arrive at frame rate
    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = LayoutSummary::from_manager(dock);

    let result = update_inner(dock, msg);

    if let Some(diff) = before.diff(&LayoutSummary::from_manager(dock)) {
        debug!(target: "layout", %diff, "layout changed");
    }

    if let Err(violation) = dock.validate() {
        tracing::error!(msg = %msg_name, %violation, "layout invariant violated");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Dock::CloseTab(TabId(3))`
/// - `Pointer::Up { pos: Point { x: 10.0, y: 4.0 } }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Dock(m) => format!("Dock::{:?}", m),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::External(m) => format!("External::{:?}", m),
        Msg::Plugin(m) => format!("Plugin::{:?}", m),
    }
}
