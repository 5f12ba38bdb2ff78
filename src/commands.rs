//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the layout engine asks for after an
//! update. The engine never performs them itself: the shell runtime executes
//! each command against the content provider and the windowing host.

use crate::bridge::WindowHandle;
use crate::content::{Surface, SurfaceId};
use crate::dock::DropTarget;
use crate::model::{NodeId, TabId};

/// Side effects requested by the docking engine
#[derive(Debug, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The tree or the drop indicator changed and must be repainted
    Redraw,
    /// Attach a surface to a panel's content region
    MountSurface { surface: SurfaceId, panel: NodeId },
    /// Detach a surface from its panel (it is about to move or float)
    UnmountSurface(SurfaceId),
    /// Destroy a closed tab's surface
    DestroySurface(Surface),
    /// Open a top-level window for a floating tab.
    /// The resulting handle is reported back through `DockManager::attach_window`.
    DetachWindow { tab: TabId, plugin: String },
    /// Close a detached window
    CloseWindow(WindowHandle),
    /// Raise a detached window
    BringToFront(WindowHandle),
    /// Create a new tab for `plugin` and dock it at `target`
    /// (or in the default panel when `None`)
    InstantiatePlugin {
        plugin: String,
        target: Option<DropTarget>,
    },
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine queued commands: `None` for an empty list, the command itself
    /// for a single entry, `Batch` otherwise.
    pub fn batch(mut cmds: Vec<Cmd>) -> Option<Self> {
        cmds.retain(|c| !matches!(c, Cmd::None));
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::MountSurface { .. } | Cmd::UnmountSurface(_) | Cmd::DestroySurface(_) => true,
            // Window commands affect other windows, not this surface
            Cmd::DetachWindow { .. } | Cmd::CloseWindow(_) | Cmd::BringToFront(_) => false,
            // The follow-up docking produces its own redraw
            Cmd::InstantiatePlugin { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }
}
