//! Registry records for open tabs

use serde::Serialize;

use crate::bridge::WindowHandle;
use crate::content::Surface;

use super::node::{NodeId, TabId};

/// Whether a tab lives inside the split tree or in its own window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemMode {
    Docked,
    Floating,
}

/// Where an item currently lives
#[derive(Debug)]
pub enum Placement {
    /// Shown in a panel; the panel's tab entry owns the surface
    Docked(NodeId),
    /// Detached into a top-level window. The handle is filled in once the
    /// windowing host reports it.
    Floating {
        window: Option<WindowHandle>,
        surface: Surface,
    },
}

/// One open tab, docked or floating
#[derive(Debug)]
pub struct Item {
    pub id: TabId,
    pub title: String,
    /// Plugin that produced the content (used to rebuild detached windows)
    pub plugin: String,
    pub placement: Placement,
}

impl Item {
    pub fn mode(&self) -> ItemMode {
        match self.placement {
            Placement::Docked(_) => ItemMode::Docked,
            Placement::Floating { .. } => ItemMode::Floating,
        }
    }

    /// Owning panel, if docked
    pub fn panel(&self) -> Option<NodeId> {
        match self.placement {
            Placement::Docked(panel) => Some(panel),
            Placement::Floating { .. } => None,
        }
    }

    /// Detached window handle, if floating and already materialized
    pub fn window(&self) -> Option<&WindowHandle> {
        match &self.placement {
            Placement::Floating { window, .. } => window.as_ref(),
            Placement::Docked(_) => None,
        }
    }
}
