//! Hosted content surfaces
//!
//! The layout engine never looks inside a surface. It only moves ownership of
//! the handle between panels and floating items, and asks the provider to
//! mount, unmount or destroy it.

use std::fmt;

use serde::Serialize;

use crate::model::NodeId;

/// Unique identifier for a content surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Opaque renderable content supplied by a plugin.
///
/// Not `Clone`: a surface lives in exactly one place at a time.
#[derive(Debug, PartialEq, Eq)]
pub struct Surface {
    id: SurfaceId,
    plugin: String,
}

impl Surface {
    pub fn new(id: SurfaceId, plugin: impl Into<String>) -> Self {
        Self {
            id,
            plugin: plugin.into(),
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Name of the plugin that produced this surface
    pub fn plugin(&self) -> &str {
        &self.plugin
    }
}

/// Supplies and hosts plugin content on behalf of the shell
pub trait ContentProvider {
    /// Instantiate a surface for `plugin`, returning its display title.
    ///
    /// Returns `None` if the plugin is unknown or disabled.
    fn create_surface(&mut self, plugin: &str) -> Option<(String, Surface)>;

    /// Attach a surface to a panel's content region
    fn mount(&mut self, surface: SurfaceId, region: NodeId);

    /// Detach a surface from whatever region currently shows it
    fn unmount(&mut self, surface: SurfaceId);

    /// Tear the surface down for good
    fn destroy(&mut self, surface: Surface);
}
