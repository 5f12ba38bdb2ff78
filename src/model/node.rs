//! Layout tree nodes
//!
//! A node is either a split (two children side by side or stacked) or a panel
//! (a leaf holding tabs). Parent links are plain ids into the tree's arena, so
//! ownership only ever flows downward.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::panel::PanelNode;
use super::split::SplitNode;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a layout node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Unique identifier for a tab
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// How a split arranges its two children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children arranged left-to-right
    Row,
    /// Children arranged top-to-bottom
    Column,
}

/// Variant-specific node data
#[derive(Debug)]
pub enum NodeKind {
    Split(SplitNode),
    Panel(PanelNode),
}

/// A node in the layout tree
#[derive(Debug)]
pub struct Node {
    pub id: NodeId,
    /// Non-owning back reference; `None` for the root and for detached nodes
    pub parent: Option<NodeId>,
    /// Area assigned by the last layout pass
    pub rect: Rect,
    pub kind: NodeKind,
}

impl Node {
    pub fn panel(id: NodeId, panel: PanelNode) -> Self {
        Self {
            id,
            parent: None,
            rect: Rect::default(),
            kind: NodeKind::Panel(panel),
        }
    }

    pub fn split(id: NodeId, split: SplitNode) -> Self {
        Self {
            id,
            parent: None,
            rect: Rect::default(),
            kind: NodeKind::Split(split),
        }
    }

    pub fn is_panel(&self) -> bool {
        matches!(self.kind, NodeKind::Panel(_))
    }

    pub fn as_panel(&self) -> Option<&PanelNode> {
        match &self.kind {
            NodeKind::Panel(panel) => Some(panel),
            NodeKind::Split(_) => None,
        }
    }

    pub fn as_panel_mut(&mut self) -> Option<&mut PanelNode> {
        match &mut self.kind {
            NodeKind::Panel(panel) => Some(panel),
            NodeKind::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&SplitNode> {
        match &self.kind {
            NodeKind::Split(split) => Some(split),
            NodeKind::Panel(_) => None,
        }
    }

    pub fn as_split_mut(&mut self) -> Option<&mut SplitNode> {
        match &mut self.kind {
            NodeKind::Split(split) => Some(split),
            NodeKind::Panel(_) => None,
        }
    }
}
