//! Layout model - the split tree and the tab registry types
//!
//! This module contains the pure data structures of the docking engine.
//! Nothing here performs I/O or talks to the windowing host.

pub mod geometry;
pub mod item;
pub mod node;
pub mod panel;
pub mod split;
pub mod tree;

pub use geometry::{Point, Rect};
pub use item::{Item, ItemMode, Placement};
pub use node::{Node, NodeId, NodeKind, Orientation, TabId};
pub use panel::{PanelNode, TabEntry};
pub use split::{SplitNode, DEFAULT_SPLIT_RATIO};
pub use tree::{InvariantViolation, LayoutError, LayoutSnapshot, LayoutTree, TabSnapshot};
