//! Docking engine: the manager that owns the layout tree and tab registry,
//! plus the drag-and-drop state machine it drives.

pub mod drag;
pub mod manager;

pub use drag::{
    DragConfig, DragKind, DragState, DropIndicator, DropTarget, DropZone,
    CENTER_INDICATOR_OPACITY, DRAG_THRESHOLD, EDGE_FRACTION, EDGE_INDICATOR_OPACITY,
};
pub use manager::{DockManager, OpenOptions};
