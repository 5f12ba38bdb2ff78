//! Drag-and-drop state and drop-zone geometry
//!
//! A gesture starts `pressed` on pointer-down, becomes `dragging` once the
//! pointer leaves the threshold box around its origin, and is discarded on
//! release or cancel. Only one gesture exists at a time.

use serde::{Deserialize, Serialize};

use crate::model::{NodeId, Orientation, Point, Rect, TabId};

/// Pointer travel (in either axis) that turns a press into a drag.
/// Movement must strictly exceed this value.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Share of a panel's width/height that counts as an edge zone
pub const EDGE_FRACTION: f32 = 0.25;

/// Opacity of the drop indicator over an edge zone
pub const EDGE_INDICATOR_OPACITY: f32 = 0.5;

/// Opacity of the drop indicator over the center zone
pub const CENTER_INDICATOR_OPACITY: f32 = 0.2;

/// Tunables for the drag state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    pub threshold: f32,
    pub edge_fraction: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: DRAG_THRESHOLD,
            edge_fraction: EDGE_FRACTION,
        }
    }
}

/// Region of a panel a drop lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropZone {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl DropZone {
    /// Classify a position given as fractions of the panel's width and height.
    ///
    /// Left and right are tested before top and bottom, so corners resolve to
    /// a horizontal split.
    pub fn classify(fx: f32, fy: f32, edge_fraction: f32) -> DropZone {
        if fx < edge_fraction {
            DropZone::Left
        } else if fx > 1.0 - edge_fraction {
            DropZone::Right
        } else if fy < edge_fraction {
            DropZone::Top
        } else if fy > 1.0 - edge_fraction {
            DropZone::Bottom
        } else {
            DropZone::Center
        }
    }

    /// Orientation of the split an edge drop creates; `None` for center
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            DropZone::Left | DropZone::Right => Some(Orientation::Row),
            DropZone::Top | DropZone::Bottom => Some(Orientation::Column),
            DropZone::Center => None,
        }
    }

    /// Whether the dropped tab's new panel goes before the target
    pub fn new_panel_first(self) -> bool {
        matches!(self, DropZone::Left | DropZone::Top)
    }
}

/// Panel and zone under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    pub panel: NodeId,
    pub zone: DropZone,
}

/// Visual hint drawn over the target panel while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropIndicator {
    pub rect: Rect,
    pub opacity: f32,
}

impl DropIndicator {
    /// Half of the panel for edge zones, the whole panel (fainter) for center
    pub fn for_zone(panel: Rect, zone: DropZone) -> Self {
        let half_w = panel.width / 2.0;
        let half_h = panel.height / 2.0;
        let (rect, opacity) = match zone {
            DropZone::Left => (
                Rect::new(panel.x, panel.y, half_w, panel.height),
                EDGE_INDICATOR_OPACITY,
            ),
            DropZone::Right => (
                Rect::new(panel.x + half_w, panel.y, half_w, panel.height),
                EDGE_INDICATOR_OPACITY,
            ),
            DropZone::Top => (
                Rect::new(panel.x, panel.y, panel.width, half_h),
                EDGE_INDICATOR_OPACITY,
            ),
            DropZone::Bottom => (
                Rect::new(panel.x, panel.y + half_h, panel.width, half_h),
                EDGE_INDICATOR_OPACITY,
            ),
            DropZone::Center => (panel, CENTER_INDICATOR_OPACITY),
        };
        Self { rect, opacity }
    }
}

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// A tab from one of our panels
    Tab,
    /// A detached window dragged by the host windowing system
    External,
}

/// The single in-flight gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub kind: DragKind,
    pub tab: Option<TabId>,
    pub source_panel: Option<NodeId>,
    pub origin: Point,
    /// Last pointer position seen
    pub pointer: Point,
    /// False while the pointer is still inside the threshold box
    pub dragging: bool,
    pub drop_target: Option<DropTarget>,
    pub indicator: Option<DropIndicator>,
}

impl DragState {
    /// A tab pressed at `origin` in `source_panel`
    pub fn tab(tab: TabId, source_panel: NodeId, origin: Point) -> Self {
        Self {
            kind: DragKind::Tab,
            tab: Some(tab),
            source_panel: Some(source_panel),
            origin,
            pointer: origin,
            dragging: false,
            drop_target: None,
            indicator: None,
        }
    }

    /// An external window drag, already past any threshold
    pub fn external(at: Point) -> Self {
        Self {
            kind: DragKind::External,
            tab: None,
            source_panel: None,
            origin: at,
            pointer: at,
            dragging: true,
            drop_target: None,
            indicator: None,
        }
    }

    pub fn set_target(&mut self, target: Option<(DropTarget, Rect)>) {
        match target {
            Some((target, panel_rect)) => {
                self.indicator = Some(DropIndicator::for_zone(panel_rect, target.zone));
                self.drop_target = Some(target);
            }
            None => {
                self.drop_target = None;
                self.indicator = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_edges_and_center() {
        assert_eq!(DropZone::classify(0.1, 0.5, EDGE_FRACTION), DropZone::Left);
        assert_eq!(DropZone::classify(0.9, 0.5, EDGE_FRACTION), DropZone::Right);
        assert_eq!(DropZone::classify(0.5, 0.1, EDGE_FRACTION), DropZone::Top);
        assert_eq!(DropZone::classify(0.5, 0.9, EDGE_FRACTION), DropZone::Bottom);
        assert_eq!(DropZone::classify(0.5, 0.5, EDGE_FRACTION), DropZone::Center);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(DropZone::classify(0.24, 0.5, EDGE_FRACTION), DropZone::Left);
        assert_eq!(DropZone::classify(0.26, 0.5, EDGE_FRACTION), DropZone::Center);
        // Exactly on the threshold is not an edge
        assert_eq!(DropZone::classify(0.25, 0.5, EDGE_FRACTION), DropZone::Center);
        assert_eq!(DropZone::classify(0.75, 0.5, EDGE_FRACTION), DropZone::Center);
    }

    #[test]
    fn test_corners_prefer_horizontal_edges() {
        // Closer to the top edge than the left edge, still resolves left
        assert_eq!(DropZone::classify(0.2, 0.01, EDGE_FRACTION), DropZone::Left);
        assert_eq!(DropZone::classify(0.99, 0.8, EDGE_FRACTION), DropZone::Right);
    }

    #[test]
    fn test_zone_split_shape() {
        assert_eq!(DropZone::Left.orientation(), Some(Orientation::Row));
        assert_eq!(DropZone::Bottom.orientation(), Some(Orientation::Column));
        assert_eq!(DropZone::Center.orientation(), None);
        assert!(DropZone::Top.new_panel_first());
        assert!(!DropZone::Right.new_panel_first());
    }

    #[test]
    fn test_indicator_geometry() {
        let panel = Rect::new(100.0, 0.0, 400.0, 200.0);

        let right = DropIndicator::for_zone(panel, DropZone::Right);
        assert_eq!(right.rect, Rect::new(300.0, 0.0, 200.0, 200.0));
        assert_eq!(right.opacity, EDGE_INDICATOR_OPACITY);

        let bottom = DropIndicator::for_zone(panel, DropZone::Bottom);
        assert_eq!(bottom.rect, Rect::new(100.0, 100.0, 400.0, 100.0));

        let center = DropIndicator::for_zone(panel, DropZone::Center);
        assert_eq!(center.rect, panel);
        assert_eq!(center.opacity, CENTER_INDICATOR_OPACITY);
    }
}
