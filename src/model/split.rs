//! Split nodes - binary containers in the layout tree

use super::geometry::Rect;
use super::node::{NodeId, Orientation};
use super::tree::LayoutError;

/// Default share of the first child
pub const DEFAULT_SPLIT_RATIO: f32 = 0.5;

/// A container that arranges exactly two children
#[derive(Debug, Clone)]
pub struct SplitNode {
    pub orientation: Orientation,
    /// Ordered pair; holds a single child only while a collapse is pending
    children: Vec<NodeId>,
    /// Share of the space given to the first child (0.0 to 1.0)
    pub ratio: f32,
}

impl SplitNode {
    /// Create a split with no children yet; fill it through `add_child`
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            children: Vec::with_capacity(2),
            ratio: DEFAULT_SPLIT_RATIO,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.children.contains(&id)
    }

    /// Append a child, refusing a third one
    pub fn add_child(&mut self, id: NodeId) -> Result<(), LayoutError> {
        if self.children.len() >= 2 {
            return Err(LayoutError::SplitFull(id));
        }
        self.children.push(id);
        Ok(())
    }

    /// Swap `old` for `new` in place. Returns false if `old` is not a child.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.children.iter_mut().find(|c| **c == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Remove `id`. Returns the sole survivor if exactly one child remains.
    pub fn remove_child(&mut self, id: NodeId) -> Option<NodeId> {
        let index = self.children.iter().position(|c| *c == id)?;
        self.children.remove(index);
        match self.children.as_slice() {
            [survivor] => Some(*survivor),
            _ => None,
        }
    }

    /// Rectangles for the two children given the split's own rectangle
    pub fn child_rects(&self, rect: Rect) -> (Rect, Rect) {
        let ratio = self.ratio.clamp(0.0, 1.0);
        match self.orientation {
            Orientation::Row => rect.split_columns(ratio),
            Orientation::Column => rect.split_rows(ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(orientation: Orientation, first: u64, second: u64) -> SplitNode {
        let mut split = SplitNode::empty(orientation);
        split.add_child(NodeId(first)).unwrap();
        split.add_child(NodeId(second)).unwrap();
        split
    }

    #[test]
    fn test_add_child_caps_at_two() {
        let mut split = SplitNode::empty(Orientation::Row);
        split.add_child(NodeId(1)).unwrap();
        split.add_child(NodeId(2)).unwrap();
        assert!(matches!(
            split.add_child(NodeId(3)),
            Err(LayoutError::SplitFull(NodeId(3)))
        ));
        assert_eq!(split.children(), &[NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_replace_child_keeps_position() {
        let mut split = pair(Orientation::Column, 1, 2);
        assert!(split.replace_child(NodeId(1), NodeId(9)));
        assert_eq!(split.children(), &[NodeId(9), NodeId(2)]);
        assert!(!split.replace_child(NodeId(42), NodeId(10)));
    }

    #[test]
    fn test_remove_child_reports_survivor() {
        let mut split = pair(Orientation::Row, 1, 2);
        assert_eq!(split.remove_child(NodeId(5)), None);
        assert_eq!(split.remove_child(NodeId(1)), Some(NodeId(2)));
    }

    #[test]
    fn test_child_rects_follow_orientation() {
        let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
        let row = pair(Orientation::Row, 1, 2);
        assert_eq!(
            row.child_rects(rect),
            (
                Rect::new(0.0, 0.0, 400.0, 600.0),
                Rect::new(400.0, 0.0, 400.0, 600.0)
            )
        );

        let column = pair(Orientation::Column, 1, 2);
        assert_eq!(
            column.child_rects(rect),
            (
                Rect::new(0.0, 0.0, 800.0, 300.0),
                Rect::new(0.0, 300.0, 800.0, 300.0)
            )
        );
    }
}
