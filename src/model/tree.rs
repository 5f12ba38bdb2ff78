//! Layout tree - arena of split and panel nodes
//!
//! Nodes live in a flat map keyed by `NodeId`. Splits own their children by
//! id and every node records its parent id, so structural edits (split,
//! replace, collapse) are plain map updates without reference cycles.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use super::geometry::{Point, Rect};
use super::node::{Node, NodeId, NodeKind, Orientation, TabId};
use super::panel::PanelNode;
use super::split::SplitNode;

// ============================================================================
// Errors
// ============================================================================

/// Structural errors raised by tree edits
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The id does not name a node in the tree
    UnknownNode(NodeId),
    /// The node exists but is not a panel
    NotAPanel(NodeId),
    /// The node exists but is not a split
    NotASplit(NodeId),
    /// A split already holds two children
    SplitFull(NodeId),
    /// The node has no parent and is not the root
    Detached(NodeId),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownNode(id) => write!(f, "unknown node {}", id),
            LayoutError::NotAPanel(id) => write!(f, "{} is not a panel", id),
            LayoutError::NotASplit(id) => write!(f, "{} is not a split", id),
            LayoutError::SplitFull(id) => write!(f, "cannot add {}: split already full", id),
            LayoutError::Detached(id) => write!(f, "{} is detached from the tree", id),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A broken structural invariant, reported by `validate`
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// A non-root panel has no tabs
    EmptyPanel(NodeId),
    /// A split does not have exactly two children
    SplitArity { split: NodeId, children: usize },
    /// A child's parent id does not point back at its container
    BrokenParentLink { node: NodeId },
    /// A node is stored in the arena but unreachable from the root
    Unreachable(NodeId),
    /// A panel's active tab is missing, or set on an empty panel
    ActiveTab { panel: NodeId },
    /// A tab id appears more than once in the tree
    DuplicateTab(TabId),
    /// A docked item is not in the panel the registry names
    ItemNotInPanel { tab: TabId, panel: NodeId },
    /// A tab shown in the tree has no docked item in the registry
    TabWithoutItem(TabId),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPanel(id) => write!(f, "non-root panel {} is empty", id),
            Self::SplitArity { split, children } => {
                write!(f, "split {} has {} children", split, children)
            }
            Self::BrokenParentLink { node } => write!(f, "{} has a broken parent link", node),
            Self::Unreachable(id) => write!(f, "{} is unreachable from the root", id),
            Self::ActiveTab { panel } => write!(f, "panel {} has an invalid active tab", panel),
            Self::DuplicateTab(tab) => write!(f, "{} appears in more than one place", tab),
            Self::ItemNotInPanel { tab, panel } => {
                write!(f, "{} is registered in {} but not shown there", tab, panel)
            }
            Self::TabWithoutItem(tab) => write!(f, "{} is shown but not registered", tab),
        }
    }
}

impl std::error::Error for InvariantViolation {}

// ============================================================================
// Snapshots
// ============================================================================

/// A tab as it appears in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
}

/// Serializable copy of the tree, used for tests and for dumping layouts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutSnapshot {
    Panel {
        id: NodeId,
        rect: Rect,
        tabs: Vec<TabSnapshot>,
        active: Option<TabId>,
    },
    Split {
        id: NodeId,
        orientation: Orientation,
        ratio: f32,
        children: Vec<LayoutSnapshot>,
    },
}

impl LayoutSnapshot {
    /// Node id at the top of this snapshot
    pub fn id(&self) -> NodeId {
        match self {
            LayoutSnapshot::Panel { id, .. } | LayoutSnapshot::Split { id, .. } => *id,
        }
    }

    /// Multi-line indented outline, one node per line
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            LayoutSnapshot::Panel {
                id,
                rect,
                tabs,
                active,
            } => {
                out.push_str(&format!(
                    "{}panel {} @ {}x{}+{}+{}\n",
                    indent, id, rect.width, rect.height, rect.x, rect.y
                ));
                for tab in tabs {
                    let marker = if Some(tab.id) == *active { "*" } else { " " };
                    out.push_str(&format!("{}  {} {} {}\n", indent, marker, tab.id, tab.title));
                }
            }
            LayoutSnapshot::Split {
                id,
                orientation,
                ratio,
                children,
            } => {
                out.push_str(&format!(
                    "{}split {} {:?} ratio={}\n",
                    indent, id, orientation, ratio
                ));
                for child in children {
                    child.write_outline(out, depth + 1);
                }
            }
        }
    }
}

/// Compact one-line shape, e.g. `Row(Panel{A}, Column(Panel{B, C}, Panel{D}))`
impl fmt::Display for LayoutSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutSnapshot::Panel { tabs, .. } => {
                let titles: Vec<&str> = tabs.iter().map(|t| t.title.as_str()).collect();
                write!(f, "Panel{{{}}}", titles.join(", "))
            }
            LayoutSnapshot::Split {
                orientation,
                children,
                ..
            } => {
                let name = match orientation {
                    Orientation::Row => "Row",
                    Orientation::Column => "Column",
                };
                write!(f, "{}(", name)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// Layout Tree
// ============================================================================

/// The split tree. The root is always either a single panel or a split.
#[derive(Debug)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_node_id: u64,
    /// Last rect passed to `compute_layout`
    viewport: Rect,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    /// A tree consisting of one empty root panel
    pub fn new() -> Self {
        let root = NodeId(1);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::panel(root, PanelNode::new()));
        Self {
            nodes,
            root,
            next_node_id: 2,
            viewport: Rect::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Number of nodes currently in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn panel(&self, id: NodeId) -> Option<&PanelNode> {
        self.nodes.get(&id).and_then(Node::as_panel)
    }

    pub fn panel_mut(&mut self, id: NodeId) -> Option<&mut PanelNode> {
        self.nodes.get_mut(&id).and_then(Node::as_panel_mut)
    }

    pub fn split(&self, id: NodeId) -> Option<&SplitNode> {
        self.nodes.get(&id).and_then(Node::as_split)
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.rect)
    }

    fn next_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    /// Add a panel to the arena without attaching it anywhere yet
    pub fn insert_panel(&mut self, panel: PanelNode) -> NodeId {
        let id = self.next_node_id();
        self.nodes.insert(id, Node::panel(id, panel));
        id
    }

    /// Remove a node that was inserted but never attached (no parent, not root)
    pub fn take_detached(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.get(&id)?;
        if node.parent.is_some() || id == self.root {
            return None;
        }
        self.nodes.remove(&id)
    }

    /// Put `new` where `old` currently sits (in its parent split, or at the root).
    ///
    /// `old` is left detached in the arena; the caller decides its fate.
    pub fn replace_node(&mut self, old: NodeId, new: NodeId) -> Result<(), LayoutError> {
        if !self.nodes.contains_key(&new) {
            return Err(LayoutError::UnknownNode(new));
        }
        let parent = self
            .nodes
            .get(&old)
            .ok_or(LayoutError::UnknownNode(old))?
            .parent;

        match parent {
            Some(parent_id) => {
                let split = self
                    .nodes
                    .get_mut(&parent_id)
                    .ok_or(LayoutError::UnknownNode(parent_id))?
                    .as_split_mut()
                    .ok_or(LayoutError::NotASplit(parent_id))?;
                if !split.replace_child(old, new) {
                    return Err(LayoutError::Detached(old));
                }
            }
            None if old == self.root => self.root = new,
            None => return Err(LayoutError::Detached(old)),
        }

        if let Some(node) = self.nodes.get_mut(&new) {
            node.parent = parent;
        }
        if let Some(node) = self.nodes.get_mut(&old) {
            node.parent = None;
        }
        Ok(())
    }

    /// Replace panel `target` with a new split holding `target` and `new_panel`.
    ///
    /// `new_first` puts the new panel before the target (left/top).
    /// Returns the id of the new split.
    pub fn split_panel(
        &mut self,
        target: NodeId,
        new_panel: NodeId,
        orientation: Orientation,
        new_first: bool,
    ) -> Result<NodeId, LayoutError> {
        for id in [target, new_panel] {
            match self.nodes.get(&id) {
                None => return Err(LayoutError::UnknownNode(id)),
                Some(node) if !node.is_panel() => return Err(LayoutError::NotAPanel(id)),
                Some(_) => {}
            }
        }

        let (first, second) = if new_first {
            (new_panel, target)
        } else {
            (target, new_panel)
        };

        let mut split = SplitNode::empty(orientation);
        split.add_child(first)?;
        split.add_child(second)?;

        let split_id = self.next_node_id();
        self.nodes.insert(split_id, Node::split(split_id, split));
        self.replace_node(target, split_id)?;

        for child in [first, second] {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.parent = Some(split_id);
            }
        }

        self.relayout();
        Ok(split_id)
    }

    /// Remove a panel from the tree, collapsing its parent split.
    ///
    /// The root panel is never removed; returns `Ok(false)` for it.
    pub fn remove_panel(&mut self, id: NodeId) -> Result<bool, LayoutError> {
        let node = self.nodes.get(&id).ok_or(LayoutError::UnknownNode(id))?;
        if !node.is_panel() {
            return Err(LayoutError::NotAPanel(id));
        }
        if id == self.root {
            return Ok(false);
        }
        let parent_id = node.parent.ok_or(LayoutError::Detached(id))?;

        let survivor = self
            .nodes
            .get_mut(&parent_id)
            .ok_or(LayoutError::UnknownNode(parent_id))?
            .as_split_mut()
            .ok_or(LayoutError::NotASplit(parent_id))?
            .remove_child(id);
        self.nodes.remove(&id);

        if let Some(survivor) = survivor {
            self.collapse(parent_id, survivor)?;
        }
        Ok(true)
    }

    /// Replace a single-child split by its survivor and drop the split
    fn collapse(&mut self, split_id: NodeId, survivor: NodeId) -> Result<(), LayoutError> {
        self.replace_node(split_id, survivor)?;
        self.nodes.remove(&split_id);
        tracing::debug!(split = %split_id, survivor = %survivor, "collapsed split");
        Ok(())
    }

    /// Remove every empty non-root panel, repeating until none is left.
    ///
    /// Returns the number of panels removed.
    pub fn prune_empty_panels(&mut self) -> usize {
        let mut removed = 0;
        loop {
            let empty = self
                .panel_ids()
                .into_iter()
                .find(|id| *id != self.root && self.panel(*id).is_some_and(PanelNode::is_empty));
            let Some(id) = empty else {
                break;
            };
            match self.remove_panel(id) {
                Ok(true) => removed += 1,
                _ => break,
            }
        }
        if removed > 0 {
            self.relayout();
        }
        removed
    }

    /// Panels in pre-order (first child before second)
    pub fn panel_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_panels(self.root, &mut out);
        out
    }

    fn collect_panels(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.nodes.get(&id).map(|n| &n.kind) {
            Some(NodeKind::Panel(_)) => out.push(id),
            Some(NodeKind::Split(split)) => {
                for child in split.children() {
                    self.collect_panels(*child, out);
                }
            }
            None => {}
        }
    }

    /// First panel found by a pre-order walk from the root
    pub fn first_panel(&self) -> Option<NodeId> {
        let mut id = self.root;
        loop {
            match &self.nodes.get(&id)?.kind {
                NodeKind::Panel(_) => return Some(id),
                NodeKind::Split(split) => id = *split.children().first()?,
            }
        }
    }

    /// The panel currently showing `tab`, found by scanning the tree
    pub fn find_tab(&self, tab: TabId) -> Option<NodeId> {
        self.panel_ids()
            .into_iter()
            .find(|id| self.panel(*id).is_some_and(|p| p.contains(tab)))
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Assign rectangles to every node given the available area
    pub fn compute_layout(&mut self, available: Rect) {
        self.viewport = available;
        self.layout_node(self.root, available);
    }

    /// Re-run layout with the last viewport
    pub fn relayout(&mut self) {
        self.compute_layout(self.viewport);
    }

    fn layout_node(&mut self, id: NodeId, rect: Rect) {
        let children = match self.nodes.get_mut(&id) {
            Some(node) => {
                node.rect = rect;
                match &node.kind {
                    NodeKind::Split(split) => {
                        let (a, b) = split.child_rects(rect);
                        split
                            .children()
                            .iter()
                            .copied()
                            .zip([a, b])
                            .collect::<Vec<_>>()
                    }
                    NodeKind::Panel(_) => Vec::new(),
                }
            }
            None => return,
        };

        for (child, child_rect) in children {
            self.layout_node(child, child_rect);
        }
    }

    /// Find the panel under a point
    pub fn panel_at(&self, point: Point) -> Option<NodeId> {
        self.panel_ids().into_iter().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|n| n.rect.contains(point.x, point.y))
        })
    }

    // =========================================================================
    // Snapshots and validation
    // =========================================================================

    pub fn snapshot(&self) -> LayoutSnapshot {
        self.snapshot_node(self.root)
    }

    fn snapshot_node(&self, id: NodeId) -> LayoutSnapshot {
        let node = &self.nodes[&id];
        match &node.kind {
            NodeKind::Panel(panel) => LayoutSnapshot::Panel {
                id,
                rect: node.rect,
                tabs: panel
                    .tabs()
                    .iter()
                    .map(|t| TabSnapshot {
                        id: t.id,
                        title: t.title.clone(),
                    })
                    .collect(),
                active: panel.active_tab(),
            },
            NodeKind::Split(split) => LayoutSnapshot::Split {
                id,
                orientation: split.orientation,
                ratio: split.ratio,
                children: split
                    .children()
                    .iter()
                    .map(|c| self.snapshot_node(*c))
                    .collect(),
            },
        }
    }

    /// Check the structural invariants of the tree.
    ///
    /// - every non-root panel has at least one tab
    /// - every split has exactly two children whose parent links point back
    /// - every stored node is reachable from the root
    /// - every non-empty panel's active tab is one of its tabs
    /// - no tab id appears in two places
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.parent(self.root).is_some() {
            return Err(InvariantViolation::BrokenParentLink { node: self.root });
        }

        let mut seen_nodes = HashSet::new();
        let mut seen_tabs = HashSet::new();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                return Err(InvariantViolation::Unreachable(id));
            };
            seen_nodes.insert(id);

            match &node.kind {
                NodeKind::Split(split) => {
                    if split.children().len() != 2 {
                        return Err(InvariantViolation::SplitArity {
                            split: id,
                            children: split.children().len(),
                        });
                    }
                    for child in split.children() {
                        if self.parent(*child) != Some(id) {
                            return Err(InvariantViolation::BrokenParentLink { node: *child });
                        }
                        stack.push(*child);
                    }
                }
                NodeKind::Panel(panel) => {
                    if panel.is_empty() && id != self.root {
                        return Err(InvariantViolation::EmptyPanel(id));
                    }
                    let active_ok = match panel.active_tab() {
                        Some(tab) => panel.contains(tab),
                        None => panel.is_empty(),
                    };
                    if !active_ok {
                        return Err(InvariantViolation::ActiveTab { panel: id });
                    }
                    for tab in panel.tab_ids() {
                        if !seen_tabs.insert(tab) {
                            return Err(InvariantViolation::DuplicateTab(tab));
                        }
                    }
                }
            }
        }

        if let Some(orphan) = self.nodes.keys().find(|id| !seen_nodes.contains(id)) {
            return Err(InvariantViolation::Unreachable(*orphan));
        }
        Ok(())
    }
}
