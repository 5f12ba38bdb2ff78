//! Dock manager - the single owner of the layout tree and the tab registry
//!
//! Every public operation runs to completion synchronously and leaves the tree
//! and registry consistent: no empty non-root panels, every split with two
//! children, every docked item shown in exactly the panel the registry names.
//! Side effects (mounting surfaces, talking to the windowing host) are queued
//! as `Cmd`s and drained by the caller with `take_commands`.

use std::collections::HashMap;

use crate::bridge::{DragPayload, WindowHandle};
use crate::commands::Cmd;
use crate::content::Surface;
use crate::model::{
    InvariantViolation, Item, LayoutSnapshot, LayoutTree, NodeId, PanelNode, Placement, Point,
    Rect, TabEntry, TabId,
};

use super::drag::{DragConfig, DragKind, DragState, DropIndicator, DropTarget, DropZone};

/// Options for `DockManager::open_tab`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    /// Make the new tab the visible one in its panel
    pub activate: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self { activate: true }
    }
}

/// Orchestrates tabs, panels and the drag gesture
#[derive(Debug)]
pub struct DockManager {
    tree: LayoutTree,
    /// Single source of truth for where each tab lives
    items: HashMap<TabId, Item>,
    /// Default target for tabs opened without explicit placement
    active_panel: Option<NodeId>,
    drag: Option<DragState>,
    config: DragConfig,
    next_tab_id: u64,
    outbox: Vec<Cmd>,
}

impl Default for DockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DockManager {
    /// A manager with a single empty root panel
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    pub fn with_config(config: DragConfig) -> Self {
        let tree = LayoutTree::new();
        let root = tree.root();
        Self {
            tree,
            items: HashMap::new(),
            active_panel: Some(root),
            drag: None,
            config,
            next_tab_id: 1,
            outbox: Vec::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Serializable copy of the current layout
    pub fn layout(&self) -> LayoutSnapshot {
        self.tree.snapshot()
    }

    pub fn item(&self, id: TabId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// All open items, ordered by tab id
    pub fn items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Tabs (docked or floating) created from `plugin`, ordered by id
    pub fn tabs_for_plugin(&self, plugin: &str) -> Vec<TabId> {
        let mut ids: Vec<TabId> = self
            .items
            .values()
            .filter(|item| item.plugin == plugin)
            .map(|item| item.id)
            .collect();
        ids.sort();
        ids
    }

    /// First tab whose title matches, ordered by id
    pub fn find_tab_by_title(&self, title: &str) -> Option<TabId> {
        self.items()
            .into_iter()
            .find(|item| item.title == title)
            .map(|item| item.id)
    }

    pub fn active_panel(&self) -> Option<NodeId> {
        self.active_panel
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn drop_indicator(&self) -> Option<DropIndicator> {
        self.drag.as_ref().and_then(|d| d.indicator)
    }

    /// Drain side effects queued since the last call
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.outbox)
    }

    // =========================================================================
    // Tree operations
    // =========================================================================

    /// Recompute panel geometry for a new window size
    pub fn set_viewport(&mut self, rect: Rect) {
        self.tree.compute_layout(rect);
        self.emit(Cmd::Redraw);
    }

    /// Open a tab in the active panel (or the first panel if that is gone)
    pub fn open_tab(
        &mut self,
        title: impl Into<String>,
        surface: Surface,
        options: OpenOptions,
    ) -> TabId {
        self.register(title.into(), surface, None, options.activate)
    }

    /// Open a tab at an explicit drop target, as if it had been dropped there
    pub fn dock_new_tab(
        &mut self,
        title: impl Into<String>,
        surface: Surface,
        target: Option<DropTarget>,
    ) -> TabId {
        self.register(title.into(), surface, target, true)
    }

    fn register(
        &mut self,
        title: String,
        surface: Surface,
        target: Option<DropTarget>,
        activate: bool,
    ) -> TabId {
        let id = self.next_tab_id();
        let plugin = surface.plugin().to_string();
        let panel = self.place_entry(TabEntry::new(id, title.clone(), surface), target, activate);

        tracing::info!(tab = %id, %panel, title = %title, "opened tab");
        self.items.insert(
            id,
            Item {
                id,
                title,
                plugin,
                placement: Placement::Docked(panel),
            },
        );
        self.finish_mutation();
        id
    }

    /// Close a tab wherever it lives and destroy its content
    pub fn close_tab(&mut self, id: TabId) {
        let Some(item) = self.items.remove(&id) else {
            tracing::debug!(tab = %id, "close ignored: unknown tab");
            return;
        };

        match item.placement {
            Placement::Docked(panel) => {
                if let Some(entry) = self.detach_from_panel(id, panel) {
                    self.emit(Cmd::DestroySurface(entry.surface));
                }
            }
            Placement::Floating { window, surface } => {
                if let Some(window) = window {
                    self.emit(Cmd::CloseWindow(window));
                }
                self.emit(Cmd::DestroySurface(surface));
            }
        }

        tracing::info!(tab = %id, "closed tab");
        self.finish_mutation();
    }

    /// Show a tab: activate it in its panel, or raise its window
    pub fn activate_tab(&mut self, id: TabId) {
        let Some(item) = self.items.get(&id) else {
            tracing::debug!(tab = %id, "activate ignored: unknown tab");
            return;
        };

        match &item.placement {
            Placement::Docked(panel) => {
                let panel = *panel;
                if self
                    .tree
                    .panel_mut(panel)
                    .is_some_and(|p| p.activate(id))
                {
                    self.active_panel = Some(panel);
                    self.emit(Cmd::Redraw);
                }
            }
            Placement::Floating {
                window: Some(window),
                ..
            } => {
                let window = window.clone();
                self.emit(Cmd::BringToFront(window));
            }
            Placement::Floating { window: None, .. } => {
                tracing::debug!(tab = %id, "window not open yet, nothing to raise");
            }
        }
    }

    /// Cycle the active tab of the active panel
    pub fn cycle_tab(&mut self, forward: bool) {
        let panel = self.default_panel();
        if self
            .tree
            .panel_mut(panel)
            .and_then(|p| p.cycle(forward))
            .is_some()
        {
            self.active_panel = Some(panel);
            self.emit(Cmd::Redraw);
        }
    }

    /// Pull a docked tab out of the tree into its own window
    pub fn float_tab(&mut self, id: TabId) {
        let Some(panel) = self.items.get(&id).and_then(Item::panel) else {
            tracing::debug!(tab = %id, "float ignored: not a docked tab");
            return;
        };
        let Some(entry) = self.detach_from_panel(id, panel) else {
            return;
        };

        let Some(item) = self.items.get_mut(&id) else {
            return;
        };
        item.placement = Placement::Floating {
            window: None,
            surface: entry.surface,
        };
        let plugin = item.plugin.clone();

        tracing::info!(tab = %id, plugin = %plugin, "floating tab");
        self.emit(Cmd::DetachWindow { tab: id, plugin });
        self.finish_mutation();
    }

    /// Record the window the host opened for a floating tab.
    ///
    /// If the tab was closed or re-docked in the meantime the window is
    /// orphaned, so it gets closed. Returns whether the handle was kept.
    pub fn attach_window(&mut self, id: TabId, handle: WindowHandle) -> bool {
        if let Some(Item {
            placement: Placement::Floating { window, .. },
            ..
        }) = self.items.get_mut(&id)
        {
            *window = Some(handle);
            return true;
        }

        tracing::debug!(tab = %id, %handle, "closing orphaned window");
        self.emit(Cmd::CloseWindow(handle));
        false
    }

    /// Move a docked tab to a drop target.
    ///
    /// Center moves the tab into the target panel; an edge splits the target.
    /// Dropping onto the tab's own panel is a no-op for center, and for edges
    /// when the tab is the panel's only tab. Returns whether anything changed.
    pub fn move_tab(&mut self, id: TabId, target: DropTarget) -> bool {
        let Some(source) = self.items.get(&id).and_then(Item::panel) else {
            tracing::debug!(tab = %id, "move ignored: not a docked tab");
            return false;
        };
        let Some(target_panel) = self.tree.panel(target.panel) else {
            tracing::debug!(tab = %id, panel = %target.panel, "move ignored: no such panel");
            return false;
        };

        if target.panel == source {
            let only_tab = target_panel.len() <= 1;
            if target.zone == DropZone::Center || only_tab {
                tracing::debug!(tab = %id, zone = ?target.zone, "dropped onto own panel");
                return false;
            }
        }

        let Some(entry) = self.detach_from_panel(id, source) else {
            return false;
        };
        let panel = self.place_entry(entry, Some(target), true);
        if let Some(item) = self.items.get_mut(&id) {
            item.placement = Placement::Docked(panel);
        }

        tracing::info!(tab = %id, from = %source, to = %panel, zone = ?target.zone, "moved tab");
        self.finish_mutation();
        true
    }

    /// Dock a floating tab back into the tree, keeping its id and surface.
    ///
    /// Returns the window it used to live in, if one was known.
    pub fn dock_floating(&mut self, id: TabId, target: Option<DropTarget>) -> Option<WindowHandle> {
        let item = self.items.remove(&id)?;
        let (window, surface) = match item.placement {
            Placement::Floating { window, surface } => (window, surface),
            placement @ Placement::Docked(_) => {
                self.items.insert(id, Item { placement, ..item });
                return None;
            }
        };

        let entry = TabEntry::new(id, item.title.clone(), surface);
        let panel = self.place_entry(entry, target, true);
        self.items.insert(
            id,
            Item {
                placement: Placement::Docked(panel),
                ..item
            },
        );

        tracing::info!(tab = %id, %panel, "re-docked floating tab");
        self.finish_mutation();
        window
    }

    fn find_floating_by_window(&self, window: &WindowHandle) -> Option<TabId> {
        self.items
            .values()
            .find(|item| item.window() == Some(window))
            .map(|item| item.id)
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Pointer pressed on a tab header
    ///
    /// A leftover external gesture is discarded: an in-process press means
    /// the host drag has ended.
    pub fn pointer_down(&mut self, tab: TabId, at: Point) {
        match self.drag.as_ref().map(|d| d.kind) {
            Some(DragKind::Tab) => {
                tracing::debug!(tab = %tab, "pointer down ignored: gesture in flight");
                return;
            }
            Some(DragKind::External) => {
                tracing::debug!(tab = %tab, "discarding stale external drag");
                self.drag = None;
                self.emit(Cmd::Redraw);
            }
            None => {}
        }
        let Some(panel) = self.items.get(&tab).and_then(Item::panel) else {
            tracing::debug!(tab = %tab, "pointer down ignored: not a docked tab");
            return;
        };
        self.drag = Some(DragState::tab(tab, panel, at));
    }

    /// Pointer moved while a gesture may be in flight
    pub fn pointer_move(&mut self, at: Point) {
        let threshold = self.config.threshold;
        // External drags are driven by the host's drag-over events
        let Some(drag) = self.drag.as_mut().filter(|d| d.kind == DragKind::Tab) else {
            return;
        };
        drag.pointer = at;

        if !drag.dragging {
            if !at.exceeds(drag.origin, threshold) {
                return;
            }
            drag.dragging = true;
            tracing::debug!(tab = ?drag.tab, "drag started");
        }

        let target = self.hit_test(at);
        if let Some(drag) = self.drag.as_mut() {
            drag.set_target(target);
        }
        self.emit(Cmd::Redraw);
    }

    /// Pointer released: finish the gesture.
    ///
    /// A release that never passed the threshold is a click and only
    /// activates the pressed tab. The gesture is discarded in every case.
    pub fn pointer_up(&mut self, at: Point) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let (DragKind::Tab, Some(tab)) = (drag.kind, drag.tab) else {
            self.emit(Cmd::Redraw);
            return;
        };

        if !drag.dragging {
            self.activate_tab(tab);
            return;
        }

        tracing::debug!(tab = %tab, x = at.x, y = at.y, target = ?drag.drop_target, "drop");
        match drag.drop_target {
            None => self.float_tab(tab),
            Some(target) => {
                self.move_tab(tab, target);
            }
        }
        self.emit(Cmd::Redraw);
    }

    /// Abandon the current gesture without changing the layout
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("drag cancelled");
            self.emit(Cmd::Redraw);
        }
    }

    /// A detached window is being dragged over the docking surface
    pub fn external_drag_over(&mut self, at: Point) {
        if self
            .drag
            .as_ref()
            .is_some_and(|d| d.kind != DragKind::External)
        {
            return;
        }
        let target = self.hit_test(at);
        let drag = self.drag.get_or_insert_with(|| DragState::external(at));
        drag.pointer = at;
        drag.set_target(target);
        self.emit(Cmd::Redraw);
    }

    /// The host drag left the docking surface or ended elsewhere
    pub fn external_drag_leave(&mut self) {
        if self
            .drag
            .as_ref()
            .is_some_and(|d| d.kind == DragKind::External)
        {
            self.drag = None;
            tracing::debug!("external drag left the dock");
            self.emit(Cmd::Redraw);
        }
    }

    /// A detached window was dropped onto the docking surface.
    ///
    /// The tab is rebuilt at the hit-tested panel and zone (or the default
    /// panel) and the origin window is asked to close.
    pub fn external_drop(&mut self, payload: &DragPayload, at: Point) {
        if self
            .drag
            .as_ref()
            .is_some_and(|d| d.kind == DragKind::External)
        {
            self.drag = None;
        }
        let target = self.hit_test(at).map(|(target, _)| target);

        let floating = payload
            .origin_window_id
            .as_ref()
            .and_then(|window| self.find_floating_by_window(window));

        match floating {
            Some(tab) => {
                self.dock_floating(tab, target);
            }
            None => {
                tracing::debug!(plugin = %payload.plugin_name, "instantiating dropped plugin");
                self.emit(Cmd::InstantiatePlugin {
                    plugin: payload.plugin_name.clone(),
                    target,
                });
            }
        }

        if let Some(window) = &payload.origin_window_id {
            self.emit(Cmd::CloseWindow(window.clone()));
        }
        self.emit(Cmd::Redraw);
    }

    /// Panel and zone under a point
    fn hit_test(&self, at: Point) -> Option<(DropTarget, Rect)> {
        let panel = self.tree.panel_at(at)?;
        let rect = self.tree.rect(panel)?;
        let (fx, fy) = rect.fractions(at)?;
        let zone = DropZone::classify(fx, fy, self.config.edge_fraction);
        Some((DropTarget { panel, zone }, rect))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn next_tab_id(&mut self) -> TabId {
        let id = TabId(self.next_tab_id);
        self.next_tab_id += 1;
        id
    }

    fn emit(&mut self, cmd: Cmd) {
        self.outbox.push(cmd);
    }

    /// Active panel if it is still in the tree, else the first panel
    fn default_panel(&mut self) -> NodeId {
        if let Some(panel) = self.active_panel.filter(|p| self.tree.panel(*p).is_some()) {
            return panel;
        }
        match self.tree.first_panel() {
            Some(panel) => panel,
            None => {
                tracing::warn!("layout tree has no panel, starting over");
                let viewport = self.tree.viewport();
                self.tree = LayoutTree::new();
                self.tree.compute_layout(viewport);
                self.tree.root()
            }
        }
    }

    /// Put a detached tab entry into the tree and mount its surface.
    ///
    /// Returns the panel that now shows it.
    fn place_entry(
        &mut self,
        entry: TabEntry,
        target: Option<DropTarget>,
        activate: bool,
    ) -> NodeId {
        let surface = entry.surface.id();
        let target = target.filter(|t| self.tree.panel(t.panel).is_some());

        let panel = match target {
            Some(DropTarget { panel, zone }) => match zone.orientation() {
                Some(orientation) => self.split_with(entry, panel, orientation, zone),
                None => self.add_to_panel(panel, entry, true),
            },
            None => {
                let panel = self.default_panel();
                self.add_to_panel(panel, entry, activate)
            }
        };

        self.emit(Cmd::MountSurface { surface, panel });
        panel
    }

    fn split_with(
        &mut self,
        entry: TabEntry,
        target: NodeId,
        orientation: crate::model::Orientation,
        zone: DropZone,
    ) -> NodeId {
        let new_panel = self.tree.insert_panel(PanelNode::with_tab(entry));
        match self
            .tree
            .split_panel(target, new_panel, orientation, zone.new_panel_first())
        {
            Ok(split) => {
                tracing::info!(%split, %target, %new_panel, ?orientation, "split panel");
                self.active_panel = Some(new_panel);
                new_panel
            }
            Err(e) => {
                tracing::warn!(%target, "split failed: {}", e);
                let Some(node) = self.tree.take_detached(new_panel) else {
                    return new_panel;
                };
                let crate::model::NodeKind::Panel(mut panel) = node.kind else {
                    return new_panel;
                };
                let tab = panel.tab_ids().next();
                match tab.and_then(|t| panel.remove_tab(t)) {
                    Some(entry) => {
                        let fallback = self.default_panel();
                        self.add_to_panel(fallback, entry, true)
                    }
                    None => self.default_panel(),
                }
            }
        }
    }

    fn add_to_panel(&mut self, panel: NodeId, entry: TabEntry, activate: bool) -> NodeId {
        let tab = entry.id;
        let Some(node) = self.tree.panel_mut(panel) else {
            return panel;
        };
        if let Err(rejected) = node.add_tab(entry, activate) {
            tracing::warn!(tab = %tab, %panel, "tab already present in panel");
            self.emit(Cmd::DestroySurface(rejected.surface));
            return panel;
        }
        if node.active_tab() == Some(tab) {
            self.active_panel = Some(panel);
        }
        panel
    }

    /// Take a tab out of its panel, collapsing the panel if it empties
    fn detach_from_panel(&mut self, tab: TabId, panel: NodeId) -> Option<TabEntry> {
        let node = self.tree.panel_mut(panel)?;
        let entry = node.remove_tab(tab)?;
        let now_empty = node.is_empty();
        self.emit(Cmd::UnmountSurface(entry.surface.id()));

        if now_empty && panel != self.tree.root() {
            match self.tree.remove_panel(panel) {
                Ok(_) => tracing::debug!(%panel, "removed empty panel"),
                Err(e) => tracing::warn!(%panel, "failed to remove empty panel: {}", e),
            }
        }
        self.tree.prune_empty_panels();
        Some(entry)
    }

    fn finish_mutation(&mut self) {
        self.tree.relayout();
        self.emit(Cmd::Redraw);
        debug_assert!(
            self.validate().is_ok(),
            "dock invariants broken: {:?}",
            self.validate()
        );
    }

    /// Check tree invariants plus registry/tree agreement
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.tree.validate()?;

        for item in self.items.values() {
            if let Placement::Docked(panel) = item.placement {
                let shown = self.tree.panel(panel).is_some_and(|p| p.contains(item.id));
                if !shown {
                    return Err(InvariantViolation::ItemNotInPanel {
                        tab: item.id,
                        panel,
                    });
                }
            }
        }

        for panel_id in self.tree.panel_ids() {
            let Some(panel) = self.tree.panel(panel_id) else {
                continue;
            };
            for tab in panel.tab_ids() {
                let registered = self
                    .items
                    .get(&tab)
                    .is_some_and(|item| item.panel() == Some(panel_id));
                if !registered {
                    return Err(InvariantViolation::TabWithoutItem(tab));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SurfaceId;

    fn surface(n: u64) -> Surface {
        Surface::new(SurfaceId(n), "test")
    }

    fn manager() -> DockManager {
        let mut dock = DockManager::new();
        dock.set_viewport(Rect::new(0.0, 0.0, 1000.0, 800.0));
        dock.take_commands();
        dock
    }

    #[test]
    fn test_open_tab_mounts_and_activates() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());

        let root = dock.tree().root();
        assert_eq!(dock.tree().panel(root).unwrap().active_tab(), Some(a));
        assert_eq!(dock.item(a).unwrap().panel(), Some(root));
        assert!(dock.take_commands().contains(&Cmd::MountSurface {
            surface: SurfaceId(1),
            panel: root
        }));
    }

    #[test]
    fn test_inactive_open_keeps_current_tab() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());
        dock.open_tab("B", surface(2), OpenOptions { activate: false });

        let root = dock.tree().root();
        assert_eq!(dock.tree().panel(root).unwrap().active_tab(), Some(a));
    }

    #[test]
    fn test_unknown_tab_operations_are_noops() {
        let mut dock = manager();
        dock.close_tab(TabId(42));
        dock.activate_tab(TabId(42));
        dock.float_tab(TabId(42));
        dock.pointer_down(TabId(42), Point::new(10.0, 10.0));
        assert!(dock.drag().is_none());
        assert!(dock.take_commands().is_empty());
    }

    #[test]
    fn test_center_drop_on_own_panel_is_noop() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());
        let root = dock.tree().root();
        let moved = dock.move_tab(
            a,
            DropTarget {
                panel: root,
                zone: DropZone::Center,
            },
        );
        assert!(!moved);
        assert_eq!(dock.layout().to_string(), "Panel{A}");
    }

    #[test]
    fn test_edge_drop_of_only_tab_on_own_panel_is_noop() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());
        let root = dock.tree().root();
        assert!(!dock.move_tab(
            a,
            DropTarget {
                panel: root,
                zone: DropZone::Left,
            }
        ));
        assert!(dock.validate().is_ok());
    }

    #[test]
    fn test_attach_window_for_closed_tab_closes_it() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());
        dock.float_tab(a);
        dock.close_tab(a);
        dock.take_commands();

        let handle = WindowHandle::new("late");
        assert!(!dock.attach_window(a, handle.clone()));
        assert_eq!(dock.take_commands(), vec![Cmd::CloseWindow(handle)]);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());
        let b = dock.open_tab("B", surface(2), OpenOptions::default());

        dock.pointer_down(a, Point::new(10.0, 10.0));
        dock.pointer_down(b, Point::new(50.0, 10.0));
        assert_eq!(dock.drag().and_then(|d| d.tab), Some(a));
    }

    #[test]
    fn test_external_drag_leave_clears_gesture() {
        let mut dock = manager();
        dock.open_tab("A", surface(1), OpenOptions::default());
        dock.external_drag_over(Point::new(500.0, 400.0));
        assert!(dock.drop_indicator().is_some());

        dock.external_drag_leave();
        assert!(dock.drag().is_none());
        assert!(dock.drop_indicator().is_none());
    }

    #[test]
    fn test_pointer_move_ignores_external_gesture() {
        let mut dock = manager();
        dock.open_tab("A", surface(1), OpenOptions::default());
        dock.external_drag_over(Point::new(500.0, 400.0));
        let before = dock.drop_indicator();
        dock.take_commands();

        dock.pointer_move(Point::new(10.0, 400.0));
        assert_eq!(dock.drop_indicator(), before);
        assert!(dock.take_commands().is_empty());
    }

    #[test]
    fn test_press_replaces_stale_external_gesture() {
        let mut dock = manager();
        let a = dock.open_tab("A", surface(1), OpenOptions::default());
        dock.external_drag_over(Point::new(500.0, 400.0));

        dock.pointer_down(a, Point::new(10.0, 10.0));
        let drag = dock.drag().unwrap();
        assert_eq!(drag.kind, DragKind::Tab);
        assert_eq!(drag.tab, Some(a));
    }
}
