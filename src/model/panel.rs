//! Panel nodes - the leaves of the layout tree
//!
//! A panel shows a tab bar and exactly one active tab's content.

use crate::content::Surface;

use super::node::TabId;

/// A tab hosted by a panel
#[derive(Debug)]
pub struct TabEntry {
    pub id: TabId,
    pub title: String,
    pub surface: Surface,
}

impl TabEntry {
    pub fn new(id: TabId, title: impl Into<String>, surface: Surface) -> Self {
        Self {
            id,
            title: title.into(),
            surface,
        }
    }
}

/// Leaf node: an ordered set of tabs with one active tab
#[derive(Debug, Default)]
pub struct PanelNode {
    /// Insertion order is the visual tab order
    tabs: Vec<TabEntry>,
    active_tab: Option<TabId>,
}

impl PanelNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel holding a single, active tab
    pub fn with_tab(entry: TabEntry) -> Self {
        let active_tab = Some(entry.id);
        Self {
            tabs: vec![entry],
            active_tab,
        }
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn tab_ids(&self) -> impl Iterator<Item = TabId> + '_ {
        self.tabs.iter().map(|t| t.id)
    }

    pub fn tab(&self, id: TabId) -> Option<&TabEntry> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active_tab
    }

    /// Append a tab.
    ///
    /// A tab id that is already present leaves the panel untouched and hands
    /// the entry back to the caller.
    pub fn add_tab(&mut self, entry: TabEntry, activate: bool) -> Result<(), TabEntry> {
        if self.contains(entry.id) {
            return Err(entry);
        }

        let id = entry.id;
        self.tabs.push(entry);

        if activate || self.active_tab.is_none() {
            self.active_tab = Some(id);
        }
        Ok(())
    }

    /// Detach a tab without destroying its surface.
    ///
    /// If the removed tab was active, the first remaining tab becomes active.
    pub fn remove_tab(&mut self, id: TabId) -> Option<TabEntry> {
        let index = self.tabs.iter().position(|t| t.id == id)?;
        let entry = self.tabs.remove(index);

        if self.active_tab == Some(id) {
            self.active_tab = self.tabs.first().map(|t| t.id);
        }
        Some(entry)
    }

    /// Make `id` the active tab. Returns false if the tab is not here.
    pub fn activate(&mut self, id: TabId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active_tab = Some(id);
        true
    }

    /// Activate the next (or previous) tab, wrapping around
    pub fn cycle(&mut self, forward: bool) -> Option<TabId> {
        if self.tabs.is_empty() {
            return None;
        }

        let len = self.tabs.len();
        let current = self
            .active_tab
            .and_then(|id| self.tabs.iter().position(|t| t.id == id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        let id = self.tabs[next].id;
        self.active_tab = Some(id);
        Some(id)
    }
}
