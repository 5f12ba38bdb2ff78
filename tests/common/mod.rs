//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockshell::bridge::{BridgeError, WindowHandle, WindowHost};
use dockshell::config::ShellConfig;
use dockshell::content::{ContentProvider, Surface, SurfaceId};
use dockshell::dock::{DockManager, DropTarget, DropZone, OpenOptions};
use dockshell::model::{NodeId, Point, Rect, TabId};
use dockshell::runtime::Shell;

/// Viewport used by every fixture
pub const VIEWPORT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1000.0,
    height: 800.0,
};

/// Everything a `RecordingHost` was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create(String),
    Close(WindowHandle),
    Front(WindowHandle),
}

/// Window host that records calls and can be told to fail window creation
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub open: Vec<WindowHandle>,
    pub fail_create: bool,
    next: u64,
}

impl RecordingHost {
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn closed(&self) -> Vec<WindowHandle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Close(h) => Some(h.clone()),
                _ => None,
            })
            .collect()
    }
}

impl WindowHost for RecordingHost {
    fn create_detached_window(&mut self, plugin: &str) -> Result<WindowHandle, BridgeError> {
        self.calls.push(HostCall::Create(plugin.to_string()));
        if self.fail_create {
            return Err(BridgeError::CreateFailed {
                plugin: plugin.to_string(),
                reason: "test host refuses".to_string(),
            });
        }
        self.next += 1;
        let handle = WindowHandle(format!("w{}", self.next));
        self.open.push(handle.clone());
        Ok(handle)
    }

    fn close_window(&mut self, handle: &WindowHandle) -> Result<(), BridgeError> {
        self.calls.push(HostCall::Close(handle.clone()));
        self.open.retain(|h| h != handle);
        Ok(())
    }

    fn bring_to_front(&mut self, handle: &WindowHandle) -> Result<(), BridgeError> {
        self.calls.push(HostCall::Front(handle.clone()));
        Ok(())
    }
}

/// Content provider that accepts any plugin and records what happens to
/// each surface
#[derive(Debug, Default)]
pub struct RecordingProvider {
    next: u64,
    pub mounted: Vec<(SurfaceId, NodeId)>,
    pub unmounted: Vec<SurfaceId>,
    pub destroyed: Vec<SurfaceId>,
}

impl RecordingProvider {
    /// Region a surface was most recently mounted into, unless unmounted since
    pub fn region_of(&self, surface: SurfaceId) -> Option<NodeId> {
        let mounts = self.mounted.iter().filter(|(s, _)| *s == surface).count();
        let unmounts = self.unmounted.iter().filter(|s| **s == surface).count();
        if mounts > unmounts {
            self.mounted
                .iter()
                .rev()
                .find(|(s, _)| *s == surface)
                .map(|(_, region)| *region)
        } else {
            None
        }
    }
}

impl ContentProvider for RecordingProvider {
    fn create_surface(&mut self, plugin: &str) -> Option<(String, Surface)> {
        self.next += 1;
        Some((plugin.to_string(), Surface::new(SurfaceId(self.next), plugin)))
    }

    fn mount(&mut self, surface: SurfaceId, region: NodeId) {
        self.mounted.push((surface, region));
    }

    fn unmount(&mut self, surface: SurfaceId) {
        self.unmounted.push(surface);
    }

    fn destroy(&mut self, surface: Surface) {
        self.destroyed.push(surface.id());
    }
}

/// A manager laid out over `VIEWPORT` with its startup commands drained
pub fn dock() -> DockManager {
    let mut dock = DockManager::new();
    dock.set_viewport(VIEWPORT);
    dock.take_commands();
    dock
}

/// Surface ids start at 100 so they never collide with tab ids in asserts
pub fn surface(n: u64, plugin: &str) -> Surface {
    Surface::new(SurfaceId(100 + n), plugin)
}

/// Open tabs titled by `titles`, each backed by a plugin of the same name
pub fn dock_with(titles: &[&str]) -> (DockManager, Vec<TabId>) {
    let mut dock = dock();
    let ids = titles
        .iter()
        .enumerate()
        .map(|(i, title)| dock.open_tab(*title, surface(i as u64, title), OpenOptions::default()))
        .collect();
    dock.take_commands();
    (dock, ids)
}

/// A shell with recording collaborators, laid out but without startup tabs
pub fn shell() -> Shell<RecordingHost, RecordingProvider> {
    shell_with_host(RecordingHost::default())
}

pub fn shell_with_host(host: RecordingHost) -> Shell<RecordingHost, RecordingProvider> {
    let config = ShellConfig {
        open_plugin_manager: false,
        ..ShellConfig::default()
    };
    let mut shell = Shell::new(config, host, RecordingProvider::default());
    shell.startup(VIEWPORT);
    shell
}

pub fn target(panel: NodeId, zone: DropZone) -> DropTarget {
    DropTarget { panel, zone }
}

/// A point at the given fractions of a panel's rect
pub fn point_in(dock: &DockManager, panel: NodeId, fx: f32, fy: f32) -> Point {
    let rect = dock.tree().rect(panel).unwrap_or_default();
    Point::new(rect.x + rect.width * fx, rect.y + rect.height * fy)
}

/// Press on `tab`, move past the threshold to `to`, and release there
pub fn drag_tab(dock: &mut DockManager, tab: TabId, to: Point) {
    dock.pointer_down(tab, Point::new(5.0, 5.0));
    dock.pointer_move(to);
    dock.pointer_up(to);
}

/// Compact layout shape, e.g. `Row(Panel{A}, Panel{B})`
pub fn shape(dock: &DockManager) -> String {
    dock.layout().to_string()
}
