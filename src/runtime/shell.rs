//! The shell: owns the dock manager and its two collaborators
//!
//! Messages go through `update`, and the commands that come back are executed
//! here against the windowing host and the content provider. Results that
//! need to flow back into the layout (a detached window's handle) are sent as
//! follow-up messages and processed before `dispatch` returns.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::bridge::{BridgeError, WindowHost};
use crate::commands::Cmd;
use crate::config::ShellConfig;
use crate::content::ContentProvider;
use crate::dock::{DockManager, OpenOptions};
use crate::messages::{DockMsg, Msg};
use crate::model::{LayoutSnapshot, Rect, TabId};
use crate::plugins::{PluginRegistry, PLUGIN_MANAGER};
use crate::update::update;

pub struct Shell<H: WindowHost, C: ContentProvider> {
    dock: DockManager,
    host: H,
    content: C,
    config: ShellConfig,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Bridge failures seen so far; the layout is never rolled back for them
    bridge_errors: Vec<BridgeError>,
    redraws: usize,
}

impl<H: WindowHost, C: ContentProvider> Shell<H, C> {
    pub fn new(config: ShellConfig, host: H, content: C) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            dock: DockManager::with_config(config.drag_config()),
            host,
            content,
            config,
            msg_tx,
            msg_rx,
            bridge_errors: Vec::new(),
            redraws: 0,
        }
    }

    pub fn dock(&self) -> &DockManager {
        &self.dock
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn layout(&self) -> LayoutSnapshot {
        self.dock.layout()
    }

    pub fn bridge_errors(&self) -> &[BridgeError] {
        &self.bridge_errors
    }

    /// Number of commands so far that asked for a repaint
    pub fn redraw_requests(&self) -> usize {
        self.redraws
    }

    /// Lay out the viewport and open the initial tabs.
    ///
    /// The plugin manager (if configured) is opened first and stays active;
    /// each enabled plugin then gets one inactive tab.
    pub fn startup(&mut self, viewport: Rect) {
        self.dispatch(Msg::Dock(DockMsg::Resize(viewport)));

        if self.config.open_plugin_manager {
            self.open_plugin(PLUGIN_MANAGER, true);
        }

        let enabled = self.config.enabled_plugins.clone();
        for plugin in enabled {
            if self.open_plugin(&plugin, false).is_none() {
                tracing::warn!(plugin = %plugin, "failed to start plugin");
            }
        }
    }

    /// Process a message and everything it triggers. Returns whether a
    /// repaint was requested.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let mut needs_redraw = false;
        if let Some(cmd) = update(&mut self.dock, msg) {
            needs_redraw |= cmd.needs_redraw();
            self.process_cmd(cmd);
        }
        needs_redraw |= self.process_async_messages();
        needs_redraw
    }

    /// Instantiate a plugin into the default panel
    pub fn open_plugin(&mut self, plugin: &str, activate: bool) -> Option<TabId> {
        let (title, surface) = self.content.create_surface(plugin)?;
        let tab = self.dock.open_tab(title, surface, OpenOptions { activate });
        self.flush();
        Some(tab)
    }

    /// Close every tab (docked or floating) created from `plugin`
    pub fn close_plugin_tabs(&mut self, plugin: &str) -> usize {
        let tabs = self.dock.tabs_for_plugin(plugin);
        for tab in &tabs {
            self.dispatch(Msg::Dock(DockMsg::CloseTab(*tab)));
        }
        tabs.len()
    }

    /// Execute commands the manager queued outside of `update`
    fn flush(&mut self) {
        let cmds = self.dock.take_commands();
        if let Some(cmd) = Cmd::batch(cmds) {
            self.process_cmd(cmd);
        }
        self.process_async_messages();
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.redraws += 1;
        }
        for cmd in cmd.into_vec() {
            self.execute(cmd);
        }
    }

    fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::MountSurface { surface, panel } => self.content.mount(surface, panel),
            Cmd::UnmountSurface(surface) => self.content.unmount(surface),
            Cmd::DestroySurface(surface) => self.content.destroy(surface),
            Cmd::DetachWindow { tab, plugin } => {
                match self.host.create_detached_window(&plugin) {
                    Ok(window) => {
                        let _ = self
                            .msg_tx
                            .send(Msg::Dock(DockMsg::WindowOpened { tab, window }));
                    }
                    Err(e) => self.bridge_failed(e),
                }
            }
            Cmd::CloseWindow(window) => {
                if let Err(e) = self.host.close_window(&window) {
                    self.bridge_failed(e);
                }
            }
            Cmd::BringToFront(window) => {
                if let Err(e) = self.host.bring_to_front(&window) {
                    self.bridge_failed(e);
                }
            }
            Cmd::InstantiatePlugin { plugin, target } => {
                match self.content.create_surface(&plugin) {
                    Some((title, surface)) => {
                        self.dock.dock_new_tab(title, surface, target);
                        let cmds = self.dock.take_commands();
                        if let Some(cmd) = Cmd::batch(cmds) {
                            self.process_cmd(cmd);
                        }
                    }
                    None => tracing::warn!(plugin = %plugin, "cannot instantiate plugin"),
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
        }
    }

    fn bridge_failed(&mut self, e: BridgeError) {
        tracing::warn!("window host: {}", e);
        self.bridge_errors.push(e);
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.dock, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }
}

impl<H: WindowHost> Shell<H, PluginRegistry> {
    /// Enable or disable a plugin. Returns the new state.
    ///
    /// Enabling opens one inactive instance; disabling closes all of its tabs.
    pub fn toggle_plugin(&mut self, plugin: &str) -> bool {
        let enabled = self.config.toggle_plugin(plugin);
        self.content.set_enabled(plugin, enabled);

        if enabled {
            self.open_plugin(plugin, false);
        } else {
            let closed = self.close_plugin_tabs(plugin);
            tracing::info!(plugin, closed, "disabled plugin");
        }
        enabled
    }
}
