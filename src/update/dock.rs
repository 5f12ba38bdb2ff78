//! Dock update handlers
//!
//! Handles tab operations that don't involve a pointer gesture.

use crate::commands::Cmd;
use crate::dock::DockManager;
use crate::messages::DockMsg;

/// Update function for dock messages
pub fn update_dock(dock: &mut DockManager, msg: DockMsg) -> Option<Cmd> {
    match msg {
        DockMsg::CloseTab(tab) => dock.close_tab(tab),
        DockMsg::ActivateTab(tab) => dock.activate_tab(tab),
        DockMsg::FloatTab(tab) => dock.float_tab(tab),
        DockMsg::MoveTab { tab, target } => {
            dock.move_tab(tab, target);
        }
        DockMsg::NextTab => dock.cycle_tab(true),
        DockMsg::PrevTab => dock.cycle_tab(false),
        DockMsg::Resize(rect) => dock.set_viewport(rect),
        DockMsg::WindowOpened { tab, window } => {
            dock.attach_window(tab, window);
        }
    }

    Cmd::batch(dock.take_commands())
}
