//! Pointer gesture handlers (tab clicks and drags)

use crate::commands::Cmd;
use crate::dock::DockManager;
use crate::messages::PointerMsg;

/// Update function for pointer messages
pub fn update_pointer(dock: &mut DockManager, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down { tab, pos } => dock.pointer_down(tab, pos),
        PointerMsg::Move { pos } => dock.pointer_move(pos),
        PointerMsg::Up { pos } => dock.pointer_up(pos),
        PointerMsg::Cancel => dock.cancel_drag(),
    }

    Cmd::batch(dock.take_commands())
}
