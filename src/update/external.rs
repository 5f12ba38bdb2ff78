//! Drags arriving from detached windows

use crate::bridge::{DragPayload, PLUGIN_DRAG_MIME};
use crate::commands::Cmd;
use crate::dock::DockManager;
use crate::messages::ExternalMsg;

/// Update function for external drag messages
pub fn update_external(dock: &mut DockManager, msg: ExternalMsg) -> Option<Cmd> {
    match msg {
        ExternalMsg::DragOver { pos } => dock.external_drag_over(pos),
        ExternalMsg::Leave => dock.external_drag_leave(),
        ExternalMsg::Drop { mime, .. } if mime != PLUGIN_DRAG_MIME => {
            tracing::debug!(%mime, "ignoring drop of foreign data");
            dock.external_drag_leave();
        }
        ExternalMsg::Drop { data, pos, .. } => match DragPayload::from_json(&data) {
            Ok(payload) => dock.external_drop(&payload, pos),
            Err(e) => {
                tracing::warn!("ignoring external drop: {}", e);
                dock.external_drag_leave();
            }
        },
    }

    Cmd::batch(dock.take_commands())
}
