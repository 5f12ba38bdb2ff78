//! Scripted sessions
//!
//! A script is a YAML list of UI steps replayed through a `Shell`, e.g.
//!
//! ```yaml
//! - action: open
//!   plugin: traffic-grapher
//! - action: press
//!   tab: traffic-grapher
//!   x: 40
//!   y: 12
//! - action: move
//!   x: 1150
//!   y: 400
//! - action: release
//!   x: 1150
//!   y: 400
//! ```
//!
//! Tabs are referred to by id or by title.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::bridge::{DragPayload, WindowHandle, WindowHost, PLUGIN_DRAG_MIME};
use crate::messages::{DockMsg, ExternalMsg, Msg, PointerMsg};
use crate::model::{Point, Rect, TabId};
use crate::plugins::PluginRegistry;

use super::shell::Shell;

/// A tab named by id or by title
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TabRef {
    Id(u64),
    Title(String),
}

fn default_true() -> bool {
    true
}

/// One recorded UI step
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Open {
        plugin: String,
        #[serde(default = "default_true")]
        activate: bool,
    },
    Press { tab: TabRef, x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release { x: f32, y: f32 },
    Cancel,
    Close { tab: TabRef },
    Activate { tab: TabRef },
    Float { tab: TabRef },
    NextTab,
    PrevTab,
    Resize { width: f32, height: f32 },
    DragOver { x: f32, y: f32 },
    DragLeave,
    ExternalDrop {
        plugin: String,
        #[serde(default)]
        window: Option<String>,
        x: f32,
        y: f32,
    },
    Toggle { plugin: String },
}

pub fn parse_script(yaml: &str) -> Result<Vec<Step>> {
    serde_yaml::from_str(yaml).context("Failed to parse script")
}

pub fn load_script(path: &Path) -> Result<Vec<Step>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("In script {}", path.display()))
}

fn resolve<H: WindowHost>(shell: &Shell<H, PluginRegistry>, tab: &TabRef) -> Result<TabId> {
    match tab {
        TabRef::Id(id) => Ok(TabId(*id)),
        TabRef::Title(title) => shell
            .dock()
            .find_tab_by_title(title)
            .ok_or_else(|| anyhow!("no tab titled '{}'", title)),
    }
}

/// Replay steps in order, stopping at the first step that can't be resolved
pub fn run_script<H: WindowHost>(
    shell: &mut Shell<H, PluginRegistry>,
    steps: &[Step],
) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        run_step(shell, step).with_context(|| format!("step {} ({:?})", index + 1, step))?;
    }
    Ok(())
}

fn run_step<H: WindowHost>(shell: &mut Shell<H, PluginRegistry>, step: &Step) -> Result<()> {
    tracing::debug!(?step, "script step");
    let msg = match step {
        Step::Open { plugin, activate } => {
            shell
                .open_plugin(plugin, *activate)
                .ok_or_else(|| anyhow!("plugin '{}' is not available", plugin))?;
            return Ok(());
        }
        Step::Toggle { plugin } => {
            shell.toggle_plugin(plugin);
            return Ok(());
        }
        Step::Press { tab, x, y } => Msg::Pointer(PointerMsg::Down {
            tab: resolve(shell, tab)?,
            pos: Point::new(*x, *y),
        }),
        Step::Move { x, y } => Msg::pointer_move(*x, *y),
        Step::Release { x, y } => Msg::pointer_up(*x, *y),
        Step::Cancel => Msg::Pointer(PointerMsg::Cancel),
        Step::Close { tab } => Msg::Dock(DockMsg::CloseTab(resolve(shell, tab)?)),
        Step::Activate { tab } => Msg::Dock(DockMsg::ActivateTab(resolve(shell, tab)?)),
        Step::Float { tab } => Msg::Dock(DockMsg::FloatTab(resolve(shell, tab)?)),
        Step::NextTab => Msg::Dock(DockMsg::NextTab),
        Step::PrevTab => Msg::Dock(DockMsg::PrevTab),
        Step::Resize { width, height } => {
            Msg::Dock(DockMsg::Resize(Rect::new(0.0, 0.0, *width, *height)))
        }
        Step::DragOver { x, y } => Msg::External(ExternalMsg::DragOver {
            pos: Point::new(*x, *y),
        }),
        Step::DragLeave => Msg::External(ExternalMsg::Leave),
        Step::ExternalDrop {
            plugin,
            window,
            x,
            y,
        } => {
            let payload = DragPayload::new(plugin.clone(), window.clone().map(WindowHandle));
            Msg::External(ExternalMsg::Drop {
                mime: PLUGIN_DRAG_MIME.to_string(),
                data: payload.to_json(),
                pos: Point::new(*x, *y),
            })
        }
    };

    shell.dispatch(msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse_script(
            r#"
- action: open
  plugin: grapher
  activate: false
- action: press
  tab: 2
  x: 10
  y: 5
- action: release
  x: 10
  y: 5
- action: close
  tab: Plugin Manager
- action: external_drop
  plugin: grapher
  window: window-1
  x: 5
  y: 5
- action: cancel
- action: drag_leave
"#,
        )
        .unwrap();

        assert_eq!(
            steps[0],
            Step::Open {
                plugin: "grapher".to_string(),
                activate: false
            }
        );
        assert_eq!(
            steps[1],
            Step::Press {
                tab: TabRef::Id(2),
                x: 10.0,
                y: 5.0
            }
        );
        assert_eq!(
            steps[3],
            Step::Close {
                tab: TabRef::Title("Plugin Manager".to_string())
            }
        );
        assert!(matches!(
            &steps[4],
            Step::ExternalDrop { window: Some(w), .. } if w == "window-1"
        ));
        assert_eq!(steps[5], Step::Cancel);
        assert_eq!(steps[6], Step::DragLeave);
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        assert!(parse_script("- action: explode").is_err());
    }
}
