//! Dockshell - a tabbed docking layout engine
//!
//! This crate provides the split-tree layout model, the dock manager that
//! keeps it consistent under tab moves, splits and drag-and-drop, and a
//! shell runtime that executes the resulting side effects against a
//! windowing host and a content provider, following the Elm Architecture.

pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod content;
pub mod dock;
pub mod messages;
pub mod model;
pub mod plugins;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use bridge::{DragPayload, HeadlessHost, WindowHandle, WindowHost};
pub use commands::Cmd;
pub use config::ShellConfig;
pub use content::{ContentProvider, Surface, SurfaceId};
pub use dock::{DockManager, DropTarget, DropZone, OpenOptions};
pub use messages::Msg;
pub use model::{LayoutSnapshot, LayoutTree, NodeId, Rect, TabId};
pub use plugins::PluginRegistry;
pub use runtime::Shell;
