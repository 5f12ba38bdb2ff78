//! Runtime module - executes the layout engine's side effects
//!
//! - `shell` - the command loop wiring `DockManager` to a windowing host and
//!   a content provider
//! - `script` - replays recorded UI steps through a shell

pub mod script;
pub mod shell;

pub use script::{load_script, parse_script, run_script, Step, TabRef};
pub use shell::Shell;
