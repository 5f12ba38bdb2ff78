//! Tracing setup and layout diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug` - only the message log from `update`
//! - `RUST_LOG=dockshell::dock=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockshell/logs/dockshell.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::dock::DockManager;
use crate::model::ItemMode;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. It goes to
/// stderr so printed layouts on stdout stay clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Counts describing the shape of the dock, for before/after diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSummary {
    pub panels: usize,
    pub splits: usize,
    pub docked: usize,
    pub floating: usize,
}

impl LayoutSummary {
    pub fn from_manager(dock: &DockManager) -> Self {
        let panels = dock.tree().panel_ids().len();
        let floating = dock
            .items()
            .iter()
            .filter(|item| item.mode() == ItemMode::Floating)
            .count();
        Self {
            panels,
            splits: dock.tree().len().saturating_sub(panels),
            docked: dock.item_count() - floating,
            floating,
        }
    }

    /// Describe what changed between two summaries
    pub fn diff(&self, other: &LayoutSummary) -> Option<String> {
        let mut changes = Vec::new();
        let fields = [
            ("panels", self.panels, other.panels),
            ("splits", self.splits, other.splits),
            ("docked", self.docked, other.docked),
            ("floating", self.floating, other.floating),
        ];
        for (name, before, after) in fields {
            if before != after {
                changes.push(format!("{}: {} → {}", name, before, after));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_diff_lists_changed_counts() {
        let before = LayoutSummary {
            panels: 1,
            splits: 0,
            docked: 2,
            floating: 0,
        };
        let after = LayoutSummary {
            panels: 2,
            splits: 1,
            ..before
        };
        assert_eq!(
            before.diff(&after),
            Some("panels: 1 → 2; splits: 0 → 1".to_string())
        );
        assert_eq!(before.diff(&before), None);
    }
}
