//! Shell settings persistence
//!
//! Stores user preferences in `~/.config/dockshell/settings.json`. The keys
//! are camelCase so an existing `settings.json` from the desktop shell loads
//! unchanged. Files ending in `.yaml`/`.yml` are read and written as YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dock::{DragConfig, DRAG_THRESHOLD, EDGE_FRACTION};

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Where plugin folders live. Relative paths resolve against the
    /// settings file's directory.
    #[serde(default = "default_plugins_directory")]
    pub plugins_directory: PathBuf,

    /// Plugins instantiated at startup, in order
    #[serde(default)]
    pub enabled_plugins: Vec<String>,

    /// Pointer travel that turns a tab press into a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,

    /// Share of a panel's width/height treated as an edge drop zone
    #[serde(default = "default_edge_fraction")]
    pub edge_fraction: f32,

    /// Open the built-in plugin manager tab at startup
    #[serde(default = "default_true")]
    pub open_plugin_manager: bool,
}

fn default_plugins_directory() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_drag_threshold() -> f32 {
    DRAG_THRESHOLD
}

fn default_edge_fraction() -> f32 {
    EDGE_FRACTION
}

fn default_true() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            plugins_directory: default_plugins_directory(),
            enabled_plugins: Vec::new(),
            drag_threshold: default_drag_threshold(),
            edge_fraction: default_edge_fraction(),
            open_plugin_manager: true,
        }
    }
}

/// Travel must be a finite, non-negative distance
fn valid_threshold(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Edge zones must leave room for the center zone
fn valid_edge_fraction(value: f32) -> bool {
    value > 0.0 && value < 0.5
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

impl ShellConfig {
    /// Load settings from the default location, or return defaults if missing
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::settings_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings at {}", path.display()))?;

        let mut config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse settings at {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse settings at {}", path.display()))?
        };

        config.sanitize();

        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Replace out-of-range drag tunables with their defaults
    pub fn sanitize(&mut self) {
        if !valid_threshold(self.drag_threshold) {
            tracing::warn!(
                "dragThreshold {} must be >= 0, using {}",
                self.drag_threshold,
                DRAG_THRESHOLD
            );
            self.drag_threshold = DRAG_THRESHOLD;
        }
        if !valid_edge_fraction(self.edge_fraction) {
            tracing::warn!(
                "edgeFraction {} must be between 0 and 0.5, using {}",
                self.edge_fraction,
                EDGE_FRACTION
            );
            self.edge_fraction = EDGE_FRACTION;
        }
    }

    /// Save settings to an explicit file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = if is_yaml(path) {
            serde_yaml::to_string(self).context("Failed to serialize settings")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Drag tunables for the dock manager
    pub fn drag_config(&self) -> DragConfig {
        let mut config = self.clone();
        config.sanitize();
        DragConfig {
            threshold: config.drag_threshold,
            edge_fraction: config.edge_fraction,
        }
    }

    /// Resolve `pluginsDirectory` against the directory holding the settings
    pub fn resolve_plugins_dir(&self, settings_dir: Option<&Path>) -> PathBuf {
        if self.plugins_directory.is_absolute() {
            return self.plugins_directory.clone();
        }
        match settings_dir {
            Some(base) => base.join(&self.plugins_directory),
            None => self.plugins_directory.clone(),
        }
    }

    pub fn is_enabled(&self, plugin: &str) -> bool {
        self.enabled_plugins.iter().any(|p| p == plugin)
    }

    /// Flip a plugin's enabled state. Returns the new state.
    pub fn toggle_plugin(&mut self, plugin: &str) -> bool {
        if let Some(index) = self.enabled_plugins.iter().position(|p| p == plugin) {
            self.enabled_plugins.remove(index);
            false
        } else {
            self.enabled_plugins.push(plugin.to_string());
            true
        }
    }
}
