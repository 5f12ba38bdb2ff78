//! Plugin discovery and the content provider backed by it
//!
//! Each plugin lives in its own folder under the plugins directory with a
//! `plugin.json` manifest. The registry instantiates surfaces only for
//! enabled plugins, plus the built-in plugin manager.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::{ContentProvider, Surface, SurfaceId};
use crate::model::NodeId;

/// Name of the built-in plugin manager
pub const PLUGIN_MANAGER: &str = "plugin-manager";

/// Tab title of the built-in plugin manager
pub const PLUGIN_MANAGER_TITLE: &str = "Plugin Manager";

/// Manifest file expected in every plugin folder
pub const MANIFEST_FILE: &str = "plugin.json";

/// Parsed `plugin.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    /// Free-form plugin category (e.g. "ui", "service")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Page the plugin renders into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
    /// Background entry point, if the plugin runs one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<String>,
    /// Folder the manifest was found in
    #[serde(skip)]
    pub dir: PathBuf,
}

/// Read one manifest file
pub fn load_manifest(path: &Path) -> Result<PluginManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: PluginManifest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    manifest.dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(manifest)
}

/// Scan `dir/*/plugin.json`, ordered by folder name.
///
/// A missing directory yields no plugins; malformed manifests are skipped.
pub fn load_plugins(dir: &Path) -> Vec<PluginManifest> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Plugins directory {} not readable: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut folders: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    folders.sort();

    let mut manifests = Vec::new();
    for folder in folders {
        let manifest_path = folder.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            continue;
        }
        match load_manifest(&manifest_path) {
            Ok(manifest) => {
                tracing::debug!(plugin = %manifest.name, "loaded plugin manifest");
                manifests.push(manifest);
            }
            Err(e) => tracing::warn!("Skipping plugin: {:#}", e),
        }
    }

    tracing::info!("Loaded {} plugins from {}", manifests.len(), dir.display());
    manifests
}

/// Content provider backed by plugin manifests
#[derive(Debug, Default)]
pub struct PluginRegistry {
    manifests: Vec<PluginManifest>,
    enabled: HashSet<String>,
    next_surface: u64,
    live: HashSet<SurfaceId>,
    mounted: HashMap<SurfaceId, NodeId>,
}

impl PluginRegistry {
    pub fn new(manifests: Vec<PluginManifest>, enabled: &[String]) -> Self {
        Self {
            manifests,
            enabled: enabled.iter().cloned().collect(),
            ..Self::default()
        }
    }

    pub fn manifests(&self) -> &[PluginManifest] {
        &self.manifests
    }

    pub fn manifest(&self, name: &str) -> Option<&PluginManifest> {
        self.manifests.iter().find(|m| m.name == name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.enabled.insert(name.to_string());
        } else {
            self.enabled.remove(name);
        }
    }

    /// Region a surface is currently mounted in
    pub fn mounted_region(&self, surface: SurfaceId) -> Option<NodeId> {
        self.mounted.get(&surface).copied()
    }

    /// Number of surfaces created and not yet destroyed
    pub fn live_surfaces(&self) -> usize {
        self.live.len()
    }

    fn next_surface(&mut self, plugin: &str) -> Surface {
        self.next_surface += 1;
        let surface = Surface::new(SurfaceId(self.next_surface), plugin);
        self.live.insert(surface.id());
        surface
    }
}

impl ContentProvider for PluginRegistry {
    fn create_surface(&mut self, plugin: &str) -> Option<(String, Surface)> {
        if plugin == PLUGIN_MANAGER {
            return Some((PLUGIN_MANAGER_TITLE.to_string(), self.next_surface(plugin)));
        }

        if !self.is_enabled(plugin) {
            tracing::warn!(plugin, "refusing to instantiate disabled plugin");
            return None;
        }
        let Some(manifest) = self.manifest(plugin) else {
            tracing::warn!(plugin, "no manifest for plugin");
            return None;
        };
        let title = manifest.name.clone();
        Some((title, self.next_surface(plugin)))
    }

    fn mount(&mut self, surface: SurfaceId, region: NodeId) {
        self.mounted.insert(surface, region);
    }

    fn unmount(&mut self, surface: SurfaceId) {
        self.mounted.remove(&surface);
    }

    fn destroy(&mut self, surface: Surface) {
        self.mounted.remove(&surface.id());
        self.live.remove(&surface.id());
        tracing::debug!(surface = %surface.id(), plugin = surface.plugin(), "destroyed surface");
    }
}
