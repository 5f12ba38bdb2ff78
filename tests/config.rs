//! Tests for settings persistence

use std::path::PathBuf;

use dockshell::config::ShellConfig;
use dockshell::config_paths::settings_base;
use dockshell::dock::{DropZone, DRAG_THRESHOLD, EDGE_FRACTION};
use tempfile::TempDir;

fn sample() -> ShellConfig {
    ShellConfig {
        plugins_directory: PathBuf::from("extra/plugins"),
        enabled_plugins: vec!["traffic-grapher".to_string(), "python-sniffer".to_string()],
        drag_threshold: 8.0,
        edge_fraction: 0.3,
        open_plugin_manager: false,
    }
}

#[test]
fn test_json_settings_use_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    sample().save_to(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["pluginsDirectory"], "extra/plugins");
    assert_eq!(raw["enabledPlugins"][1], "python-sniffer");
    assert_eq!(raw["openPluginManager"], false);

    assert_eq!(ShellConfig::load_from(&path).unwrap(), sample());
}

#[test]
fn test_yaml_settings_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.yaml");
    sample().save_to(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("enabledPlugins:"));
    assert_eq!(ShellConfig::load_from(&path).unwrap(), sample());
}

#[test]
fn test_desktop_settings_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
  "pluginsDirectory": "plugins",
  "enabledPlugins": ["traffic-grapher"],
  "renderHTML": "renderer/index.html"
}"#,
    )
    .unwrap();

    let config = ShellConfig::load_from(&path).unwrap();
    assert_eq!(config.enabled_plugins, vec!["traffic-grapher".to_string()]);
    assert_eq!(config.drag_config().threshold, 5.0);
    assert_eq!(
        config.resolve_plugins_dir(Some(dir.path())),
        dir.path().join("plugins")
    );
}

#[test]
fn test_malformed_settings_report_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ShellConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("settings.json"));
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(ShellConfig::load_from(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_out_of_range_drag_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"edgeFraction": 0.6, "dragThreshold": -3}"#).unwrap();

    let config = ShellConfig::load_from(&path).unwrap();
    assert_eq!(config.edge_fraction, EDGE_FRACTION);
    assert_eq!(config.drag_threshold, DRAG_THRESHOLD);

    // The middle of a panel is a center drop again
    let drag = config.drag_config();
    assert_eq!(
        DropZone::classify(0.5, 0.5, drag.edge_fraction),
        DropZone::Center
    );
}

#[test]
fn test_drag_config_guards_unsanitized_values() {
    let config = ShellConfig {
        edge_fraction: 0.75,
        ..sample()
    };
    assert_eq!(config.drag_config().edge_fraction, EDGE_FRACTION);
    assert_eq!(config.drag_config().threshold, 8.0);
}

#[test]
fn test_plugins_dir_follows_explicit_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "pluginsDirectory: extra\n").unwrap();

    let config = ShellConfig::load_from(&path).unwrap();
    let base = settings_base(Some(&path));
    assert_eq!(
        config.resolve_plugins_dir(base.as_deref()),
        dir.path().join("extra")
    );
}
