//! Command-line argument parsing for the shell
//!
//! Supports:
//! - Alternate settings file and plugins directory
//! - Replaying a scripted session
//! - Choosing the viewport size and the layout output format

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::model::Rect;

/// Default docking surface size when `--viewport` is not given
pub const DEFAULT_VIEWPORT: &str = "1200x800";

/// A docking shell for plugin panels
#[derive(Parser, Debug)]
#[command(name = "dockshell", version, about = "A docking shell for plugin panels")]
pub struct CliArgs {
    /// Settings file (JSON, or YAML by extension)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Plugins directory (overrides `pluginsDirectory` from settings)
    #[arg(long, value_name = "DIR")]
    pub plugins: Option<PathBuf>,

    /// YAML script of UI steps to replay after startup
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Size of the docking surface, e.g. 1200x800
    #[arg(long, value_name = "WxH", default_value = DEFAULT_VIEWPORT)]
    pub viewport: String,

    /// How to print the final layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,
}

/// Output format for the final layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline
    Tree,
    Json,
    Yaml,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub settings_path: Option<PathBuf>,
    pub plugins_dir: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub viewport: Rect,
    pub format: OutputFormat,
}

/// Parse `WxH` into a viewport rectangle at the origin
pub fn parse_viewport(s: &str) -> Result<Rect, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid viewport '{}': expected WxH", s))?;
    let width: f32 = w
        .trim()
        .parse()
        .map_err(|_| format!("Invalid viewport width '{}'", w))?;
    let height: f32 = h
        .trim()
        .parse()
        .map_err(|_| format!("Invalid viewport height '{}'", h))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("Viewport must be positive, got {}", s));
    }
    Ok(Rect::new(0.0, 0.0, width, height))
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let viewport = parse_viewport(&self.viewport)?;
        Ok(StartupConfig {
            settings_path: self.settings,
            plugins_dir: self.plugins,
            script: self.script,
            viewport,
            format: self.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(viewport: &str) -> CliArgs {
        CliArgs {
            settings: None,
            plugins: None,
            script: None,
            viewport: viewport.to_string(),
            format: OutputFormat::Tree,
        }
    }

    #[test]
    fn test_default_viewport() {
        let config = args(DEFAULT_VIEWPORT).into_config().unwrap();
        assert_eq!(config.viewport, Rect::new(0.0, 0.0, 1200.0, 800.0));
    }

    #[test]
    fn test_invalid_viewport() {
        assert!(args("1200").into_config().is_err());
        assert!(args("axb").into_config().is_err());
        assert!(args("0x100").into_config().is_err());
    }

    #[test]
    fn test_parse_from_command_line() {
        let cli = CliArgs::try_parse_from([
            "dockshell",
            "--viewport",
            "800X600",
            "--format",
            "json",
            "--script",
            "session.yaml",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let config = cli.into_config().unwrap();
        assert_eq!(config.viewport, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(config.script, Some(PathBuf::from("session.yaml")));
    }
}
