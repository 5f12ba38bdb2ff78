//! Where dockshell keeps its files
//!
//! Settings and logs live in the per-user config directory
//! (`~/.config/dockshell/` or `%APPDATA%\dockshell\`). Plugin folders are
//! looked up next to whichever settings file is in use.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "dockshell";
const SETTINGS_FILE: &str = "settings.json";
const LOGS_DIR: &str = "logs";

/// File name prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "dockshell.log";

/// Per-user config directory.
///
/// `$XDG_CONFIG_HOME/dockshell` when set, else `~/.config/dockshell`;
/// `%APPDATA%\dockshell` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Default settings file, `<config dir>/settings.json`
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Directory a relative `pluginsDirectory` is resolved against: the folder
/// of an explicit settings file, else the config directory.
pub fn settings_base(settings_path: Option<&Path>) -> Option<PathBuf> {
    match settings_path {
        Some(path) => path.parent().map(Path::to_path_buf),
        None => config_dir(),
    }
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join(LOGS_DIR);
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
