//! Settings loader for gstview/config.toml

use std::path::{Path, PathBuf};

use tracing::warn;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const GSTVIEW_DIR: &str = "gstview";

/// Path of the user's config file, if a config directory exists on this
/// platform.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(GSTVIEW_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user's config file.
///
/// Never fails: a missing file or a file that does not parse yields the
/// defaults (with a logged warning for the latter).
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from a specific path (defaults on any problem).
pub fn load_settings_from(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Settings::default(),
    };

    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid config file");
            Settings::default()
        }
    }
}
