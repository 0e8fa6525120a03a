//! Settings types

use serde::{Deserialize, Serialize};

use gstview_api::DEFAULT_BASE_URL;

/// All settings, as parsed from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Lookup service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the lookup service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Drop the previous record when a refresh fails.
    /// Off by default: the last good data stays visible next to the error.
    #[serde(default)]
    pub clear_on_error: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(!settings.behavior.clear_on_error);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(!settings.behavior.clear_on_error);
    }

    #[test]
    fn test_partial_section_fills_in_defaults() {
        let settings: Settings = toml::from_str("[behavior]\nclear_on_error = true\n").unwrap();
        assert!(settings.behavior.clear_on_error);
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    }
}
