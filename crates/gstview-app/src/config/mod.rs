//! Configuration file parsing for gstview
//!
//! Reads `<config-dir>/gstview/config.toml`. A missing or unreadable file is
//! not an error; defaults apply and a warning lands in the log.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, load_settings_from};
pub use types::{ApiSettings, BehaviorSettings, Settings};
