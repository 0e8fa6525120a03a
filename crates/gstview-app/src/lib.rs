//! gstview-app - Application state and update logic for gstview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `AppState` is the model, `Message` the event vocabulary, and
//! `handler::update` the single place where state changes. Configuration
//! loading lives here too.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus, FETCH_ERROR_DISPLAY, FETCH_ERROR_LOG};
