//! gstview-tui - Terminal UI for gstview
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! layout, widgets, the view function, and the runner owning the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
