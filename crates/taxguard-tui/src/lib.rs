//! taxguard-tui - Terminal UI for the tax fraud detection client
//!
//! Provides the ratatui-based interface: event polling, the four screen
//! widgets and the main loop that drives `taxguard-app`.

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
