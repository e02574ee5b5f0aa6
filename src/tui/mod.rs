// ABOUTME: TUI module — ratatui full-screen controller for the monitoring service.
// ABOUTME: Camera selector, start/stop control, live feed, log panel, status bar, and alert modals.

pub mod input;
pub mod runner;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;
