// ABOUTME: Library root for blinkwatch — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod alert;
pub mod app;
pub mod client;
pub mod config;
pub mod monitor;
pub mod notifier;
pub mod tui;
