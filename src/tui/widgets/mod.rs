// ABOUTME: TUI widget sub-modules for controls, log panel, alert modal, and status bar.
// ABOUTME: Each widget is a pure rendering function over TuiState fields.

pub mod controls;
pub mod logs;
pub mod modal;
pub mod status;
