// ABOUTME: Monitor core — controller state, session controller, and the poll loop.
// ABOUTME: All shared state lives in one MonitorState behind a single mutex.

pub mod controller;
pub mod events;
pub mod poll;
pub mod state;

pub use controller::{SessionController, run_command_loop};
pub use events::{MonitorEvent, UserCommand};
pub use poll::{Poller, TickReport, run_poll_loop};
pub use state::{MonitorState, SessionState, StartOutcome, StopOutcome};
