// ABOUTME: Channel message types between the monitor tasks and the TUI.
// ABOUTME: MonitorEvent flows to the display; UserCommand flows back to the session controller.

use chrono::{DateTime, Local};
use tokio::sync::oneshot;

use crate::alert::{AlertArming, AlertKind};

/// Events sent from the controller, poll loop and notifier to the TUI.
pub enum MonitorEvent {
    /// Session is running; the feed sink should show `feed_url`.
    SessionStarted {
        camera: String,
        feed_url: String,
        already_running: bool,
    },
    /// `/start` was refused or failed; shown as a blocking message.
    StartRejected { message: String },
    /// Session stopped; feed sink cleared.
    SessionStopped,
    /// `/stop` did not confirm; the control keeps its current affordance.
    StopFailed { message: String },
    /// Full replacement of the displayed log lines.
    LogsReplaced(Vec<String>),
    /// `/clear_logs` succeeded.
    LogsCleared,
    /// Blocking alert prompt. The responder fires when the user dismisses it.
    AlertPrompt {
        kind: AlertKind,
        text: String,
        responder: oneshot::Sender<()>,
    },
    /// Snapshot of both arming states after a transition.
    Arming(AlertArming),
    /// A poll tick finished all of its fetches. `clean` is false if any failed.
    PollCompleted { at: DateTime<Local>, clean: bool },
    /// A non-fatal failure worth showing in the status bar.
    Error(String),
}

/// Commands sent from the TUI to the session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Start with `camera` if inactive, otherwise stop.
    Toggle { camera: String },
    ClearLogs,
    Quit,
}
