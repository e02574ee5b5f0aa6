// ABOUTME: TUI state — camera selector, session control, feed sink, log panel, and modal queue.
// ABOUTME: Monitor events are folded in here; rendering reads it without side effects.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use tokio::sync::oneshot;

use crate::alert::{AlertArming, AlertKind};
use crate::monitor::events::MonitorEvent;

/// What a modal is reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Alert prompt; dismissal releases the pending acknowledgment.
    Alert(AlertKind),
    /// Plain blocking message such as a rejected start.
    Message,
}

/// A blocking prompt shown over the rest of the screen.
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub text: String,
    /// One-shot channel signalled when the user dismisses the modal.
    pub responder: Option<oneshot::Sender<()>>,
}

/// Full TUI application state.
pub struct TuiState {
    pub server_url: String,
    pub cameras: Vec<String>,
    pub selected_camera: usize,
    pub session_active: bool,
    pub session_camera: Option<String>,
    /// Live feed source reference; `None` when the sink is cleared.
    pub feed_url: Option<String>,
    /// A start/stop request is in flight; the control ignores presses.
    pub toggle_pending: bool,
    pub logs: Vec<String>,
    /// Lines scrolled up from the bottom of the log panel.
    pub log_scroll: u16,
    pub modals: VecDeque<Modal>,
    pub arming: AlertArming,
    pub last_poll: Option<DateTime<Local>>,
    pub last_error: Option<String>,
}

impl TuiState {
    /// Create state for the given server and camera list, selecting `default_camera`.
    pub fn new(server_url: String, cameras: Vec<String>, default_camera: &str) -> Self {
        let cameras = if cameras.is_empty() {
            vec![default_camera.to_string()]
        } else {
            cameras
        };
        let selected_camera = cameras
            .iter()
            .position(|c| c == default_camera)
            .unwrap_or(0);
        Self {
            server_url,
            cameras,
            selected_camera,
            session_active: false,
            session_camera: None,
            feed_url: None,
            toggle_pending: false,
            logs: Vec::new(),
            log_scroll: 0,
            modals: VecDeque::new(),
            arming: AlertArming::default(),
            last_poll: None,
            last_error: None,
        }
    }

    /// Currently selected camera identifier.
    pub fn selected_camera(&self) -> &str {
        &self.cameras[self.selected_camera]
    }

    /// Cycle the camera selector. Locked while a session is active.
    pub fn cycle_camera(&mut self, forward: bool) {
        if self.session_active || self.cameras.len() < 2 {
            return;
        }
        let len = self.cameras.len();
        self.selected_camera = if forward {
            (self.selected_camera + 1) % len
        } else {
            (self.selected_camera + len - 1) % len
        };
    }

    /// Label of the start/stop control.
    pub fn control_label(&self) -> &'static str {
        if self.session_active { "Stop" } else { "Start" }
    }

    pub fn has_modal(&self) -> bool {
        !self.modals.is_empty()
    }

    pub fn current_modal(&self) -> Option<&Modal> {
        self.modals.front()
    }

    /// Dismiss the front modal, releasing whoever waits on it.
    pub fn dismiss_modal(&mut self) -> Option<ModalKind> {
        let mut modal = self.modals.pop_front()?;
        if let Some(responder) = modal.responder.take() {
            // The notifier may have been dropped at shutdown; nothing to release then.
            let _ = responder.send(());
        }
        Some(modal.kind)
    }

    pub fn scroll_logs_up(&mut self, lines: u16) {
        self.log_scroll = self.log_scroll.saturating_add(lines);
    }

    pub fn scroll_logs_down(&mut self, lines: u16) {
        self.log_scroll = self.log_scroll.saturating_sub(lines);
    }

    /// Fold a monitor event into the display state.
    pub fn apply_event(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::SessionStarted {
                camera, feed_url, ..
            } => {
                self.session_active = true;
                self.session_camera = Some(camera);
                self.feed_url = Some(feed_url);
                self.toggle_pending = false;
            }
            MonitorEvent::StartRejected { message } => {
                self.toggle_pending = false;
                self.modals.push_back(Modal {
                    kind: ModalKind::Message,
                    title: "Error".to_string(),
                    text: format!("Error: {}", message),
                    responder: None,
                });
            }
            MonitorEvent::SessionStopped => {
                self.session_active = false;
                self.session_camera = None;
                self.feed_url = None;
                self.toggle_pending = false;
            }
            MonitorEvent::StopFailed { message } => {
                self.toggle_pending = false;
                self.last_error = Some(format!("Stop failed: {}", message));
            }
            MonitorEvent::LogsReplaced(lines) => {
                self.logs = lines;
            }
            MonitorEvent::LogsCleared => {
                self.logs.clear();
                self.log_scroll = 0;
            }
            MonitorEvent::AlertPrompt {
                kind,
                text,
                responder,
            } => {
                self.modals.push_back(Modal {
                    kind: ModalKind::Alert(kind),
                    title: kind.title().to_string(),
                    text,
                    responder: Some(responder),
                });
            }
            MonitorEvent::Arming(arming) => {
                self.arming = arming;
            }
            MonitorEvent::PollCompleted { at, clean } => {
                self.last_poll = Some(at);
                if clean {
                    self.last_error = None;
                }
            }
            MonitorEvent::Error(message) => {
                self.last_error = Some(message);
            }
        }
    }
}
