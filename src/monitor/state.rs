// ABOUTME: In-memory controller state — one session sub-state and two alert arming sub-states.
// ABOUTME: Transition functions here are pure; the controller and poll loop do the I/O around them.

use crate::alert::{AlertArming, AlertKind, ArmTransition};
use crate::client::{StartResponse, StartStatus, StopResponse, StopStatus};

/// Whether a capture session is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub active: bool,
    /// Camera the active session was started with.
    pub camera: Option<String>,
}

/// Result of applying a `/start` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Session is running; `already_running` distinguishes a remote no-op.
    Started { already_running: bool },
    /// Remote refused; state is unchanged.
    Rejected { message: String },
}

/// Result of applying a `/stop` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,
    /// Status other than `stopped`; state is left as it was.
    Unexpected,
}

/// All mutable client state, owned by a single controller instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorState {
    pub session: SessionState,
    pub alerts: AlertArming,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the response to a start request for `camera`.
    ///
    /// `started` and `already_running` both activate the session; neither
    /// touches alert arming.
    pub fn apply_start(&mut self, camera: &str, response: &StartResponse) -> StartOutcome {
        if response.is_success() {
            let already_running = response.status == StartStatus::AlreadyRunning;
            self.session.active = true;
            self.session.camera = Some(camera.to_string());
            StartOutcome::Started { already_running }
        } else {
            let message = response
                .message
                .clone()
                .unwrap_or_else(|| "Unknown error starting camera".to_string());
            StartOutcome::Rejected { message }
        }
    }

    /// Apply the response to a stop request.
    ///
    /// A successful stop is a reset barrier: both alert kinds return to Armed
    /// whatever their prior state.
    pub fn apply_stop(&mut self, response: &StopResponse) -> StopOutcome {
        match response.status {
            StopStatus::Stopped => {
                self.session = SessionState::default();
                self.alerts.reset_all();
                StopOutcome::Stopped
            }
            StopStatus::Other => StopOutcome::Unexpected,
        }
    }

    pub fn on_poll_result(&mut self, kind: AlertKind, alert_active: bool) -> ArmTransition {
        self.alerts.on_poll_result(kind, alert_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::ArmState;

    fn start_response(status: StartStatus, message: Option<&str>) -> StartResponse {
        StartResponse {
            status,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn new_state_is_inactive_and_armed() {
        let state = MonitorState::new();
        assert!(!state.session.active);
        assert_eq!(state.alerts.strain.state(), ArmState::Armed);
        assert_eq!(state.alerts.fatigue.state(), ArmState::Armed);
    }

    #[test]
    fn started_activates_session() {
        let mut state = MonitorState::new();
        let outcome = state.apply_start("0", &start_response(StartStatus::Started, None));
        assert_eq!(outcome, StartOutcome::Started { already_running: false });
        assert!(state.session.active);
        assert_eq!(state.session.camera.as_deref(), Some("0"));
    }

    #[test]
    fn already_running_keeps_alert_arming() {
        let mut state = MonitorState::new();
        state.on_poll_result(AlertKind::Strain, true);
        let outcome =
            state.apply_start("1", &start_response(StartStatus::AlreadyRunning, None));
        assert_eq!(outcome, StartOutcome::Started { already_running: true });
        assert!(state.session.active);
        assert!(state.alerts.strain.shown());
    }

    #[test]
    fn rejected_start_leaves_state_unchanged() {
        let mut state = MonitorState::new();
        let before = state.clone();
        let outcome =
            state.apply_start("0", &start_response(StartStatus::Other, Some("camera busy")));
        assert_eq!(
            outcome,
            StartOutcome::Rejected {
                message: "camera busy".to_string()
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn rejected_start_without_message_gets_fallback() {
        let mut state = MonitorState::new();
        let outcome = state.apply_start("0", &start_response(StartStatus::Other, None));
        assert!(matches!(outcome, StartOutcome::Rejected { message } if !message.is_empty()));
    }

    #[test]
    fn stop_resets_both_alert_kinds() {
        let mut state = MonitorState::new();
        state.apply_start("0", &start_response(StartStatus::Started, None));
        state.on_poll_result(AlertKind::Strain, true);
        state.on_poll_result(AlertKind::Fatigue, true);

        let outcome = state.apply_stop(&StopResponse {
            status: StopStatus::Stopped,
        });
        assert_eq!(outcome, StopOutcome::Stopped);
        assert!(!state.session.active);
        assert!(state.session.camera.is_none());
        assert!(!state.alerts.strain.shown());
        assert!(!state.alerts.fatigue.shown());
    }

    #[test]
    fn unexpected_stop_status_changes_nothing() {
        let mut state = MonitorState::new();
        state.apply_start("0", &start_response(StartStatus::Started, None));
        state.on_poll_result(AlertKind::Fatigue, true);
        let before = state.clone();

        let outcome = state.apply_stop(&StopResponse {
            status: StopStatus::Other,
        });
        assert_eq!(outcome, StopOutcome::Unexpected);
        assert_eq!(state, before);
    }
}
