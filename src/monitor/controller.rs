// ABOUTME: Stream session controller — start/stop/toggle against the remote service.
// ABOUTME: Applies responses to MonitorState and tells the display what changed.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::client::{ClientError, MonitorService};
use crate::monitor::events::{MonitorEvent, UserCommand};
use crate::monitor::state::{MonitorState, StartOutcome, StopOutcome};

/// Drives session start/stop and log clearing.
pub struct SessionController {
    service: Arc<dyn MonitorService>,
    state: Arc<Mutex<MonitorState>>,
    events: mpsc::Sender<MonitorEvent>,
}

impl SessionController {
    pub fn new(
        service: Arc<dyn MonitorService>,
        state: Arc<Mutex<MonitorState>>,
        events: mpsc::Sender<MonitorEvent>,
    ) -> Self {
        Self {
            service,
            state,
            events,
        }
    }

    pub async fn is_active(&self) -> bool {
        self.state.lock().await.session.active
    }

    /// Request a session on `camera`. No retry on failure.
    pub async fn start(&self, camera: &str) -> Result<StartOutcome, ClientError> {
        let response = match self.service.start(camera).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%camera, error = %e, "start request failed");
                self.emit(MonitorEvent::StartRejected {
                    message: e.to_string(),
                })
                .await;
                return Err(e);
            }
        };

        let outcome = self.state.lock().await.apply_start(camera, &response);
        match &outcome {
            StartOutcome::Started { already_running } => {
                tracing::info!(%camera, already_running, "session started");
                self.emit(MonitorEvent::SessionStarted {
                    camera: camera.to_string(),
                    feed_url: self.service.feed_url(),
                    already_running: *already_running,
                })
                .await;
            }
            StartOutcome::Rejected { message } => {
                tracing::warn!(%camera, %message, "start rejected");
                self.emit(MonitorEvent::StartRejected {
                    message: message.clone(),
                })
                .await;
            }
        }
        Ok(outcome)
    }

    /// Request the session stop. On success both alert kinds are re-armed.
    pub async fn stop(&self) -> Result<StopOutcome, ClientError> {
        let response = match self.service.stop().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "stop request failed");
                self.emit(MonitorEvent::StopFailed {
                    message: e.to_string(),
                })
                .await;
                return Err(e);
            }
        };

        let (outcome, arming) = {
            let mut state = self.state.lock().await;
            let outcome = state.apply_stop(&response);
            (outcome, state.alerts.clone())
        };
        match outcome {
            StopOutcome::Stopped => {
                tracing::info!("session stopped; alerts re-armed");
                self.emit(MonitorEvent::SessionStopped).await;
                self.emit(MonitorEvent::Arming(arming)).await;
            }
            StopOutcome::Unexpected => {
                // The remote may still be streaming; the control keeps showing Stop.
                tracing::warn!(?response, "stop returned unexpected status");
                self.emit(MonitorEvent::StopFailed {
                    message: "stop was not confirmed by the server".to_string(),
                })
                .await;
            }
        }
        Ok(outcome)
    }

    /// The single user-facing action: start with `camera` or stop.
    pub async fn toggle(&self, camera: &str) {
        if self.is_active().await {
            let _ = self.stop().await;
        } else {
            let _ = self.start(camera).await;
        }
    }

    /// Clear the remote log buffer; the display empties only on success.
    pub async fn clear_logs(&self) {
        match self.service.clear_logs().await {
            Ok(()) => self.emit(MonitorEvent::LogsCleared).await,
            Err(e) => {
                tracing::warn!(error = %e, "clear logs failed");
                self.emit(MonitorEvent::Error(format!("Clear logs failed: {}", e)))
                    .await;
            }
        }
    }

    async fn emit(&self, event: MonitorEvent) {
        // The display may already be gone during shutdown.
        let _ = self.events.send(event).await;
    }
}

/// Process user commands one at a time until Quit or the channel closes.
pub async fn run_command_loop(
    controller: Arc<SessionController>,
    mut commands: mpsc::Receiver<UserCommand>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UserCommand::Toggle { camera } => controller.toggle(&camera).await,
            UserCommand::ClearLogs => controller.clear_logs().await,
            UserCommand::Quit => break,
        }
    }
}
