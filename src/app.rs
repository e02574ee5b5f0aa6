// ABOUTME: App orchestrator — wires the service client, controller, poll loop, notifier, and TUI.
// ABOUTME: Spawns the background tasks, runs the TUI until quit, then shuts everything down.

use std::sync::Arc;

use tokio::sync::{mpsc, watch, Mutex};

use crate::client::{HttpMonitorClient, MonitorService};
use crate::config::Config;
use crate::monitor::{
    MonitorEvent, MonitorState, Poller, SessionController, UserCommand, run_command_loop,
    run_poll_loop,
};
use crate::notifier::Notifier;
use crate::tui::TuiState;
use crate::tui::runner;

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application: set up subsystems, start polling, and drive the TUI.
    pub async fn run(self) -> anyhow::Result<()> {
        let client = HttpMonitorClient::new(&self.config.server)?;
        let service: Arc<dyn MonitorService> = Arc::new(client);
        tracing::info!(server = %self.config.server.base_url, "starting blinkwatch");

        self.run_with_service(service).await
    }

    async fn run_with_service(self, service: Arc<dyn MonitorService>) -> anyhow::Result<()> {
        let state = Arc::new(Mutex::new(MonitorState::new()));

        // Channels for monitor <-> TUI communication.
        let (event_tx, event_rx) = mpsc::channel::<MonitorEvent>(64);
        let (command_tx, command_rx) = mpsc::channel::<UserCommand>(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let notifier = Notifier::new(Notifier::tone_player(&self.config.tone), event_tx.clone());
        let poller = Arc::new(Poller::new(
            Arc::clone(&service),
            Arc::clone(&state),
            notifier,
            event_tx.clone(),
        ));
        let controller = Arc::new(SessionController::new(
            Arc::clone(&service),
            Arc::clone(&state),
            event_tx,
        ));

        let poll_handle = tokio::spawn(run_poll_loop(
            poller,
            self.config.poll.interval(),
            shutdown_rx,
        ));
        let command_handle = tokio::spawn(run_command_loop(controller, command_rx));

        let mut tui_state = TuiState::new(
            self.config.server.base_url.clone(),
            self.config.camera.available.clone(),
            &self.config.camera.default,
        );

        // Run the TUI — blocks until quit.
        let result = runner::run(&mut tui_state, event_rx, command_tx.clone()).await;

        // Signal background tasks to stop and wait for them.
        let _ = shutdown_tx.send(true);
        let _ = command_tx.send(UserCommand::Quit).await;
        drop(command_tx);
        let _ = poll_handle.await;
        let _ = command_handle.await;

        if tui_state.session_active {
            tracing::info!("exiting with an active session; the server keeps streaming");
        }
        tracing::info!("blinkwatch stopped");

        result
    }
}
