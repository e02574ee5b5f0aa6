// ABOUTME: Poll loop — fixed-interval ticks that refresh logs and check both alert kinds.
// ABOUTME: Each tick runs in its own task so a prompt left open never delays the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;

use crate::alert::{AlertKind, ArmTransition};
use crate::client::MonitorService;
use crate::monitor::events::MonitorEvent;
use crate::monitor::state::MonitorState;
use crate::notifier::Notifier;

/// What a single tick observed. `None` marks a fetch that failed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub logs: Option<usize>,
    pub strain: Option<ArmTransition>,
    pub fatigue: Option<ArmTransition>,
}

impl TickReport {
    pub fn transition(&self, kind: AlertKind) -> Option<ArmTransition> {
        match kind {
            AlertKind::Strain => self.strain,
            AlertKind::Fatigue => self.fatigue,
        }
    }
}

/// Performs the fetches of one poll tick.
pub struct Poller {
    service: Arc<dyn MonitorService>,
    state: Arc<Mutex<MonitorState>>,
    notifier: Notifier,
    events: mpsc::Sender<MonitorEvent>,
}

impl Poller {
    pub fn new(
        service: Arc<dyn MonitorService>,
        state: Arc<Mutex<MonitorState>>,
        notifier: Notifier,
        events: mpsc::Sender<MonitorEvent>,
    ) -> Self {
        Self {
            service,
            state,
            notifier,
            events,
        }
    }

    /// Run one tick: log refresh and both alert checks, concurrently.
    ///
    /// `PollCompleted` goes out as soon as the fetches finish; any rising
    /// edge is then notified and acknowledged before this returns.
    pub async fn poll_once(&self) -> TickReport {
        let (logs, strain, fatigue) = tokio::join!(
            self.refresh_logs(),
            self.check_alert(AlertKind::Strain),
            self.check_alert(AlertKind::Fatigue),
        );
        let clean = logs.is_some() && strain.is_some() && fatigue.is_some();
        let _ = self
            .events
            .send(MonitorEvent::PollCompleted {
                at: chrono::Local::now(),
                clean,
            })
            .await;

        tokio::join!(
            self.deliver(AlertKind::Strain, strain),
            self.deliver(AlertKind::Fatigue, fatigue),
        );
        TickReport {
            logs,
            strain,
            fatigue,
        }
    }

    async fn refresh_logs(&self) -> Option<usize> {
        match self.service.fetch_logs().await {
            Ok(lines) => {
                let count = lines.len();
                let _ = self.events.send(MonitorEvent::LogsReplaced(lines)).await;
                Some(count)
            }
            Err(e) => {
                self.report_failure(format!("Log fetch failed: {}", e)).await;
                None
            }
        }
    }

    /// Check one alert kind and apply the reading to its arming state.
    async fn check_alert(&self, kind: AlertKind) -> Option<ArmTransition> {
        let alert_active = match self.service.check_alert(kind).await {
            Ok(active) => active,
            Err(e) => {
                self.report_failure(format!("{} check failed: {}", kind.title(), e))
                    .await;
                return None;
            }
        };

        let (transition, arming) = {
            let mut state = self.state.lock().await;
            let transition = state.on_poll_result(kind, alert_active);
            (transition, state.alerts.clone())
        };
        tracing::debug!(%kind, alert_active, ?transition, "alert checked");

        if transition != ArmTransition::Suppressed {
            let _ = self.events.send(MonitorEvent::Arming(arming)).await;
        }
        Some(transition)
    }

    /// On a rising edge, notify the user and acknowledge once the prompt is dismissed.
    async fn deliver(&self, kind: AlertKind, transition: Option<ArmTransition>) {
        if transition != Some(ArmTransition::Fire) {
            return;
        }
        // No lock is held here, so an open prompt never blocks other ticks
        // or the controller.
        tracing::info!(%kind, "alert fired");
        self.notifier.notify(kind).await;
        if let Err(e) = self.service.acknowledge(kind).await {
            self.report_failure(format!("{} acknowledgment failed: {}", kind.title(), e))
                .await;
        }
    }

    async fn report_failure(&self, message: String) {
        tracing::warn!("{}", message);
        let _ = self.events.send(MonitorEvent::Error(message)).await;
    }
}

/// Tick every `period`, starting immediately, until `shutdown` flips to true.
///
/// Ticks are never skipped or serialized: each one runs as its own task, so
/// a slow tick may overlap the next. On shutdown the loop waits for ticks
/// still in flight, so acknowledgments for prompts dismissed during exit
/// are still sent.
pub async fn run_poll_loop(
    poller: Arc<Poller>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                while ticks.try_join_next().is_some() {}
                let poller = Arc::clone(&poller);
                ticks.spawn(async move {
                    poller.poll_once().await;
                });
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    tracing::debug!(in_flight = ticks.len(), "poll loop stopping");
    while let Some(result) = ticks.join_next().await {
        if let Err(e) = result {
            tracing::warn!(error = %e, "poll tick task failed");
        }
    }
    tracing::debug!("poll loop stopped");
}
