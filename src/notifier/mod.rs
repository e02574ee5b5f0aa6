// ABOUTME: Notifier — plays the alert tone and holds the caller until the user dismisses a prompt.
// ABOUTME: Audio and prompt are independent; a tone failure never suppresses the prompt.

pub mod tone;

pub use tone::{CommandTonePlayer, SilentTonePlayer, TonePlayer};

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::alert::AlertKind;
use crate::config::ToneConfig;
use crate::monitor::events::MonitorEvent;

/// Produces the audible cue and blocking prompt for an alert kind.
pub struct Notifier {
    tone: Arc<dyn TonePlayer>,
    events: mpsc::Sender<MonitorEvent>,
}

impl Notifier {
    pub fn new(tone: Arc<dyn TonePlayer>, events: mpsc::Sender<MonitorEvent>) -> Self {
        Self { tone, events }
    }

    /// Build the tone player described by the config.
    pub fn tone_player(config: &ToneConfig) -> Arc<dyn TonePlayer> {
        if config.enabled {
            Arc::new(CommandTonePlayer::new(config))
        } else {
            Arc::new(SilentTonePlayer)
        }
    }

    /// Sound the tone and wait for the user to dismiss the prompt for `kind`.
    ///
    /// Returns once the prompt is dismissed, or immediately if the display is
    /// gone, so the caller can send its acknowledgment afterwards.
    pub async fn notify(&self, kind: AlertKind) {
        let tone = Arc::clone(&self.tone);
        tokio::spawn(async move {
            if let Err(e) = tone.play().await {
                tracing::warn!(%kind, error = %e, "alert tone failed");
            }
        });

        let (responder, dismissed) = oneshot::channel();
        let prompt = MonitorEvent::AlertPrompt {
            kind,
            text: kind.prompt_text().to_string(),
            responder,
        };
        if self.events.send(prompt).await.is_err() {
            tracing::warn!(%kind, "display closed; alert prompt not shown");
            return;
        }

        // A dropped responder means the display shut down; treat it as dismissed.
        let _ = dismissed.await;
        tracing::info!(%kind, "alert prompt dismissed");
    }
}
