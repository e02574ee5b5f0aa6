// ABOUTME: Wire types for the monitoring service's JSON endpoints.
// ABOUTME: Unknown status strings decode to an Other variant instead of failing.

use serde::{Deserialize, Serialize};

/// Body of `POST /start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartRequest {
    pub camera: String,
}

/// Status reported by `POST /start`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartStatus {
    Started,
    AlreadyRunning,
    #[serde(other)]
    Other,
}

/// Response of `POST /start`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartResponse {
    pub status: StartStatus,
    #[serde(default)]
    pub message: Option<String>,
}

impl StartResponse {
    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            StartStatus::Started | StartStatus::AlreadyRunning
        )
    }
}

/// Status reported by `POST /stop`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    Stopped,
    #[serde(other)]
    Other,
}

/// Response of `POST /stop`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopResponse {
    pub status: StopStatus,
}

/// Response of the `GET /should_alert_*` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AlertResponse {
    pub alert: bool,
}
