// ABOUTME: Monitoring service client — the request/response calls the controller consumes.
// ABOUTME: MonitorService is the seam; HttpMonitorClient speaks the JSON endpoints over HTTP.

pub mod error;
pub mod http;
pub mod types;

pub use error::ClientError;
pub use http::HttpMonitorClient;
pub use types::*;

use async_trait::async_trait;

use crate::alert::AlertKind;

/// Remote calls made by the session controller and the poll loop.
#[async_trait]
pub trait MonitorService: Send + Sync {
    /// `POST /start` for the given camera identifier.
    async fn start(&self, camera: &str) -> Result<StartResponse, ClientError>;

    /// `POST /stop`.
    async fn stop(&self) -> Result<StopResponse, ClientError>;

    /// `GET /get_logs`, ordered oldest first.
    async fn fetch_logs(&self) -> Result<Vec<String>, ClientError>;

    /// `POST /clear_logs`. The response body is ignored.
    async fn clear_logs(&self) -> Result<(), ClientError>;

    /// `GET /should_alert_<kind>`.
    async fn check_alert(&self, kind: AlertKind) -> Result<bool, ClientError>;

    /// `POST /acknowledge_<kind>`. The response body is ignored.
    async fn acknowledge(&self, kind: AlertKind) -> Result<(), ClientError>;

    /// Source reference for the live feed sink.
    fn feed_url(&self) -> String;
}
