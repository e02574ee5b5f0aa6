// ABOUTME: reqwest-backed implementation of MonitorService.
// ABOUTME: Maps each endpoint to a JSON call and classifies failures into ClientError.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::alert::AlertKind;
use crate::client::error::ClientError;
use crate::client::types::{AlertResponse, StartRequest, StartResponse, StopResponse};
use crate::client::MonitorService;
use crate::config::ServerConfig;

const START_PATH: &str = "/start";
const STOP_PATH: &str = "/stop";
const LOGS_PATH: &str = "/get_logs";
const CLEAR_LOGS_PATH: &str = "/clear_logs";
const FEED_PATH: &str = "/video_feed";

/// HTTP client for the monitoring service.
#[derive(Clone)]
pub struct HttpMonitorClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpMonitorClient {
    /// Create a client for the configured server.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| ClientError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        path: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { path, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                path,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        path: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport { path, source })?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            path,
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ClientError> {
        let response = self.send(path, self.http_client.get(self.url(path))).await?;
        Self::decode(path, response).await
    }

    async fn post_ignored(&self, path: &'static str) -> Result<(), ClientError> {
        self.send(path, self.http_client.post(self.url(path))).await?;
        Ok(())
    }
}

#[async_trait]
impl MonitorService for HttpMonitorClient {
    async fn start(&self, camera: &str) -> Result<StartResponse, ClientError> {
        let body = StartRequest {
            camera: camera.to_string(),
        };
        let request = self.http_client.post(self.url(START_PATH)).json(&body);
        let response = self.send(START_PATH, request).await?;
        Self::decode(START_PATH, response).await
    }

    async fn stop(&self) -> Result<StopResponse, ClientError> {
        let response = self
            .send(STOP_PATH, self.http_client.post(self.url(STOP_PATH)))
            .await?;
        Self::decode(STOP_PATH, response).await
    }

    async fn fetch_logs(&self) -> Result<Vec<String>, ClientError> {
        self.get_json(LOGS_PATH).await
    }

    async fn clear_logs(&self) -> Result<(), ClientError> {
        self.post_ignored(CLEAR_LOGS_PATH).await
    }

    async fn check_alert(&self, kind: AlertKind) -> Result<bool, ClientError> {
        let response: AlertResponse = self.get_json(kind.check_path()).await?;
        Ok(response.alert)
    }

    async fn acknowledge(&self, kind: AlertKind) -> Result<(), ClientError> {
        self.post_ignored(kind.acknowledge_path()).await
    }

    fn feed_url(&self) -> String {
        self.url(FEED_PATH)
    }
}
