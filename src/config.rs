// ABOUTME: Configuration loading for blinkwatch.
// ABOUTME: Reads ~/.blinkwatch/config.toml and applies CLI overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::notifier::tone::MAX_TONE_DURATION_MS;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub poll: PollConfig,
    pub tone: ToneConfig,
    pub camera: CameraConfig,
}

/// Remote monitoring service settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

/// Poll loop settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub interval_seconds: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 10,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

/// Audible cue played alongside an alert prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub enabled: bool,
    pub frequency_hz: u32,
    pub duration_ms: u64,
    /// Command used to play the generated WAV file. The file path is appended
    /// as the last argument. When unset, common players are probed.
    pub player: Option<String>,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency_hz: 800,
            duration_ms: 300,
            player: None,
        }
    }
}

/// Camera selector settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub default: String,
    pub available: Vec<String>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default: "0".to_string(),
            available: vec!["0".to_string()],
        }
    }
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub camera: Option<String>,
    pub interval_seconds: Option<u64>,
    pub no_tone: bool,
}

impl Config {
    /// Load config from ~/.blinkwatch/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply CLI overrides and validate the result.
    pub fn with_overrides(mut self, overrides: Overrides) -> anyhow::Result<Self> {
        if let Some(server) = overrides.server {
            self.server.base_url = server;
        }
        if let Some(camera) = overrides.camera {
            if !self.camera.available.contains(&camera) {
                self.camera.available.push(camera.clone());
            }
            self.camera.default = camera;
        }
        if let Some(secs) = overrides.interval_seconds {
            self.poll.interval_seconds = secs;
        }
        if overrides.no_tone {
            self.tone.enabled = false;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&mut self) -> anyhow::Result<()> {
        if self.poll.interval_seconds == 0 {
            anyhow::bail!("poll interval must be at least one second");
        }
        if self.tone.duration_ms > MAX_TONE_DURATION_MS {
            anyhow::bail!(
                "tone duration_ms must be at most {} (got {})",
                MAX_TONE_DURATION_MS,
                self.tone.duration_ms
            );
        }
        let trimmed = self.server.base_url.trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            anyhow::bail!("server base_url must not be empty");
        }
        self.server.base_url = trimmed;
        if self.camera.available.is_empty() {
            self.camera.available.push(self.camera.default.clone());
        }
        Ok(())
    }

    /// Directory holding the config file and default log file.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".blinkwatch")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Path to the default tracing log file.
    pub fn log_path() -> PathBuf {
        Self::config_dir().join("blinkwatch.log")
    }
}
