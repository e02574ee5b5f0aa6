// ABOUTME: Error type for calls to the monitoring service.
// ABOUTME: Separates transport failures, non-success HTTP statuses, and malformed bodies.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned HTTP {status}")]
    Status { path: &'static str, status: u16 },

    #[error("malformed response from {path}: {message}")]
    Decode { path: &'static str, message: String },

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_path_and_code() {
        let err = ClientError::Status {
            path: "/get_logs",
            status: 500,
        };
        assert_eq!(err.to_string(), "/get_logs returned HTTP 500");
    }

    #[test]
    fn decode_error_includes_message() {
        let err = ClientError::Decode {
            path: "/should_alert_strain",
            message: "missing field `alert`".to_string(),
        };
        assert!(err.to_string().contains("/should_alert_strain"));
        assert!(err.to_string().contains("missing field"));
    }
}
