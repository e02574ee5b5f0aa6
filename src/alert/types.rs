// ABOUTME: Alert kinds polled from the monitoring service.
// ABOUTME: Each kind carries its check/acknowledge endpoints and its prompt text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two independently polled alert conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Blink rate in the last minute fell below the healthy minimum.
    Strain,
    /// Eyes have stayed closed for longer than the fatigue window.
    Fatigue,
}

impl AlertKind {
    /// Every alert kind, in polling order.
    pub const ALL: [AlertKind; 2] = [AlertKind::Strain, AlertKind::Fatigue];

    /// Endpoint queried each poll tick.
    pub fn check_path(self) -> &'static str {
        match self {
            AlertKind::Strain => "/should_alert_strain",
            AlertKind::Fatigue => "/should_alert_fatigue",
        }
    }

    /// Endpoint notified once the user dismisses the prompt.
    pub fn acknowledge_path(self) -> &'static str {
        match self {
            AlertKind::Strain => "/acknowledge_strain",
            AlertKind::Fatigue => "/acknowledge_fatigue",
        }
    }

    /// Text shown in the blocking prompt.
    pub fn prompt_text(self) -> &'static str {
        match self {
            AlertKind::Strain => "Eye strain detected: Blink count low in the last minute.",
            AlertKind::Fatigue => "Fatigue detected: Eyes have been closed for over 15 seconds.",
        }
    }

    /// Short title used in modal borders and the status bar.
    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Strain => "Eye strain",
            AlertKind::Fatigue => "Fatigue",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Strain => write!(f, "strain"),
            AlertKind::Fatigue => write!(f, "fatigue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_distinct_per_kind() {
        assert_eq!(AlertKind::Strain.check_path(), "/should_alert_strain");
        assert_eq!(AlertKind::Fatigue.check_path(), "/should_alert_fatigue");
        assert_eq!(AlertKind::Strain.acknowledge_path(), "/acknowledge_strain");
        assert_eq!(AlertKind::Fatigue.acknowledge_path(), "/acknowledge_fatigue");
    }

    #[test]
    fn prompt_text_is_kind_specific() {
        assert!(AlertKind::Strain.prompt_text().contains("Eye strain"));
        assert!(AlertKind::Fatigue.prompt_text().contains("15 seconds"));
    }

    #[test]
    fn alert_kind_serde_roundtrip() {
        let json = serde_json::to_string(&AlertKind::Fatigue).unwrap();
        assert_eq!(json, "\"fatigue\"");
        let parsed: AlertKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AlertKind::Fatigue);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(AlertKind::Strain.to_string(), "strain");
        assert_eq!(AlertKind::Fatigue.to_string(), "fatigue");
    }
}
