use serde::{Deserialize, Serialize};

/// Lightweight status summary fetched at the start of every cycle.
///
/// Drives the always-visible status indicator, so it is applied before
/// any view-specific payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub emergency_stopped: bool,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub uptime_seconds: u64,
    #[serde(default)]
    pub version: Option<String>,
}

/// Tri-state indicator derived from the status summary.
///
/// Emergency stop wins over pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    Online,
    Paused,
    Stopped,
}

impl StatusSummary {
    pub fn indicator(&self) -> StatusIndicator {
        if self.emergency_stopped {
            StatusIndicator::Stopped
        } else if self.paused {
            StatusIndicator::Paused
        } else {
            StatusIndicator::Online
        }
    }

    pub fn mode_display(&self) -> &str {
        self.mode.as_deref().unwrap_or("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_precedence() {
        let status: StatusSummary =
            serde_json::from_str(r#"{"paused":true,"emergency_stopped":true}"#).unwrap();
        assert_eq!(status.indicator(), StatusIndicator::Stopped);
    }

    #[test]
    fn test_empty_payload_is_online() {
        let status: StatusSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(status.indicator(), StatusIndicator::Online);
        assert_eq!(status.mode_display(), "auto");
        assert_eq!(status.uptime_seconds, 0);
    }
}
