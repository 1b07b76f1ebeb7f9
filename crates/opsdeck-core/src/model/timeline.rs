use serde::{Deserialize, Serialize};

/// Rolling per-hour action counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySummary {
    #[serde(default)]
    pub hourly: Vec<HourlyPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: String,
    #[serde(default)]
    pub reddit: u64,
    #[serde(default)]
    pub telegram: u64,
}

impl HistorySummary {
    /// The most recent `n` points, oldest-first. The timeline chart only
    /// plots the trailing window.
    pub fn recent(&self, n: usize) -> &[HourlyPoint] {
        let start = self.hourly.len().saturating_sub(n);
        &self.hourly[start..]
    }
}

impl HourlyPoint {
    /// Short label: the time component when the hour is an ISO timestamp,
    /// otherwise the raw value.
    pub fn label(&self) -> &str {
        match self.hour.split_once('T') {
            Some((_, time)) => time,
            None => &self.hour,
        }
    }
}
