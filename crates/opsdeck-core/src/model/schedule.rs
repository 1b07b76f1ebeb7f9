use serde::{Deserialize, Serialize};

/// One scheduled background job with its countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub name: String,
    /// Negative when the owning scheduler is paused.
    #[serde(default)]
    pub seconds_until: i64,
    #[serde(default)]
    pub interval: Option<String>,
}
