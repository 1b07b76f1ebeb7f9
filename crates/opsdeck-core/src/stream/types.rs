use serde::{Deserialize, Serialize};

/// One structured record from the live event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub cat: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

/// A transient operator notification raised by a user-facing error
/// record. Display duration and stacking are the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}
