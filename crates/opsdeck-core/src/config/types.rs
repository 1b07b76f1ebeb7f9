//! Configuration type definitions for the opsdeck console.
//!
//! These types are serialized/deserialized from the TOML config file at
//! `~/.opsdeck/config.toml`. Every field has a sensible default so a
//! missing file means "connect to localhost with stock intervals".
//!
//! # Example Configuration
//!
//! ```toml
//! base_url = "https://control.example.net"
//!
//! [refresh]
//! interval_secs = 5
//! request_timeout_secs = 8
//!
//! [stream]
//! reconnect_delay_ms = 3000
//!
//! [login]
//! max_attempts = 5
//! base_lock_secs = 30
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from the TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the platform API (no trailing slash required).
    #[serde(default = "super::defaults::default_base_url")]
    pub base_url: String,

    /// Polling cycle configuration.
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Live event stream configuration.
    #[serde(default)]
    pub stream: StreamConfig,

    /// Login throttling configuration.
    #[serde(default)]
    pub login: LockoutConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: super::defaults::default_base_url(),
            refresh: RefreshConfig::default(),
            stream: StreamConfig::default(),
            login: LockoutConfig::default(),
        }
    }
}

/// Polling cycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between orchestration cycles.
    #[serde(default = "super::defaults::default_refresh_interval_secs")]
    pub interval_secs: u64,

    /// Per-request timeout applied by the HTTP transport.
    /// The orchestrator itself imposes no deadline.
    #[serde(default = "super::defaults::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: super::defaults::default_refresh_interval_secs(),
            request_timeout_secs: super::defaults::default_request_timeout_secs(),
        }
    }
}

/// Live event stream configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Delay before a single scheduled reconnection attempt.
    #[serde(default = "super::defaults::default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            reconnect_delay_ms: super::defaults::default_reconnect_delay_ms(),
        }
    }
}

/// Login throttling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockoutConfig {
    /// Consecutive failures before the first lock engages.
    #[serde(default = "super::defaults::default_max_attempts")]
    pub max_attempts: u32,

    /// Duration of the first lock. Each subsequent lock doubles this,
    /// capped by `max_lock_secs`.
    #[serde(default = "super::defaults::default_base_lock_secs")]
    pub base_lock_secs: u64,

    /// Upper bound for the escalating lock duration.
    #[serde(default = "super::defaults::default_max_lock_secs")]
    pub max_lock_secs: u64,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            max_attempts: super::defaults::default_max_attempts(),
            base_lock_secs: super::defaults::default_base_lock_secs(),
            max_lock_secs: super::defaults::default_max_lock_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config_serialization() {
        let config = ConsoleConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: ConsoleConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.base_url, parsed.base_url);
        assert_eq!(config.refresh.interval_secs, parsed.refresh.interval_secs);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"base_url = "https://ops.example.net""#;
        let config: ConsoleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "https://ops.example.net");
        assert_eq!(config.refresh.interval_secs, 5);
        assert_eq!(config.stream.reconnect_delay_ms, 3000);
        assert_eq!(config.login.max_attempts, 5);
    }

    #[test]
    fn test_nested_override() {
        let toml_str = r#"
[refresh]
interval_secs = 30
"#;
        let config: ConsoleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.refresh.interval_secs, 30);
        assert_eq!(config.refresh.request_timeout_secs, 8);
    }
}
