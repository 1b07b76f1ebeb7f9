//! Default values for configuration fields.

pub fn default_base_url() -> String {
    "http://127.0.0.1:8420".to_string()
}

pub fn default_refresh_interval_secs() -> u64 {
    5
}

pub fn default_request_timeout_secs() -> u64 {
    8
}

pub fn default_reconnect_delay_ms() -> u64 {
    3000
}

pub fn default_max_attempts() -> u32 {
    5
}

pub fn default_base_lock_secs() -> u64 {
    30
}

pub fn default_max_lock_secs() -> u64 {
    480
}
