use serde::{Deserialize, Serialize};

/// Which top-level surface is active. The presence of a session token
/// gates the transition; every component that owns a background task
/// watches this and stops on `Login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Login,
    Dashboard,
}

/// Credentials sent to the login exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login exchange result: `{ok, token}` or `{ok:false, detail}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
