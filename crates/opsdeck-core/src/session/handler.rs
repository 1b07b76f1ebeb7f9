use tracing::{info, warn};

use super::errors::SessionError;
use super::lockout::LoginGuard;
use crate::api::client::ApiClient;
use crate::api::transport::HttpExec;

/// Authenticate against the login exchange and establish the session.
///
/// Throttled by the guard: once locked, attempts are rejected locally
/// without touching the backend until the lock expires.
pub async fn login<E: HttpExec>(
    client: &ApiClient<E>,
    guard: &mut LoginGuard,
    username: &str,
    password: &str,
) -> Result<(), SessionError> {
    if let Some(seconds_remaining) = guard.remaining_lock() {
        return Err(SessionError::LockedOut { seconds_remaining });
    }

    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(SessionError::MissingCredentials);
    }

    let response = client.login_exchange(username, password).await?;

    if response.ok && let Some(token) = response.token {
        guard.reset();
        client.session().establish(token);
        info!(event = "console.session.login_completed", username = username);
        return Ok(());
    }

    let detail = response
        .detail
        .unwrap_or_else(|| "Invalid credentials".to_string());
    warn!(
        event = "console.session.login_rejected",
        username = username,
    );
    if let Some(lock) = guard.record_failure() {
        return Err(SessionError::LockedOut {
            seconds_remaining: lock.as_secs(),
        });
    }
    Err(SessionError::LoginRejected { detail })
}

/// Explicit logout: tear the session down. The phase watchers stop the
/// streaming channel and refresh loop; no reconnection follows.
pub fn logout(session: &crate::session::Session) {
    info!(event = "console.session.logout_requested");
    session.teardown();
}
