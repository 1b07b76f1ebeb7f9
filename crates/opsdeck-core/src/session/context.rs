use std::sync::RwLock;

use tokio::sync::watch;
use tracing::{info, warn};

use super::store::TokenStore;
use super::types::SessionPhase;

/// Explicit session context owned for the lifetime of the process.
///
/// Holds the opaque session token and the phase channel every background
/// task watches. Teardown is the single authoritative signal that stops
/// the refresh loop and the live event channel and sends the UI back to
/// the login surface.
#[derive(Debug)]
pub struct Session {
    token: RwLock<Option<String>>,
    phase: watch::Sender<SessionPhase>,
    store: Option<TokenStore>,
}

impl Session {
    /// Fresh context with no persistence. Used by tests and one-shot
    /// commands that already hold a token.
    pub fn ephemeral(token: Option<String>) -> Self {
        let phase = if token.is_some() {
            SessionPhase::Dashboard
        } else {
            SessionPhase::Login
        };
        Self {
            token: RwLock::new(token),
            phase: watch::Sender::new(phase),
            store: None,
        }
    }

    /// Context backed by the token store; restores any persisted session.
    pub fn restore(store: TokenStore) -> Self {
        let token = store.load();
        let phase = if token.is_some() {
            SessionPhase::Dashboard
        } else {
            SessionPhase::Login
        };
        Self {
            token: RwLock::new(token),
            phase: watch::Sender::new(phase),
            store: Some(store),
        }
    }

    /// The current token, if a session is established.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    /// Watch for phase transitions. Background tasks stop on `Login`.
    pub fn subscribe(&self) -> watch::Receiver<SessionPhase> {
        self.phase.subscribe()
    }

    /// Install a freshly issued token and enter the dashboard phase.
    pub fn establish(&self, token: String) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.clone());
        if let Some(store) = &self.store
            && let Err(e) = store.save(&token)
        {
            warn!(event = "console.session.token_persist_failed", error = %e);
        }
        self.phase.send_replace(SessionPhase::Dashboard);
        info!(event = "console.session.established");
    }

    /// Tear the session down: clear the token (memory and disk) and flip
    /// to the login phase. Idempotent; safe to call from the gateway's
    /// authentication-failure path while a cycle is still settling.
    pub fn teardown(&self) {
        let had_token = self
            .token
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .is_some();
        if let Some(store) = &self.store
            && let Err(e) = store.clear()
        {
            warn!(event = "console.session.token_clear_failed", error = %e);
        }
        self.phase.send_replace(SessionPhase::Login);
        if had_token {
            info!(event = "console.session.teardown_completed");
        }
    }
}
