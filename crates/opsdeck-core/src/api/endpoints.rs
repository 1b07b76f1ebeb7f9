use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::ApiClient;
use super::errors::ApiError;
use super::transport::{HttpExec, Method};
use crate::model::StatusSummary;
use crate::registry::STATUS_PATH;
use crate::session::types::LoginResponse;

/// Operator control actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Pause,
    Resume,
    EmergencyStop,
    EmergencyReset,
}

impl ControlAction {
    pub fn path(&self) -> &'static str {
        match self {
            ControlAction::Pause => "/api/control/pause",
            ControlAction::Resume => "/api/control/resume",
            ControlAction::EmergencyStop => "/api/control/emergency-stop",
            ControlAction::EmergencyReset => "/api/control/emergency-reset",
        }
    }

    pub fn parse(name: &str) -> Option<ControlAction> {
        match name {
            "pause" => Some(ControlAction::Pause),
            "resume" => Some(ControlAction::Resume),
            "emergency-stop" => Some(ControlAction::EmergencyStop),
            "emergency-reset" => Some(ControlAction::EmergencyReset),
            _ => None,
        }
    }
}

/// Backend acknowledgment for a control action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlOutcome {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl<E: HttpExec> ApiClient<E> {
    /// Lightweight status summary; fetched at the start of every cycle.
    pub async fn status(&self) -> Result<StatusSummary, ApiError> {
        let value = self.get(STATUS_PATH).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }

    /// Issue a control action and return the backend's acknowledgment.
    pub async fn control(&self, action: ControlAction) -> Result<ControlOutcome, ApiError> {
        let value = self.post(action.path(), None).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }

    /// The login exchange. Carries no bearer credential and bypasses the
    /// teardown policy: a rejection here is inline feedback, not a lost
    /// session. The response body is parsed regardless of HTTP status
    /// because rejections carry their detail in the body.
    pub async fn login_exchange(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = json!({ "username": username, "password": password });
        let response = self
            .execute_unauthenticated(Method::Post, "/api/auth/login", Some(body))
            .await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_action_paths() {
        assert_eq!(ControlAction::Pause.path(), "/api/control/pause");
        assert_eq!(
            ControlAction::EmergencyStop.path(),
            "/api/control/emergency-stop"
        );
    }

    #[test]
    fn test_control_action_parse() {
        assert_eq!(ControlAction::parse("resume"), Some(ControlAction::Resume));
        assert_eq!(ControlAction::parse("panic"), None);
    }

    #[test]
    fn test_control_outcome_defaults_to_failure() {
        // An empty acknowledgment is not a success.
        let outcome: ControlOutcome = serde_json::from_str("{}").unwrap();
        assert!(!outcome.ok);
    }
}
