use crate::api::errors::ApiError;
use crate::errors::OpsdeckError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Login rejected: {detail}")]
    LoginRejected { detail: String },

    #[error("Too many attempts. Locked for {seconds_remaining}s")]
    LockedOut { seconds_remaining: u64 },

    #[error("Username and password required")]
    MissingCredentials,

    #[error("Token store failure: {source}")]
    TokenStore {
        #[from]
        source: std::io::Error,
    },

    #[error("Login request failed: {source}")]
    Api {
        #[from]
        source: ApiError,
    },
}

impl OpsdeckError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::LoginRejected { .. } => "LOGIN_REJECTED",
            SessionError::LockedOut { .. } => "LOGIN_LOCKED_OUT",
            SessionError::MissingCredentials => "LOGIN_MISSING_CREDENTIALS",
            SessionError::TokenStore { .. } => "SESSION_TOKEN_STORE",
            SessionError::Api { .. } => "SESSION_API_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SessionError::LoginRejected { .. }
                | SessionError::LockedOut { .. }
                | SessionError::MissingCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockout_display() {
        let error = SessionError::LockedOut {
            seconds_remaining: 30,
        };
        assert_eq!(error.to_string(), "Too many attempts. Locked for 30s");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_token_store_is_system_error() {
        let error = SessionError::TokenStore {
            source: std::io::Error::other("disk gone"),
        };
        assert_eq!(error.error_code(), "SESSION_TOKEN_STORE");
        assert!(!error.is_user_error());
    }
}
