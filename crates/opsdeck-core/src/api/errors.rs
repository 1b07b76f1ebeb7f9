use crate::errors::OpsdeckError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Authentication failure. The gateway has already torn the session
    /// down by the time this is returned; callers must not retry.
    #[error("Unauthorized")]
    Unauthorized,

    /// The endpoint failed or returned a non-success status. Recovered
    /// locally by the affected panel; never aborts a cycle.
    #[error("Endpoint unavailable (HTTP {status})")]
    Unavailable { status: u16 },

    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl OpsdeckError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "API_UNAUTHORIZED",
            ApiError::Unavailable { .. } => "API_UNAVAILABLE",
            ApiError::Transport { .. } => "API_TRANSPORT",
            ApiError::Decode { .. } => "API_DECODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let error = ApiError::Unavailable { status: 503 };
        assert_eq!(error.to_string(), "Endpoint unavailable (HTTP 503)");
        assert_eq!(error.error_code(), "API_UNAVAILABLE");
        assert!(!error.is_user_error());
    }
}
