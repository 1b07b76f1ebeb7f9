use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::errors::ApiError;
use super::transport::{ApiRequest, HttpExec, Method, RawResponse};
use crate::session::Session;

/// Thin authenticated request wrapper over the transport.
///
/// Every call attaches the current session token as a bearer credential.
/// The single cross-cutting policy: an authentication-failure response
/// tears the session down synchronously and fails the call with
/// `Unauthorized`. Everything else propagates to the caller unchanged;
/// the gateway never retries.
#[derive(Debug, Clone)]
pub struct ApiClient<E: HttpExec> {
    exec: E,
    session: Arc<Session>,
}

impl<E: HttpExec> ApiClient<E> {
    pub fn new(exec: E, session: Arc<Session>) -> Self {
        Self { exec, session }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.request(Method::Post, path, body).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Delete, path, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
            bearer: self.session.token(),
        };
        let response = self.exec.execute(request).await?;

        if response.status == 401 {
            warn!(
                event = "console.api.unauthorized",
                method = method.as_str(),
                path = path,
            );
            self.session.teardown();
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&response.status) {
            return Err(ApiError::Unavailable {
                status: response.status,
            });
        }

        parse_body(&response)
    }

    /// Execute without the bearer credential or the teardown policy.
    /// Only the login exchange goes through here.
    pub(crate) async fn execute_unauthenticated(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<RawResponse, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
            bearer: None,
        };
        self.exec.execute(request).await
    }
}

fn parse_body(response: &RawResponse) -> Result<Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionPhase;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    /// Scripted transport: path -> (status, body). Unknown paths 404.
    struct ScriptedExec {
        responses: HashMap<String, (u16, String)>,
        seen_bearer: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedExec {
        fn new(responses: &[(&str, u16, &str)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(p, s, b)| (p.to_string(), (*s, b.to_string())))
                    .collect(),
                seen_bearer: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpExec for ScriptedExec {
        fn execute(
            &self,
            request: ApiRequest,
        ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send {
            let response = self
                .responses
                .get(&request.path)
                .cloned()
                .unwrap_or((404, "{}".to_string()));
            self.seen_bearer.lock().unwrap().push(request.bearer);
            async move {
                Ok(RawResponse {
                    status: response.0,
                    body: response.1,
                })
            }
        }
    }

    fn client(responses: &[(&str, u16, &str)]) -> ApiClient<ScriptedExec> {
        let session = Arc::new(Session::ephemeral(Some("tok".to_string())));
        ApiClient::new(ScriptedExec::new(responses), session)
    }

    #[tokio::test]
    async fn test_get_parses_success_payload() {
        let client = client(&[("/api/status", 200, r#"{"paused":false}"#)]);
        let value = client.get("/api/status").await.unwrap();
        assert_eq!(value["paused"], false);
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let client = client(&[("/api/status", 200, "{}")]);
        client.get("/api/status").await.unwrap();
        let seen = client.exec.seen_bearer.lock().unwrap();
        assert_eq!(seen[0].as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_unauthorized_tears_down_session() {
        let client = client(&[("/api/stats", 401, "{}")]);
        let result = client.get("/api/stats").await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert_eq!(client.session().phase(), SessionPhase::Login);
        assert_eq!(client.session().token(), None);
    }

    #[tokio::test]
    async fn test_server_error_propagates_without_teardown() {
        let client = client(&[("/api/stats", 503, "oops")]);
        let result = client.get("/api/stats").await;
        assert!(matches!(
            result,
            Err(ApiError::Unavailable { status: 503 })
        ));
        assert_eq!(client.session().phase(), SessionPhase::Dashboard);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = client(&[("/api/stats", 200, "not json")]);
        let result = client.get("/api/stats").await;
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
