use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use super::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request as the gateway hands it to the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// Raw transport result, before the gateway's policy is applied.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Transport seam for the gateway. The production implementation speaks
/// HTTP via reqwest; tests substitute a scripted executor.
pub trait HttpExec: Send + Sync + 'static {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send;
}

/// HTTP transport backed by a shared reqwest client.
///
/// Timeout semantics live here: the orchestrator imposes no deadline of
/// its own.
#[derive(Debug, Clone)]
pub struct ReqwestExec {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestExec {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HttpExec for ReqwestExec {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send {
        let url = format!("{}{}", self.base_url, request.path);
        let http = self.http.clone();
        async move {
            let mut builder = match request.method {
                Method::Get => http.get(&url),
                Method::Post => http.post(&url),
                Method::Put => http.put(&url),
                Method::Delete => http.delete(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;
            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let exec = ReqwestExec::new("http://127.0.0.1:8420/", Duration::from_secs(8)).unwrap();
        assert_eq!(exec.base_url(), "http://127.0.0.1:8420");
    }
}
