use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::Value;

use crate::error::FetchError;

pub type JsonFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, FetchError>> + Send + 'a>>;

/// Upstream transport contract: one GET against a path under the configured
/// base URL, returning the parsed JSON body.
///
/// Network errors, timeouts, non-2xx statuses and unparseable bodies all
/// surface as [`FetchError`]; retry policy, if any, belongs to the caller.
pub trait HttpClient: Send + Sync {
    fn get_json<'a>(&'a self, path: &'a str) -> JsonFuture<'a>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl ReqwestHttpClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .user_agent("ratevault/0.1.0")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout_ms,
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get_json<'a>(&'a self, path: &'a str) -> JsonFuture<'a> {
        Box::pin(async move {
            let url = format!("{}{}", self.base_url, path);
            let response = self
                .client
                .get(&url)
                .timeout(Duration::from_millis(self.timeout_ms))
                .send()
                .await
                .map_err(|error| {
                    if error.is_timeout() {
                        FetchError::Timeout(self.timeout_ms)
                    } else {
                        FetchError::Transport(error.to_string())
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .text()
                .await
                .map_err(|error| FetchError::Transport(error.to_string()))?;

            serde_json::from_str(&body).map_err(|error| FetchError::Parse(error.to_string()))
        })
    }
}

/// Deterministic in-memory transport for offline tests: maps exact paths to
/// canned JSON bodies. Unknown paths answer with status 404.
#[derive(Debug, Default)]
pub struct StaticHttpClient {
    responses: HashMap<String, Value>,
}

impl StaticHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, path: impl Into<String>, body: Value) -> Self {
        self.responses.insert(path.into(), body);
        self
    }
}

impl HttpClient for StaticHttpClient {
    fn get_json<'a>(&'a self, path: &'a str) -> JsonFuture<'a> {
        let result = self
            .responses
            .get(path)
            .cloned()
            .ok_or(FetchError::Status(404));
        Box::pin(async move { result })
    }
}
