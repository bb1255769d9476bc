//! HTTP transport for the SleepIQ REST API.
//!
//! `Transport` is the seam between the session/retry logic and the wire.
//! Non-success statuses come back as ordinary responses so callers can
//! decide whether to re-authenticate; only failures to obtain a response at
//! all are errors.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use sq_core::config::ApiConfig;
use sq_core::error::{SqError, SqResult};

/// A single request against the API, relative to the configured host.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/rest/bed`.
    pub path: String,
    /// Query parameters in send order.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A GET request with no body.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A PUT request carrying a JSON body.
    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Value of the first query parameter named `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the server rejected the session token or credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> SqResult<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| SqError::Serialization(format!("failed to parse response: {e}")))
    }
}

/// Sends requests to the API host.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange. Returns `Err` only when no response was obtained.
    async fn send(&self, request: &ApiRequest) -> SqResult<ApiResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &ApiRequest) -> SqResult<ApiResponse> {
        (**self).send(request).await
    }
}

/// `Transport` backed by a pooled `reqwest::Client` with a cookie store.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Client,
    /// Scheme + host (+ port), no trailing slash.
    base_url: String,
}

impl HttpTransport {
    /// Create a transport from API configuration.
    pub fn new(config: &ApiConfig) -> SqResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .cookie_store(true)
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| SqError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.effective_base_url(),
        })
    }

    /// Get the API host this transport talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify a reqwest error into a SqError variant.
    fn classify_error(e: reqwest::Error) -> SqError {
        if e.is_timeout() {
            SqError::Timeout(e.to_string())
        } else if e.is_connect() {
            SqError::Http(format!("connection failed: {e}"))
        } else {
            SqError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> SqResult<ApiResponse> {
        debug!("{} {}", request.method, request.path);

        let mut builder = self
            .inner
            .request(request.method.clone(), self.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SqError::Http(format!("failed to read response body: {e}")))?;

        debug!("{} {} -> {}", request.method, request.path, status.as_u16());
        Ok(ApiResponse { status, body })
    }
}
