//! Login session for the SleepIQ API.
//!
//! A `Session` owns the account credentials, the transport, and the session
//! token issued by `/rest/login`. Every request sent through the session
//! carries the current token as the `_k` query parameter.

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use sq_core::config::AccountConfig;
use sq_core::constants::{paths, AUTH_QUERY_PARAM};
use sq_core::error::{SqError, SqResult};

use crate::response::LoginResponse;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Account login identifier and password. Fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// The login identifier (account email).
    pub fn login(&self) -> &str {
        &self.login
    }

    fn login_body(&self) -> serde_json::Value {
        serde_json::json!({
            "login": self.login,
            "password": self.password,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<&AccountConfig> for Credentials {
    fn from(account: &AccountConfig) -> Self {
        Self::new(account.login.clone(), account.password.clone())
    }
}

/// Authenticated session over a `Transport`.
pub struct Session<T> {
    transport: T,
    credentials: Credentials,
    /// Token from the last successful login; `None` before login and during re-login.
    token: RwLock<Option<String>>,
}

impl<T: Transport> Session<T> {
    /// Create a session with no token. Nothing is sent until the first request.
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            token: RwLock::new(None),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether a token from a successful login is currently held.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// The current session token, if any.
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Log in with the stored credentials.
    ///
    /// Any held token is discarded before the attempt. Returns `Ok(false)` when
    /// the server rejects the credentials with 401; any other non-success
    /// status is an error.
    pub async fn login(&self) -> SqResult<bool> {
        self.token.write().await.take();

        let request = ApiRequest::put(paths::LOGIN, self.credentials.login_body());
        debug!("logging in as {}", self.credentials.login);
        let response = self.transport.send(&request).await?;

        if response.is_unauthorized() {
            warn!("login rejected for {}", self.credentials.login);
            return Ok(false);
        }
        if !response.is_success() {
            return Err(SqError::ServerError {
                status: response.status.as_u16(),
                message: response.body,
            });
        }

        let login: LoginResponse = response.json()?;
        *self.token.write().await = Some(login.key);
        info!("logged in as {}", self.credentials.login);
        Ok(true)
    }

    /// Send a request with the current token attached.
    pub async fn send(&self, request: &ApiRequest) -> SqResult<ApiResponse> {
        let request = self.authorize(request).await;
        self.transport.send(&request).await
    }

    async fn authorize(&self, request: &ApiRequest) -> ApiRequest {
        let mut request = request.clone();
        request.query.retain(|(k, _)| k != AUTH_QUERY_PARAM);
        if let Some(ref token) = *self.token.read().await {
            request
                .query
                .insert(0, (AUTH_QUERY_PARAM.to_string(), token.clone()));
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("me@example.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("me@example.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_login_body_shape() {
        let creds = Credentials::new("me@example.com", "hunter2");
        assert_eq!(
            creds.login_body(),
            serde_json::json!({"login": "me@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_credentials_from_account_config() {
        let account = AccountConfig {
            login: "a@b.c".into(),
            password: "pw".into(),
        };
        let creds = Credentials::from(&account);
        assert_eq!(creds.login(), "a@b.c");
        assert_eq!(creds, Credentials::new("a@b.c", "pw"));
    }
}
