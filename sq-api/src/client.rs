//! Resource client for the SleepIQ REST API.
//!
//! Every authenticated call goes through [`SleepIqClient::execute`], which
//! owns the re-authentication policy: a 401 triggers exactly one login and
//! one resend of the same request, and whatever comes back is final.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use sq_core::config::ApiConfig;
use sq_core::error::{SqError, SqResult};

use crate::session::{Credentials, Session};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Client for the SleepIQ cloud API.
///
/// Calls are issued one at a time and each awaits its round trips in order.
/// Endpoint methods live in [`crate::endpoints`].
pub struct SleepIqClient<T = HttpTransport> {
    session: Session<T>,
}

impl SleepIqClient<HttpTransport> {
    /// Create a client talking HTTP to the configured API host.
    pub fn new(config: &ApiConfig, credentials: Credentials) -> SqResult<Self> {
        let transport = HttpTransport::new(config)?;
        debug!("SleepIQ client for {}", transport.base_url());
        Ok(Self::with_transport(transport, credentials))
    }
}

impl<T: Transport> SleepIqClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T, credentials: Credentials) -> Self {
        Self {
            session: Session::new(transport, credentials),
        }
    }

    /// The login session backing this client.
    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Log in explicitly. Returns `Ok(false)` if the credentials are rejected.
    pub async fn login(&self) -> SqResult<bool> {
        self.session.login().await
    }

    /// Send an authenticated request, re-authenticating once on 401.
    ///
    /// Returns the successful response, or an error for any status that is
    /// still non-success after the optional retry.
    pub async fn execute(&self, request: &ApiRequest) -> SqResult<ApiResponse> {
        let mut response = self.session.send(request).await?;

        if response.is_unauthorized() {
            warn!(
                "{} {} unauthorized, logging in and retrying once",
                request.method, request.path
            );
            if !self.session.login().await? {
                warn!("re-login rejected, retrying without a token");
            }
            response = self.session.send(request).await?;
        }

        Self::check_status(request, response)
    }

    /// Convenience: authenticated GET + parse the JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> SqResult<R> {
        let response = self.execute(&ApiRequest::get(path)).await?;
        response.json()
    }

    /// Convert a final non-success response into an error.
    fn check_status(request: &ApiRequest, response: ApiResponse) -> SqResult<ApiResponse> {
        if response.is_success() {
            return Ok(response);
        }

        if response.status == StatusCode::UNAUTHORIZED {
            return Err(SqError::AuthFailed(format!(
                "{} {} still unauthorized after re-login",
                request.method, request.path
            )));
        }

        Err(SqError::ServerError {
            status: response.status.as_u16(),
            message: response.body,
        })
    }
}
