//! reqwest-backed Skoda Connect client.

use std::time::Duration;

use reqwest::StatusCode;
use tokio::sync::RwLock;

use crate::api::traits::{ApiError, VehicleApi};
use crate::api::types::{ChargingStatus, LoginResponse, VehicleStatus};
use crate::config::VehicleIdentity;

/// Production Skoda Connect endpoint.
pub const DEFAULT_BASE_URL: &str = "https://mysmob.api.connect.skoda-auto.cz/api";

/// Default request timeout (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Skoda Connect HTTP client.
///
/// Holds the bearer token of the current session. [`VehicleApi::login`]
/// replaces the token wholesale, so each scrape cycle authenticates
/// afresh and never reuses a stale session.
pub struct ConnectClient {
    base_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
    debug: bool,
}

impl ConnectClient {
    /// Create a client against `base_url` with the default timeout.
    ///
    /// `debug` enables request-level logging on top of the response
    /// bodies that are always logged at debug level.
    ///
    /// # Errors
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, debug: bool) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, debug, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        debug: bool,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            http,
            token: RwLock::new(None),
            debug,
        })
    }

    /// Bearer token of the current session.
    async fn session_token(&self) -> Result<String, ApiError> {
        self.token
            .read()
            .await
            .clone()
            .ok_or_else(|| ApiError::Auth("no active session, login first".to_string()))
    }

    /// Authenticated GET returning a decoded JSON body.
    async fn get_json<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let token = self.session_token().await?;
        let url = format!("{}{}", self.base_url, endpoint);

        if self.debug {
            tracing::debug!(url = %url, "Sending API request");
        }

        let response = self.http.get(&url).bearer_auth(&token).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Auth(format!(
                "session rejected with status {status}"
            )));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(endpoint = %endpoint, body = %body, "API response");

        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for ConnectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectClient")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl VehicleApi for ConnectClient {
    async fn login(&self, identity: &VehicleIdentity) -> Result<(), ApiError> {
        let url = format!("{}/v1/login", self.base_url);

        if self.debug {
            tracing::debug!(url = %url, username = %identity.username, "Sending login request");
        }

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "username": identity.username,
                "password": identity.password(),
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ApiError::Auth(format!(
                "login rejected with status {status}: {detail}"
            )));
        }

        // The login body carries the session token, so it is the one
        // response never logged.
        let body = response.text().await?;
        let login: LoginResponse = serde_json::from_str(&body)?;
        *self.token.write().await = Some(login.access_token);

        tracing::debug!("Login succeeded");
        Ok(())
    }

    async fn vehicle_status(&self, vin: &str) -> Result<VehicleStatus, ApiError> {
        self.get_json(&format!("/v2/vehicle-status/{vin}")).await
    }

    async fn charging(&self, vin: &str) -> Result<ChargingStatus, ApiError> {
        self.get_json(&format!("/v1/charging/{vin}")).await
    }
}
