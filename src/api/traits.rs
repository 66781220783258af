//! The vehicle API seam and its error type.

use thiserror::Error;

use crate::api::types::{ChargingStatus, VehicleStatus};
use crate::config::VehicleIdentity;

/// Errors from the vehicle API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected, session expired, or no session at all.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Request-level failure: connect, TLS, timeout, read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status outside the auth cases.
    #[error("unexpected status {status} from {endpoint}")]
    Status {
        /// Endpoint path that returned the status.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote vehicle-telemetry service.
///
/// Implementations hold whatever session state they need internally;
/// callers drive the protocol: `login` first, then the status calls.
#[async_trait::async_trait]
pub trait VehicleApi: Send + Sync + 'static {
    /// Authenticate and open a session for the identity's account.
    async fn login(&self, identity: &VehicleIdentity) -> Result<(), ApiError>;

    /// Fetch the remote vehicle status snapshot.
    async fn vehicle_status(&self, vin: &str) -> Result<VehicleStatus, ApiError>;

    /// Fetch the charging/battery snapshot.
    async fn charging(&self, vin: &str) -> Result<ChargingStatus, ApiError>;
}
