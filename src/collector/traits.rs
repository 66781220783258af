//! Core scrape-cycle trait and error taxonomy.

use thiserror::Error;

use crate::api::ApiError;
use crate::sink::VehicleRecord;

/// Errors that can occur during a scrape cycle.
///
/// Every variant is survivable: the scheduler logs it and waits for the
/// next day. The variants only say where in the cycle things broke.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Login failed: bad credentials or transport failure during login.
    #[error("login failed: {0}")]
    Auth(#[source] ApiError),

    /// A post-login API call failed.
    #[error("vehicle API call failed: {0}")]
    Api(#[source] ApiError),

    /// Anything else in the cycle, such as sink delivery failure.
    #[error("unexpected scrape failure: {0}")]
    Unexpected(String),
}

/// One scrape cycle.
///
/// Implementations run the whole cycle internally and report the outcome
/// as a value; no failure crosses this boundary except through the `Err`
/// variant.
#[async_trait::async_trait]
pub trait Collector: Send + Sync + 'static {
    /// Run one scrape cycle and return the delivered record.
    async fn collect(&self) -> Result<VehicleRecord, CollectorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_stage() {
        let auth = CollectorError::Auth(ApiError::Auth("bad credentials".to_string()));
        assert!(auth.to_string().starts_with("login failed"));

        let api = CollectorError::Api(ApiError::Status {
            endpoint: "/v1/charging/VIN".to_string(),
            status: 502,
        });
        assert!(api.to_string().starts_with("vehicle API call failed"));
        assert!(api.to_string().contains("502"));

        let other = CollectorError::Unexpected("sink unavailable".to_string());
        assert!(other.to_string().contains("sink unavailable"));
    }

    #[test]
    fn test_error_source_is_preserved() {
        use std::error::Error as _;

        let err = CollectorError::Auth(ApiError::Auth("rejected".to_string()));
        assert!(err.source().is_some());
    }
}
