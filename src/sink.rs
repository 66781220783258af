//! Record delivery.
//!
//! Scraped snapshots are handed to a [`Sink`]. The only production sink
//! is [`LogSink`], which emits the record as a structured log line; a
//! timeseries backend would implement the same trait.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur delivering a record.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink rejected or failed to persist the record.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// One scraped vehicle snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    /// When the vehicle reported this state (from the API, not scrape time).
    pub captured_at: DateTime<Utc>,
    /// Odometer reading in kilometres.
    pub odometer_km: u64,
    /// Battery state of charge, 0-100.
    pub state_of_charge_percent: u8,
    /// Remaining electric range in kilometres.
    pub range_km: f64,
}

/// Destination for scraped records.
#[async_trait::async_trait]
pub trait Sink: Send + Sync + 'static {
    /// Deliver one record.
    async fn deliver(&self, record: &VehicleRecord) -> Result<(), SinkError>;
}

/// Sinks share freely behind `Arc`.
#[async_trait::async_trait]
impl<T: Sink> Sink for std::sync::Arc<T> {
    async fn deliver(&self, record: &VehicleRecord) -> Result<(), SinkError> {
        (**self).deliver(record).await
    }
}

/// Sink that logs each record at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait::async_trait]
impl Sink for LogSink {
    async fn deliver(&self, record: &VehicleRecord) -> Result<(), SinkError> {
        tracing::info!(
            captured_at = %record.captured_at,
            odometer_km = record.odometer_km,
            state_of_charge_percent = record.state_of_charge_percent,
            range_km = record.range_km,
            "Vehicle data"
        );
        Ok(())
    }
}
