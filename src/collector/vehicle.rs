//! Skoda Connect scrape cycle.

use crate::api::VehicleApi;
use crate::collector::{Collector, CollectorError};
use crate::config::VehicleIdentity;
use crate::sink::{Sink, VehicleRecord};

/// Metres per kilometre, for range conversion.
const METERS_PER_KM: f64 = 1000.0;

/// Scrapes one vehicle through a [`VehicleApi`] and hands the snapshot
/// to a [`Sink`].
///
/// Owns the account identity; every cycle authenticates afresh.
pub struct VehicleCollector<A, S> {
    api: A,
    identity: VehicleIdentity,
    sink: S,
}

impl<A, S> VehicleCollector<A, S> {
    /// Create a collector for one vehicle.
    pub fn new(api: A, identity: VehicleIdentity, sink: S) -> Self {
        Self {
            api,
            identity,
            sink,
        }
    }
}

impl<A, S> std::fmt::Debug for VehicleCollector<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VehicleCollector")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl<A: VehicleApi, S: Sink> Collector for VehicleCollector<A, S> {
    async fn collect(&self) -> Result<VehicleRecord, CollectorError> {
        tracing::debug!(
            username = %self.identity.username,
            password = %self.identity.password_display(),
            "Logging in"
        );
        self.api
            .login(&self.identity)
            .await
            .map_err(CollectorError::Auth)?;

        tracing::debug!(vin = %self.identity.vin, "Getting vehicle status");
        let status = self
            .api
            .vehicle_status(&self.identity.vin)
            .await
            .map_err(CollectorError::Api)?;

        tracing::debug!(vin = %self.identity.vin, "Getting charging status");
        let charging = self
            .api
            .charging(&self.identity.vin)
            .await
            .map_err(CollectorError::Api)?;

        let record = VehicleRecord {
            captured_at: status.vehicle_remote.captured_at,
            odometer_km: status.vehicle_remote.mileage_in_km,
            state_of_charge_percent: charging.battery.state_of_charge_in_percent,
            range_km: charging.battery.cruising_range_electric_in_meters as f64 / METERS_PER_KM,
        };

        self.sink
            .deliver(&record)
            .await
            .map_err(|e| CollectorError::Unexpected(e.to_string()))?;

        Ok(record)
    }
}
