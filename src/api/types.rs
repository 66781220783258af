//! Wire types for the Skoda Connect API.
//!
//! Envelope keys are snake_case while leaf keys are camelCase, matching
//! what the service actually returns.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response to a login request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    /// Bearer token for the session.
    pub access_token: String,
}

/// Remote vehicle status response.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleStatus {
    /// The remote status snapshot.
    pub vehicle_remote: VehicleRemote,
}

/// Remote status snapshot of the vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRemote {
    /// When the vehicle reported this snapshot.
    pub captured_at: DateTime<Utc>,
    /// Odometer reading in kilometres.
    pub mileage_in_km: u64,
}

/// Charging status response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargingStatus {
    /// The battery snapshot.
    pub battery: Battery,
}

/// Battery charge and range snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    /// State of charge, 0-100.
    pub state_of_charge_in_percent: u8,
    /// Remaining electric range in metres.
    pub cruising_range_electric_in_meters: u64,
}
