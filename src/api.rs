//! Skoda Connect API access.
//!
//! [`VehicleApi`] is the seam between the scrape cycle and the remote
//! service; [`ConnectClient`] is the reqwest-backed production
//! implementation. One login per scrape cycle establishes the session
//! the status calls ride on.

mod client;
mod traits;
mod types;

pub use client::{ConnectClient, DEFAULT_BASE_URL};
pub use traits::{ApiError, VehicleApi};
pub use types::{Battery, ChargingStatus, VehicleRemote, VehicleStatus};
