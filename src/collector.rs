//! Scrape cycle layer.
//!
//! A [`Collector`] performs one complete scrape cycle per invocation;
//! the scheduler decides when cycles run and survives their failures.
//!
//! # Architecture
//!
//! - [`Collector`]: core trait, one cycle per call
//! - [`CollectorError`]: the failure taxonomy the scheduler logs
//! - [`VehicleCollector`]: the production cycle (login, fetch, project,
//!   deliver)

mod traits;
mod vehicle;

pub use traits::{Collector, CollectorError};
pub use vehicle::VehicleCollector;
