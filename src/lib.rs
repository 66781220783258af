//! skodad - Daily Skoda Connect telemetry scraper.
//!
//! A long-running daemon that logs in to Skoda Connect once a day at a
//! fixed local wall-clock time, fetches the vehicle and charging status
//! of a single vehicle, and emits the snapshot as a structured log line.
//!
//! # Architecture
//!
//! - [`config`]: environment-driven credentials and flags
//! - [`schedule`]: pure next-wake computation over naive local time
//! - [`scheduler`]: the daily loop; survives every scrape failure
//! - [`collector`]: one scrape cycle (login, fetch, project, deliver)
//! - [`api`]: the Skoda Connect HTTP client behind the [`VehicleApi`] seam
//! - [`sink`]: where scraped records go

pub mod api;
pub mod collector;
pub mod config;
pub mod schedule;
pub mod scheduler;
pub mod sink;

pub use api::{ApiError, ConnectClient, VehicleApi};
pub use collector::{Collector, CollectorError, VehicleCollector};
pub use config::{Config, ConfigError, VehicleIdentity};
pub use schedule::ScheduleTarget;
pub use scheduler::Scheduler;
pub use sink::{LogSink, Sink, SinkError, VehicleRecord};
