//! The daily scrape loop.
//!
//! Scrapes immediately on startup, then wakes at a fixed local time
//! every day. Cycle failures are logged and the loop continues; only
//! cancellation stops it.

use std::time::Instant;

use chrono::Local;
use tokio_util::sync::CancellationToken;

use crate::collector::Collector;
use crate::schedule::ScheduleTarget;

/// Drives [`Collector`] cycles on a fixed daily schedule.
pub struct Scheduler<C> {
    target: ScheduleTarget,
    collector: C,
    shutdown: CancellationToken,
}

impl<C: Collector> Scheduler<C> {
    /// Create a scheduler firing daily at `target`.
    pub fn new(target: ScheduleTarget, collector: C, shutdown: CancellationToken) -> Self {
        Self {
            target,
            collector,
            shutdown,
        }
    }

    /// Run the loop until the shutdown token is cancelled.
    ///
    /// The first cycle runs immediately, then the loop wakes at the
    /// target time each day. A failed cycle waits for the next day
    /// exactly like a successful one. Cancellation interrupts both the
    /// daily sleep and an in-flight cycle.
    pub async fn run(self) {
        tracing::info!(schedule = %self.target, "Scheduler started");

        loop {
            tokio::select! {
                _ = self.run_cycle() => {}
                _ = self.shutdown.cancelled() => break,
            }

            let now = Local::now().naive_local();
            let wake = self.target.next_wake(now);
            let wait = (wake - now).to_std().unwrap_or_default();
            tracing::debug!(
                wake_at = %wake,
                wait_secs = wait.as_secs_f64(),
                "Sleeping until next scrape"
            );

            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = self.shutdown.cancelled() => break,
            }
        }

        tracing::info!("Scheduler stopped");
    }

    /// One scrape cycle; failures are logged here and never escape.
    async fn run_cycle(&self) {
        let start = Instant::now();
        tracing::debug!("Running scrape cycle");

        match self.collector.collect().await {
            Ok(_) => {
                let duration_ms = start.elapsed().as_millis();
                tracing::debug!(duration_ms, "Scrape cycle completed");
            }
            Err(e) => {
                tracing::error!(error = %e, "Error scraping");
            }
        }
    }
}
