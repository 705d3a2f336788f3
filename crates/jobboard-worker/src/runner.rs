//! The single periodic loop driving all sweeps.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing;

use crate::sweep::Sweep;

/// Runs the registered sweeps in order, once at startup and then on
/// every tick, until cancelled
///
/// Only one runner may exist per deployment: two would post and delete twice.
#[derive(Debug)]
pub struct TaskRunner {
    /// Sweeps in execution order
    sweeps: Vec<Arc<dyn Sweep>>,
    /// Tick period
    interval: Duration,
}

impl TaskRunner {
    /// Create a new task runner
    pub fn new(interval: Duration) -> Self {
        Self {
            sweeps: Vec::new(),
            interval,
        }
    }

    /// Append a sweep to the pass
    pub fn with_sweep(mut self, sweep: Arc<dyn Sweep>) -> Self {
        tracing::info!("Registered sweep '{}'", sweep.name());
        self.sweeps.push(sweep);
        self
    }

    /// Names of the registered sweeps, in execution order
    pub fn sweep_names(&self) -> Vec<&str> {
        self.sweeps.iter().map(|s| s.name()).collect()
    }

    /// Run every sweep once, sequentially
    ///
    /// A failing sweep is logged and does not prevent the following ones.
    pub async fn run_pass(&self) {
        for sweep in &self.sweeps {
            let started = time::Instant::now();
            match sweep.run().await {
                Ok(affected) => tracing::debug!(
                    "Sweep '{}' finished in {:?}, affected {}",
                    sweep.name(),
                    started.elapsed(),
                    affected
                ),
                Err(e) => tracing::error!("Sweep '{}' failed: {}", sweep.name(), e),
            }
        }
    }

    /// Start the loop; runs until the cancel signal is received
    ///
    /// A pass that is already running is always finished before returning.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            "Task runner started with interval={:?}, sweeps={:?}",
            self.interval,
            self.sweep_names()
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *cancel.borrow_and_update() {
                break;
            }

            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() {
                        tracing::info!("Task runner lost its shutdown channel");
                        break;
                    }
                    // loop head re-checks the value
                }
                _ = ticker.tick() => {
                    self.run_pass().await;
                }
            }
        }

        tracing::info!("Task runner shut down complete");
    }
}
