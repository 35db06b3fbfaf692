//! Recurring dashboard refresh.
//!
//! The core subsystems are timer-agnostic and purely request/response;
//! push updates are simulated by the view layer re-running its query on a
//! fixed interval. [`Poller`] is that scheduled task: it owns the timer and
//! is cancelled when the consuming view is torn down.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A cancellable recurring task.
pub struct Poller {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawns `tick` every `interval`. The first tick fires immediately.
    pub fn spawn<F>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            loop {
                timer.tick().await;
                tick();
            }
        });
        Self { name, handle }
    }

    /// Tears the task down.
    pub fn stop(self) {
        debug!(poller = self.name, "Stopping poller");
        self.handle.abort();
    }
}
