use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;
use tracing::trace;

/// Coalesces bursts of input events into a single action after a quiet
/// period. Every call registers a new event; only the call that is still the
/// newest when its quiet period elapses reports `true`.
///
/// This is a request-volume optimization only. Ordering correctness for the
/// fetches that follow is the job of `RequestSequencer`.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            generation: AtomicU64::new(0),
        }
    }

    /// Register an input event and wait out the quiet period.
    ///
    /// Returns `true` iff no newer event arrived while waiting; callers skip
    /// their fetch on `false`.
    pub async fn settle(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(generation, "debounce event registered");

        sleep(self.quiet_period).await;

        self.generation.load(Ordering::SeqCst) == generation
    }
}
