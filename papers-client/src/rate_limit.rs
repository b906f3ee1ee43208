use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, instrument};

/// Request pacer for NCBI E-utilities
///
/// NCBI allows 3 requests per second without an API key and 10 with one.
/// The pacer spaces requests at least `1 / rate` seconds apart. Clones share
/// the same schedule, so concurrent detail fetches are paced together.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    interval: Option<Duration>,
    next_slot: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a pacer allowing `rate` requests per second.
    /// A non-positive or non-finite rate disables pacing.
    pub fn new(rate: f64) -> Self {
        let interval =
            (rate.is_finite() && rate > 0.0).then(|| Duration::from_secs_f64(1.0 / rate));
        Self {
            interval,
            next_slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Pacer that never waits
    pub fn unlimited() -> Self {
        Self::new(0.0)
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Wait until the next request slot is free and claim it
    #[instrument(skip(self))]
    pub async fn acquire(&self) {
        let Some(interval) = self.interval else {
            return;
        };

        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + interval);
            slot
        };

        if slot > Instant::now() {
            debug!(
                wait_ms = slot.saturating_duration_since(Instant::now()).as_millis() as u64,
                "Waiting for request slot"
            );
            sleep_until(slot).await;
        }
    }
}
