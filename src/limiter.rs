//! Local request limiter.
//!
//! A token bucket holding a single token: the first acquisition passes
//! immediately and every later one is spaced at least `1 / rate` seconds
//! after the previous slot. Time is read from `tokio::time`, so a paused test
//! clock drives it the same way it drives the rest of the fetch loop.

use crate::error::{Result, StargazerError};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

#[derive(Debug)]
pub struct RequestLimiter {
    interval: Duration,
    next_slot: Option<Instant>,
}

impl RequestLimiter {
    /// Limiter allowing `requests_per_second` acquisitions per second.
    ///
    /// A rate of zero is treated as one request per second.
    pub fn per_second(requests_per_second: u32) -> Self {
        let rps = requests_per_second.max(1);
        Self::with_interval(Duration::from_secs(1) / rps)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the next free slot.
    ///
    /// Fails with [`StargazerError::Timeout`] without waiting when the slot
    /// would only open after `deadline`.
    pub async fn acquire(&mut self, deadline: Instant) -> Result<()> {
        let now = Instant::now();
        let slot = match self.next_slot {
            Some(next) if next > now => next,
            _ => now,
        };

        if slot > deadline {
            return Err(StargazerError::Timeout(format!(
                "next request slot opens {:?} after the deadline",
                slot - deadline
            )));
        }

        if slot > now {
            debug!(wait_ms = (slot - now).as_millis() as u64, "Waiting for request slot");
            sleep_until(slot).await;
        }

        self.next_slot = Some(slot + self.interval);
        Ok(())
    }
}
