//! Retry with exponential backoff around an itinerary generator.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::warn;
use tokio::time::sleep;

use super::ItineraryGenerator;
use crate::{
    error::Result,
    models::{Itinerary, Selection, TripParameters},
};

/// How many times to try a generator and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first; values below 1 behave as 1
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled before each later one
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// A policy that tries exactly once.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Delay before attempt `attempt` (1-based, so attempt 2 is the first
    /// retry).
    pub fn delay_before(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(2).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500))
    }
}

/// Retries retryable failures of the wrapped generator.
///
/// Non-retryable errors (invalid input) are returned on the first failure.
pub struct RetryingGenerator {
    inner: Arc<dyn ItineraryGenerator>,
    policy: RetryPolicy,
}

impl RetryingGenerator {
    pub fn new(inner: Arc<dyn ItineraryGenerator>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }
}

#[async_trait]
impl ItineraryGenerator for RetryingGenerator {
    async fn generate(&self, trip: &TripParameters, selection: Option<&Selection>) -> Result<Itinerary> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.inner.generate(trip, selection).await {
                Ok(itinerary) => return Ok(itinerary),
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    attempt += 1;
                    let delay = self.policy.delay_before(attempt);
                    warn!("Itinerary generation failed ({err}); retrying in {delay:?} (attempt {attempt}/{max_attempts})");
                    sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
