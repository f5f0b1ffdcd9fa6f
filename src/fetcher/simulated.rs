//! Simulated network round trip.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::FetcherConfig;

use super::error::FetchError;
use super::{CountFetcher, FetchResponse};

/// Echo fetcher: waits a fixed delay, then resolves with `data = amount`.
///
/// With `fail_every = Some(n)` every n-th call is rejected instead.
#[derive(Debug)]
pub struct SimulatedFetcher {
    delay: Duration,
    fail_every: Option<u32>,
    calls: AtomicU32,
}

impl SimulatedFetcher {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_every: None,
            calls: AtomicU32::new(0),
        }
    }

    /// Reject every `n`-th call. `0` disables injection.
    pub fn with_fail_every(mut self, n: u32) -> Self {
        self.fail_every = (n > 0).then_some(n);
        self
    }

    pub fn from_config(config: &FetcherConfig) -> Self {
        let fetcher = Self::new(Duration::from_millis(config.delay_ms));
        match config.fail_every {
            Some(n) => fetcher.with_fail_every(n),
            None => fetcher,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of calls started so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedFetcher {
    fn default() -> Self {
        Self::from_config(&FetcherConfig::default())
    }
}

#[async_trait]
impl CountFetcher for SimulatedFetcher {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch_count(&self, amount: i64) -> Result<FetchResponse, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if let Some(n) = self.fail_every {
            if call % n == 0 {
                return Err(FetchError::Simulated { call });
            }
        }

        Ok(FetchResponse { data: amount })
    }
}
