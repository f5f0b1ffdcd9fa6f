//! Remote count fetcher.
//!
//! The counter slice only depends on the [`CountFetcher`] contract; the
//! [`SimulatedFetcher`] stands in for a network round trip.

mod error;
mod simulated;

use async_trait::async_trait;
use serde::Serialize;

pub use error::FetchError;
pub use simulated::SimulatedFetcher;

/// Payload returned by a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchResponse {
    pub data: i64,
}

/// Source of amounts to add to the counter.
#[async_trait]
pub trait CountFetcher: Send + Sync {
    /// Returns the name of this fetcher for logging.
    fn name(&self) -> &'static str;

    /// Fetch the amount to add for a request of `amount`.
    async fn fetch_count(&self, amount: i64) -> Result<FetchResponse, FetchError>;
}
