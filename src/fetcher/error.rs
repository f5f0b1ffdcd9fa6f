//! Error types for count fetchers.

use thiserror::Error;

/// Errors a fetcher can report. All of them mean "fetch failure" to the
/// counter slice; the detail only reaches the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Injected failure from the simulated fetcher.
    #[error("Simulated transient failure on call {call}")]
    Simulated { call: u32 },

    /// The remote side refused the request.
    #[error("Fetch rejected: {0}")]
    Rejected(String),
}
