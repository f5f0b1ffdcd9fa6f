use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Simulated fetcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Simulated round-trip delay in milliseconds (default: 500).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Reject every n-th fetch. Unset means fetches never fail.
    #[serde(default)]
    pub fail_every: Option<u32>,
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            fail_every: None,
        }
    }
}
