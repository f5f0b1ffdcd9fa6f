//! State for the counter slice.

use serde::Serialize;

use crate::mvi::SliceState;

/// Status of the most recent asynchronous fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    /// No fetch in flight; the last one (if any) succeeded.
    #[default]
    Idle,
    /// A fetch has started and not yet resolved.
    Loading,
    /// The last fetch failed. Cleared by the next pending or fulfilled event.
    Failed,
}

impl CounterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterStatus::Idle => "idle",
            CounterStatus::Loading => "loading",
            CounterStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for CounterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counter value plus fetch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterState {
    /// Unconstrained; may go negative.
    pub value: i64,
    pub status: CounterStatus,
}

impl SliceState for CounterState {}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            status: CounterStatus::Idle,
        }
    }

    /// Check if an asynchronous fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == CounterStatus::Loading
    }

    /// Check if the value is odd. Negative odd values count.
    pub fn is_odd(&self) -> bool {
        self.value % 2 != 0
    }
}
