//! Intents for the counter slice.

use crate::mvi::Intent;

/// Intents that can be dispatched to the counter reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    IncrementByAmount {
        amount: i64,
    },

    /// An async fetch has started. Value is untouched.
    FetchPending,

    /// The async fetch resolved with `amount` to add.
    FetchFulfilled {
        amount: i64,
    },

    /// The async fetch failed. No error details are kept.
    FetchRejected,
}

impl Intent for CounterIntent {}

impl CounterIntent {
    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            CounterIntent::Increment => "increment",
            CounterIntent::Decrement => "decrement",
            CounterIntent::IncrementByAmount { .. } => "increment_by_amount",
            CounterIntent::FetchPending => "fetch/pending",
            CounterIntent::FetchFulfilled { .. } => "fetch/fulfilled",
            CounterIntent::FetchRejected => "fetch/rejected",
        }
    }
}
