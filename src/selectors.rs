//! Read-only accessors over the whole application state.

use crate::counter::CounterStatus;
use crate::store::AppState;

/// Current counter value.
pub fn select_count(state: &AppState) -> i64 {
    state.counter.value
}

/// Status of the most recent async fetch.
pub fn select_status(state: &AppState) -> CounterStatus {
    state.counter.status
}
