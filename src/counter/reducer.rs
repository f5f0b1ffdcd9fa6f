//! Reducer for the counter slice.

use crate::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterState, CounterStatus};

/// Reducer for counter state transitions.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                value: state.value.wrapping_add(1),
                ..state
            },
            CounterIntent::Decrement => CounterState {
                value: state.value.wrapping_sub(1),
                ..state
            },
            CounterIntent::IncrementByAmount { amount } => CounterState {
                value: state.value.wrapping_add(amount),
                ..state
            },
            CounterIntent::FetchPending => CounterState {
                status: CounterStatus::Loading,
                ..state
            },
            CounterIntent::FetchFulfilled { amount } => CounterState {
                value: state.value.wrapping_add(amount),
                status: CounterStatus::Idle,
            },
            CounterIntent::FetchRejected => CounterState {
                status: CounterStatus::Failed,
                ..state
            },
        }
    }
}
