//! Counter slice.
//!
//! A single integer plus a tri-state status flag tracking the most recent
//! asynchronous fetch.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter value and status enum (Idle / Loading / Failed)
//! - `intent.rs` - Mutations and async lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterState, CounterStatus};
