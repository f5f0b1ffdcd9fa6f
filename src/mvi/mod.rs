//! Model-View-Intent (MVI) primitives for state slices.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selector
//!    ↑                                │
//!    └──── Thunk (async effects) ─────┘
//! ```
//!
//! - **State**: Immutable snapshot of a slice
//! - **Intent**: A requested change or an async lifecycle event
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
