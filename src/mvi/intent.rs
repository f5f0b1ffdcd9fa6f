//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Direct mutations (increment, decrement, add an amount)
/// - Async lifecycle events (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: std::fmt::Debug + Send + 'static {}
