//! Base trait for slice state in MVI architecture.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to hand out snapshots)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the state a fresh session starts from)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
