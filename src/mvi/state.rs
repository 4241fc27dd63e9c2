//! Base trait for reducer-managed state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states; shared parts sit behind `Arc`)
/// - Self-contained (everything a reader needs, nothing derived)
/// - Comparable (PartialEq tells a no-op transition from a real one)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
