//! Base trait for intents in the unidirectional state flow.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (toggling a habit, removing it, moving the selection)
/// - External inserts (a habit produced outside the UI)
/// - Bookkeeping from the view (the collection changed size)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
