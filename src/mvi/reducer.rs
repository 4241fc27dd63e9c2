//! Reducer trait for the unidirectional state flow.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Takes the previous state by value and touches nothing else. An
    /// intent naming something that does not exist returns the state
    /// unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
