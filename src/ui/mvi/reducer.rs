use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// The reducer is the only place state transitions happen. No side
/// effects; resources live outside the state and are managed by the app.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the successor state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
