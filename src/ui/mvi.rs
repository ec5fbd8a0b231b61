//! Unidirectional state-flow primitives.
//!
//! Intents (user actions or completed system events) go into a reducer, a
//! new state comes out, and the view renders from state alone. The reducer
//! is the only place a state transition happens.

/// Marker trait for state objects: immutable snapshots, cloned to produce
/// successors, comparable to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents fed to a reducer.
pub trait Intent: Send + 'static {}

/// A pure `(State, Intent) -> State` transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
