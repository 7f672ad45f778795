//! Model-View-Intent primitives for the page layer.
//!
//! Each page keeps its state in a plain value and funnels every change
//! through a reducer, so the whole loading/error/success lifecycle is
//! testable without a terminal:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//! ```

/// Marker trait for page state values.
///
/// States are self-contained (everything the view needs to draw) and
/// comparable so tests can assert on whole transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user key actions and settled fetches.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
///
/// Reducers never perform I/O. Fetch results enter as intents carrying
/// the already-settled resource.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
