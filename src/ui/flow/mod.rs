//! The view state machine: which of the five screens is active.

mod intent;
mod reducer;
mod state;

pub use intent::FlowIntent;
pub use reducer::FlowReducer;
pub use state::{FlowState, ViewId};
