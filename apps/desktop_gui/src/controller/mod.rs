//! Controller layer: the interaction state machine, UI/backend events, and
//! command dispatch to the backend worker.

pub mod events;
pub mod orchestration;
pub mod reducer;
