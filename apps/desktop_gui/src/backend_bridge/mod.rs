//! Bridge between the egui frame loop and the backend worker thread.

pub mod commands;
pub mod runtime;
