//! Window placement
//!
//! Decides where a newly opened window goes: the first window is left to the
//! presentation layer to center, the second splits the screen when there is
//! room, and later windows cascade. Every explicit position keeps the whole
//! window inside the workspace band between the menu bar and the dock.

mod config;
mod engine;

pub use config::PlacementConfig;
pub use engine::{Placement, PlacementEngine};
