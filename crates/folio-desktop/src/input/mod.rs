//! Input routing module
//!
//! Click-versus-drag classification for icons and window headers, clamped
//! window dragging, and backdrop dismissal of overlays.

mod config;
mod gesture;
mod window_drag;
mod backdrop;
mod router;
mod result;

pub use config::GestureConfig;
pub use gesture::{DragTracker, GestureOutcome, GesturePhase};
pub use window_drag::WindowDrag;
pub use backdrop::{BackdropDismiss, PointerTarget};
pub use router::{DragState, DragTarget, InputRouter};
pub use result::InputResult;
