//! Window registry
//!
//! Open-or-focus semantics keep window ids unique; a monotonic stacking
//! counter orders windows front to back.

mod entry;
mod registry;

pub use entry::{OpenRequest, WindowEntry, WindowId, WindowKind};
pub use registry::{OpenOutcome, WindowRegistry, STACK_ORDER_BASE};
