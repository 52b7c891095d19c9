//! Desktop icon layout
//!
//! Initial icon positions are computed wholesale from the viewport, either
//! scattered with rejection sampling or on an even grid. Users may drag icons
//! afterwards; positions are only recomputed when the viewport changes.

mod metrics;
mod layout;

pub use metrics::{IconLayoutConfig, IconLayoutPolicy, IconMetrics};
pub use layout::{fallback_cell, generate_positions, IconLayout};
