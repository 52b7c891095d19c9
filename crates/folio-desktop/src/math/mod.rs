//! Geometry primitives in CSS pixels
//!
//! Positions are top-left origins in viewport space with y growing downward.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;

/// Clamp `value` into `[min, max]`, letting `min` win when the range is empty.
///
/// `f32::clamp` panics on an inverted range, which degenerate viewports
/// produce routinely.
#[inline]
pub fn clamp_lower_wins(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
