//! Window and workspace rectangles

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Top-left anchored rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Slack allowed when comparing edges produced by float arithmetic
const EDGE_TOLERANCE: f32 = 0.01;

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of a window of `size` placed at `origin`
    #[inline]
    pub fn from_pos_size(origin: Vec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `inner` lies entirely within this rectangle
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.x >= self.x - EDGE_TOLERANCE
            && inner.y >= self.y - EDGE_TOLERANCE
            && inner.right() <= self.right() + EDGE_TOLERANCE
            && inner.bottom() <= self.bottom() + EDGE_TOLERANCE
    }

    /// Whether the two rectangles share any area (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
