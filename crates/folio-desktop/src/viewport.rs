//! Viewport dimensions and responsive breakpoints

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size};

/// Widths below this are treated as phones
pub const MOBILE_MAX_WIDTH: f32 = 640.0;

/// Widths below this (and at least [`MOBILE_MAX_WIDTH`]) are tablets
pub const TABLET_MAX_WIDTH: f32 = 768.0;

/// Smallest viewport the placement bounds guarantee is made for
pub const MIN_SUPPORTED_SIZE: Size = Size::new(320.0, 480.0);

/// Responsive breakpoint derived from the viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Host viewport (the browser's inner window size)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen size in pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Breakpoint for the current width
    pub fn breakpoint(&self) -> Breakpoint {
        if self.size.width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if self.size.width < TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.breakpoint() == Breakpoint::Mobile
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.size.height > self.size.width
    }

    /// Narrow portrait screens cannot host windows at all.
    ///
    /// Uses the tablet cut-off rather than the phone one, so small tablets
    /// held upright count too.
    pub fn is_narrow_portrait(&self) -> bool {
        self.size.width < TABLET_MAX_WIDTH && self.is_portrait()
    }

    /// Full viewport rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }
}
