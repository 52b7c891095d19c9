//! Click-outside dismissal for overlay windows
//!
//! A press on the backdrop only dismisses when the release lands on the
//! backdrop too, close to where it started and soon after. Drags that merely
//! end over the backdrop leave the overlay open.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::math::Vec2;

/// Element a pointer event landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerTarget {
    /// The dimmed area around the overlay
    Backdrop,
    /// The overlay itself or anything inside it
    Content,
}

#[derive(Clone, Copy, Debug)]
struct BackdropPress {
    origin: Vec2,
    pressed_at_ms: f64,
}

/// Backdrop click detector
#[derive(Clone, Debug)]
pub struct BackdropDismiss {
    threshold: f32,
    max_press_ms: f64,
    press: Option<BackdropPress>,
}

impl BackdropDismiss {
    pub fn new(threshold: f32, max_press_ms: f64) -> Self {
        Self {
            threshold,
            max_press_ms,
            press: None,
        }
    }

    /// Whether a backdrop press is waiting for its release
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.press.is_some()
    }

    /// Pointer went down. Only presses directly on the backdrop arm it.
    pub fn press(&mut self, target: PointerTarget, pointer: Vec2, now_ms: f64) -> bool {
        self.press = match target {
            PointerTarget::Backdrop => Some(BackdropPress {
                origin: pointer,
                pressed_at_ms: now_ms,
            }),
            PointerTarget::Content => None,
        };
        self.press.is_some()
    }

    /// Pointer released. Returns true when the overlay should close.
    pub fn release(&mut self, target: PointerTarget, pointer: Vec2, now_ms: f64) -> bool {
        let Some(press) = self.press.take() else {
            return false;
        };

        let quick = now_ms - press.pressed_at_ms < self.max_press_ms;
        let still = press.origin.distance(pointer) < self.threshold;
        let same_element = target == PointerTarget::Backdrop;

        trace!(quick, still, same_element, "backdrop release");
        quick && still && same_element
    }

    /// Forget any pending press
    pub fn reset(&mut self) {
        self.press = None;
    }
}
