//! Click-versus-drag gesture classifier
//!
//! One tracker per draggable entity. A press becomes a drag once the pointer
//! has travelled `threshold` pixels from where it went down, and stays a drag
//! until release. Released drags linger in [`GesturePhase::Settling`] for a
//! grace period so a trailing synthetic click is not taken as a new click.

use tracing::trace;
use crate::math::Vec2;

/// Phase of the current gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase {
    /// No pointer is down
    Idle,
    /// Pointer is down
    Active {
        /// Pointer position at press
        origin: Vec2,
        /// Whether the threshold has been crossed
        did_drag: bool,
    },
    /// A drag just ended; clicks are swallowed until `until_ms`
    Settling {
        until_ms: f64,
    },
}

/// Classification of a finished gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Pointer stayed under the threshold: fire the click action
    Click,
    /// Pointer crossed the threshold: the click action is suppressed
    Drag,
    /// Release without a matching press
    Ignored,
}

/// Per-entity gesture state machine
#[derive(Clone, Debug)]
pub struct DragTracker {
    threshold: f32,
    grace_ms: f64,
    phase: GesturePhase,
}

impl DragTracker {
    pub fn new(threshold: f32, grace_ms: f64) -> Self {
        Self {
            threshold,
            grace_ms,
            phase: GesturePhase::Idle,
        }
    }

    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, GesturePhase::Active { .. })
    }

    /// Whether the current gesture has become a drag
    #[inline]
    pub fn did_drag(&self) -> bool {
        matches!(self.phase, GesturePhase::Active { did_drag: true, .. })
    }

    /// Pointer went down. Always starts a fresh gesture.
    pub fn begin(&mut self, origin: Vec2) {
        trace!(x = origin.x, y = origin.y, "gesture begin");
        self.phase = GesturePhase::Active {
            origin,
            did_drag: false,
        };
    }

    /// Pointer moved. Returns the displacement from the press point, or
    /// `None` when no gesture is active.
    pub fn update(&mut self, pointer: Vec2) -> Option<Vec2> {
        let GesturePhase::Active { origin, did_drag } = &mut self.phase else {
            return None;
        };

        if !*did_drag && origin.distance(pointer) >= self.threshold {
            *did_drag = true;
            trace!(threshold = self.threshold, "gesture became drag");
        }

        Some(pointer - *origin)
    }

    /// Pointer released at `now_ms`
    pub fn release(&mut self, now_ms: f64) -> GestureOutcome {
        match self.phase {
            GesturePhase::Active { did_drag: false, .. } => {
                self.phase = GesturePhase::Idle;
                GestureOutcome::Click
            }
            GesturePhase::Active { did_drag: true, .. } => {
                self.phase = GesturePhase::Settling {
                    until_ms: now_ms + self.grace_ms,
                };
                GestureOutcome::Drag
            }
            GesturePhase::Idle | GesturePhase::Settling { .. } => GestureOutcome::Ignored,
        }
    }

    /// Abandon the gesture without firing anything
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Whether a click arriving at `now_ms` should be swallowed
    pub fn suppresses_click(&self, now_ms: f64) -> bool {
        match self.phase {
            GesturePhase::Active { did_drag, .. } => did_drag,
            GesturePhase::Settling { until_ms } => now_ms < until_ms,
            GesturePhase::Idle => false,
        }
    }
}
