//! Input router state machine
//!
//! At most one pointer gesture is active at a time. The router owns it from
//! press to release so move handlers never outlive the gesture, and keeps the
//! last released tracker around to swallow trailing clicks.

use crate::math::{Rect, Vec2};
use crate::window::WindowId;
use super::{BackdropDismiss, DragTracker, GestureConfig, GestureOutcome, WindowDrag};

/// Entity a gesture belongs to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// Desktop icon by slot index
    Icon(usize),
    /// Window header
    Window(WindowId),
}

/// Current drag operation state
#[derive(Clone, Debug)]
pub enum DragState {
    /// Pressing or dragging a desktop icon
    Icon {
        /// Icon slot
        index: usize,
        /// Icon position at press
        start_pos: Vec2,
        /// Click/drag classifier
        tracker: DragTracker,
    },
    /// Pressing or dragging a window header
    Window(WindowDrag),
}

impl DragState {
    /// Entity this gesture belongs to
    pub fn target(&self) -> DragTarget {
        match self {
            DragState::Icon { index, .. } => DragTarget::Icon(*index),
            DragState::Window(drag) => DragTarget::Window(drag.window_id().clone()),
        }
    }

    /// Check if this is an icon gesture
    #[inline]
    pub fn is_icon(&self) -> bool {
        matches!(self, DragState::Icon { .. })
    }

    /// Check if this is a window move operation
    #[inline]
    pub fn is_window(&self) -> bool {
        matches!(self, DragState::Window(_))
    }
}

/// Input router managing gesture state
pub struct InputRouter {
    config: GestureConfig,
    /// Current drag state
    drag: Option<DragState>,
    /// Most recently released gesture, kept for its grace period
    settling: Option<(DragTarget, DragTracker)>,
    /// Overlay backdrop click detection
    backdrop: BackdropDismiss,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new(config: GestureConfig) -> Self {
        let backdrop = BackdropDismiss::new(config.backdrop_threshold, config.backdrop_max_press_ms);
        Self {
            config,
            drag: None,
            settling: None,
            backdrop,
        }
    }

    #[inline]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn drag_state_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    /// Check if a pointer gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn backdrop_mut(&mut self) -> &mut BackdropDismiss {
        &mut self.backdrop
    }

    /// Start an icon press
    pub fn start_icon(&mut self, index: usize, pointer: Vec2, start_pos: Vec2) {
        let mut tracker = DragTracker::new(self.config.icon_drag_threshold, self.config.click_grace_ms);
        tracker.begin(pointer);
        self.drag = Some(DragState::Icon {
            index,
            start_pos,
            tracker,
        });
    }

    /// Start a window header press
    pub fn start_window_move(&mut self, window_id: WindowId, pointer: Vec2, window_rect: Rect) {
        let tracker = DragTracker::new(self.config.window_drag_threshold, self.config.click_grace_ms);
        self.backdrop.reset();
        self.drag = Some(DragState::Window(WindowDrag::start(window_id, pointer, window_rect, tracker)));
    }

    /// End the current gesture, returning what it was and how it classified
    pub fn end_drag(&mut self, now_ms: f64) -> Option<(DragTarget, GestureOutcome)> {
        let state = self.drag.take()?;
        let target = state.target();

        let (outcome, tracker) = match state {
            DragState::Icon { mut tracker, .. } => {
                let outcome = tracker.release(now_ms);
                (outcome, tracker)
            }
            DragState::Window(drag) => drag.release(now_ms),
        };

        if outcome == GestureOutcome::Drag {
            self.settling = Some((target.clone(), tracker));
        }
        Some((target, outcome))
    }

    /// Drop the current gesture without classifying it
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Whether a click on `target` at `now_ms` belongs to a drag and must be ignored
    pub fn click_suppressed(&self, target: &DragTarget, now_ms: f64) -> bool {
        if let Some(state) = &self.drag {
            if &state.target() == target {
                let tracker = match state {
                    DragState::Icon { tracker, .. } => tracker,
                    DragState::Window(drag) => drag.tracker(),
                };
                if tracker.suppresses_click(now_ms) {
                    return true;
                }
            }
        }

        match &self.settling {
            Some((settled, tracker)) => settled == target && tracker.suppresses_click(now_ms),
            None => false,
        }
    }
}
