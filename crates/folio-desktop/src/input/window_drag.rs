//! Dragging a window by its header

use crate::math::{Rect, Size, Vec2};
use crate::placement::PlacementEngine;
use crate::viewport::Viewport;
use crate::window::WindowId;
use super::{DragTracker, GestureOutcome};

/// An in-progress header drag of one window
#[derive(Clone, Debug)]
pub struct WindowDrag {
    /// Window being moved
    window_id: WindowId,
    /// Offset from window origin to cursor
    grab_offset: Vec2,
    /// Rendered window size at press
    size: Size,
    /// Click/drag classifier for this press
    tracker: DragTracker,
}

impl WindowDrag {
    /// Start dragging the window currently rendered at `window_rect`
    pub fn start(window_id: WindowId, pointer: Vec2, window_rect: Rect, mut tracker: DragTracker) -> Self {
        tracker.begin(pointer);
        Self {
            window_id,
            grab_offset: pointer - window_rect.position(),
            size: window_rect.size(),
            tracker,
        }
    }

    #[inline]
    pub fn window_id(&self) -> &WindowId {
        &self.window_id
    }

    #[inline]
    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    /// Follow the pointer, returning the new clamped window origin
    pub fn pointer_move(
        &mut self,
        pointer: Vec2,
        placement: &PlacementEngine,
        viewport: &Viewport,
    ) -> Vec2 {
        self.tracker.update(pointer);
        placement.clamp_to_workspace(pointer - self.grab_offset, self.size, viewport)
    }

    /// Finish the drag, handing back the tracker for the settling period
    pub fn release(mut self, now_ms: f64) -> (GestureOutcome, DragTracker) {
        let outcome = self.tracker.release(now_ms);
        (outcome, self.tracker)
    }
}
