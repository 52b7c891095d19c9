//! Pointer event handling for icons, window headers and the overlay backdrop

use tracing::trace;

use crate::input::{DragState, DragTarget, GestureOutcome, InputResult, PointerTarget};
use crate::math::{Rect, Vec2};
use crate::window::WindowId;
use super::DesktopEngine;

/// Entity moved by one pointer-move event
enum Moved {
    Icon(usize, Vec2),
    Window(WindowId, Vec2),
}

impl DesktopEngine {
    /// Pointer pressed on icon slot `index`
    pub fn icon_pointer_down(&mut self, index: usize, x: f32, y: f32) -> InputResult {
        let Some(start_pos) = self.icons.position(index) else {
            return InputResult::Unhandled;
        };
        self.input.start_icon(index, Vec2::new(x, y), start_pos);
        InputResult::Handled
    }

    /// Pointer pressed anywhere on a window: bring it to the front
    pub fn window_pointer_down(&mut self, id: &WindowId) -> InputResult {
        self.focus_window(id)
    }

    /// Pointer pressed on a window header at its rendered rectangle: focus and
    /// start a move
    pub fn header_pointer_down(&mut self, id: &WindowId, x: f32, y: f32, window_rect: Rect) -> InputResult {
        if !self.windows.focus(id) {
            return InputResult::Unhandled;
        }
        self.input.start_window_move(id.clone(), Vec2::new(x, y), window_rect);
        InputResult::Handled
    }

    /// Pointer moved. Entities follow the pointer once the gesture is a drag.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);

        let moved = match self.input.drag_state_mut() {
            Some(DragState::Icon { index, start_pos, tracker }) => {
                let Some(delta) = tracker.update(pointer) else {
                    return InputResult::Unhandled;
                };
                if !tracker.did_drag() {
                    return InputResult::Handled;
                }
                Moved::Icon(*index, *start_pos + delta)
            }
            Some(DragState::Window(drag)) => {
                let position = drag.pointer_move(pointer, self.windows.placement(), &self.viewport);
                if !drag.tracker().did_drag() {
                    return InputResult::Handled;
                }
                Moved::Window(drag.window_id().clone(), position)
            }
            None => return InputResult::Unhandled,
        };

        match moved {
            Moved::Icon(index, position) => {
                self.icons.move_icon(index, position, &self.viewport);
            }
            Moved::Window(id, position) => {
                self.windows.move_window(&id, position);
            }
        }
        InputResult::Handled
    }

    /// Pointer released. A click on an icon activates its project; drags
    /// only leave the entity where it was dropped.
    pub fn pointer_up(&mut self, now_ms: f64) -> InputResult {
        let Some((target, outcome)) = self.input.end_drag(now_ms) else {
            return InputResult::Unhandled;
        };
        trace!(?target, ?outcome, "gesture ended");

        match (target, outcome) {
            (DragTarget::Icon(index), GestureOutcome::Click) => self.activate_icon(index),
            (_, GestureOutcome::Click | GestureOutcome::Drag) => InputResult::Handled,
            (_, GestureOutcome::Ignored) => InputResult::Unhandled,
        }
    }

    /// Abandon the current gesture (pointer cancel, focus loss)
    pub fn cancel_gesture(&mut self) {
        self.input.cancel();
    }

    /// Whether a host click event on `target` belongs to a finished drag
    pub fn is_click_suppressed(&self, target: &DragTarget, now_ms: f64) -> bool {
        self.input.click_suppressed(target, now_ms)
    }

    /// Pointer pressed while the about overlay is open
    pub fn backdrop_pointer_down(&mut self, target: PointerTarget, x: f32, y: f32, now_ms: f64) -> InputResult {
        if !self.windows.contains(&WindowId::about()) {
            return InputResult::Unhandled;
        }
        if self.input.backdrop_mut().press(target, Vec2::new(x, y), now_ms) {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Pointer released while the about overlay is open. A quick, still click
    /// on the backdrop closes the overlay.
    pub fn backdrop_pointer_up(&mut self, target: PointerTarget, x: f32, y: f32, now_ms: f64) -> InputResult {
        if !self.input.backdrop_mut().release(target, Vec2::new(x, y), now_ms) {
            return InputResult::Unhandled;
        }
        self.close_window(&WindowId::about())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::engine;
    use super::*;
    use crate::engine::Notice;

    fn icon_center(engine: &DesktopEngine, index: usize) -> Vec2 {
        engine.icons.position(index).unwrap() + Vec2::splat(10.0)
    }

    #[test]
    fn test_icon_click_opens_project() {
        let mut engine = engine();
        let p = icon_center(&engine, 0);

        engine.icon_pointer_down(0, p.x, p.y);
        engine.pointer_move(p.x + 2.0, p.y);
        let result = engine.pointer_up(1000.0);

        assert_eq!(result, InputResult::Opened { id: WindowId::project("chess") });
    }

    #[test]
    fn test_icon_drag_moves_without_opening() {
        let mut engine = engine();
        let start = engine.icons.position(0).unwrap();
        let p = icon_center(&engine, 0);

        engine.icon_pointer_down(0, p.x, p.y);
        engine.pointer_move(p.x - 10.0, p.y - 15.0);
        let result = engine.pointer_up(1000.0);

        assert_eq!(result, InputResult::Handled);
        assert!(engine.windows.is_empty());

        let moved = engine.icons.position(0).unwrap();
        assert!((moved.x - (start.x - 10.0)).abs() < 0.001);
        assert!((moved.y - (start.y - 15.0)).abs() < 0.001);
        assert!(engine.is_click_suppressed(&DragTarget::Icon(0), 1100.0));
    }

    #[test]
    fn test_in_progress_icon_click_shows_notice() {
        let mut engine = engine();
        let p = icon_center(&engine, 1);
        engine.icon_pointer_down(1, p.x, p.y);
        assert_eq!(
            engine.pointer_up(0.0),
            InputResult::ShowNotice { notice: Notice::WorkInProgress }
        );
    }

    #[test]
    fn test_header_drag_moves_window() {
        let mut engine = engine();
        engine.open_about();
        let id = WindowId::about();
        let rect = Rect::new(560.0, 160.0, 800.0, 800.0);

        assert_eq!(engine.header_pointer_down(&id, 600.0, 170.0, rect), InputResult::Handled);
        engine.pointer_move(700.0, 200.0);
        engine.pointer_up(0.0);

        let pos = engine.windows.get(&id).unwrap().position.unwrap();
        assert!((pos.x - 660.0).abs() < 0.001);
        assert!((pos.y - 190.0).abs() < 0.001);
    }

    #[test]
    fn test_header_press_focuses() {
        let mut engine = engine();
        engine.open_about();
        engine.open_project("chess").unwrap();

        let rect = Rect::new(0.0, 40.0, 800.0, 800.0);
        engine.header_pointer_down(&WindowId::about(), 10.0, 50.0, rect);
        assert_eq!(engine.windows.focused(), Some(&WindowId::about()));

        // A still header release is just a click
        assert_eq!(engine.pointer_up(0.0), InputResult::Handled);
    }

    #[test]
    fn test_header_press_on_unknown_window() {
        let mut engine = engine();
        let rect = Rect::new(0.0, 40.0, 800.0, 800.0);
        assert_eq!(
            engine.header_pointer_down(&WindowId::about(), 10.0, 50.0, rect),
            InputResult::Unhandled
        );
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_move_and_release_without_gesture() {
        let mut engine = engine();
        assert_eq!(engine.pointer_move(10.0, 10.0), InputResult::Unhandled);
        assert_eq!(engine.pointer_up(0.0), InputResult::Unhandled);
    }

    #[test]
    fn test_backdrop_click_closes_about() {
        let mut engine = engine();
        engine.open_about();

        engine.backdrop_pointer_down(PointerTarget::Backdrop, 5.0, 5.0, 1000.0);
        let result = engine.backdrop_pointer_up(PointerTarget::Backdrop, 6.0, 6.0, 1100.0);
        assert_eq!(result, InputResult::Closed { id: WindowId::about() });
        assert!(engine.windows.is_empty());
    }

    #[test]
    fn test_backdrop_drag_keeps_about() {
        let mut engine = engine();
        engine.open_about();

        engine.backdrop_pointer_down(PointerTarget::Backdrop, 5.0, 5.0, 1000.0);
        engine.backdrop_pointer_up(PointerTarget::Backdrop, 50.0, 5.0, 1100.0);
        assert!(engine.windows.contains(&WindowId::about()));

        engine.backdrop_pointer_down(PointerTarget::Content, 5.0, 5.0, 2000.0);
        engine.backdrop_pointer_up(PointerTarget::Backdrop, 5.0, 5.0, 2050.0);
        assert!(engine.windows.contains(&WindowId::about()));
    }

    #[test]
    fn test_backdrop_without_overlay() {
        let mut engine = engine();
        assert_eq!(
            engine.backdrop_pointer_down(PointerTarget::Backdrop, 5.0, 5.0, 0.0),
            InputResult::Unhandled
        );
    }

    #[test]
    fn test_closing_dragged_window_cancels_gesture() {
        let mut engine = engine();
        engine.open_about();
        let rect = Rect::new(560.0, 160.0, 800.0, 800.0);
        engine.header_pointer_down(&WindowId::about(), 600.0, 170.0, rect);

        engine.close_window(&WindowId::about());
        assert!(!engine.input.is_dragging());
    }
}
