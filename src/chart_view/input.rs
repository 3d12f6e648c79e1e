use crate::drag_box::DragBoxLayer;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Routes raw mouse events into the drag box layer.
#[derive(Clone)]
pub struct ChartInputHandler {
    pub drag_box: Entity<DragBoxLayer>,
    pub focus_handle: FocusHandle,

    /// Container bounds captured by the last paint, shared with the
    /// renderer.
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartInputHandler {
    pub fn new(
        drag_box: Entity<DragBoxLayer>,
        focus_handle: FocusHandle,
        bounds: Rc<RefCell<Bounds<Pixels>>>,
    ) -> Self {
        Self {
            drag_box,
            focus_handle,
            bounds,
        }
    }

    pub fn handle_mouse_down(&self, event: &MouseDownEvent, window: &mut Window, cx: &mut App) {
        window.focus(&self.focus_handle);
        let container = *self.bounds.borrow();
        self.drag_box.update(cx, |layer, cx| {
            if layer.pointer_down(event.position, container) {
                cx.notify();
            }
        });
    }

    pub fn handle_mouse_move(&self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut App) {
        let container = *self.bounds.borrow();
        self.drag_box.update(cx, |layer, cx| {
            // A release outside the window never reaches us as an up event;
            // a move without the button still pressed ends the gesture so
            // the end listeners are not starved.
            let changed = if event.pressed_button == Some(MouseButton::Left) {
                layer.pointer_move(event.position, container)
            } else {
                layer.pointer_up(event.position, container)
            };
            if changed {
                cx.notify();
            }
        });
    }

    pub fn handle_mouse_up(&self, event: &MouseUpEvent, _window: &mut Window, cx: &mut App) {
        let container = *self.bounds.borrow();
        self.drag_box.update(cx, |layer, cx| {
            if layer.pointer_up(event.position, container) {
                cx.notify();
            }
        });
    }
}
