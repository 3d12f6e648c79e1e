//! Draggable selection box: drag on empty space to create one, grab an edge
//! or corner to resize it, grab the interior to move it.
//!
//! [`DragBoxLayer`] holds the box state and the gesture rules independently
//! of the GPUI infrastructure to facilitate testing; `chart_view` wires it
//! to mouse events and paints it.

use eyre::{bail, Result};
use gpui::{px, Bounds, Pixels, Point};
use tracing::debug;

use crate::callbacks::{CallbackSet, DragBoxCallback};
use crate::data_types::{
    resizing_edges, AxisMask, BoxBounds, DragBoxConfig, ResizeEdges,
};
use crate::interactions::{DragGesture, GesturePhase};

/// How the current gesture acts on the box. Decided once at the start of
/// the gesture and never re-evaluated mid-drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragMode {
    /// Drag out a fresh box anchored at the start point.
    NewBox,
    /// Reposition the grabbed edges; a corner grab carries both.
    Resize(ResizeEdges),
    /// Translate the whole box by the pointer delta.
    Move,
}

/// Derived flags the renderer consults for cursors and affordances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleMarkers {
    pub x_resizable: bool,
    pub y_resizable: bool,
    pub movable: bool,
}

/// In-flight gesture state. The corners are working copies, committed to
/// the layer bounds after every step so callbacks always observe the
/// committed value.
#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    mode: DragMode,
    top_left: Point<Pixels>,
    bottom_right: Point<Pixels>,
    last_point: Point<Pixels>,
}

pub struct DragBoxLayer {
    bounds: BoxBounds,
    visible: bool,
    config: DragBoxConfig,
    markers: StyleMarkers,
    gesture: DragGesture,
    drag: Option<ActiveDrag>,
    drag_start_callbacks: CallbackSet<dyn Fn(&BoxBounds)>,
    drag_callbacks: CallbackSet<dyn Fn(&BoxBounds)>,
    drag_end_callbacks: CallbackSet<dyn Fn(&BoxBounds)>,
}

impl DragBoxLayer {
    pub fn new() -> Self {
        let config = DragBoxConfig::default();
        let mut layer = Self {
            bounds: BoxBounds::default(),
            visible: false,
            config,
            markers: StyleMarkers::default(),
            gesture: DragGesture::new(),
            drag: None,
            drag_start_callbacks: CallbackSet::new(),
            drag_callbacks: CallbackSet::new(),
            drag_end_callbacks: CallbackSet::new(),
        };
        layer.refresh_markers();
        layer
    }

    // --- Raw pointer entry points -------------------------------------

    /// Feed a press in window coordinates. Returns whether the layer state
    /// changed, so the host knows to re-render.
    pub fn pointer_down(&mut self, position: Point<Pixels>, container: Bounds<Pixels>) -> bool {
        match self.gesture.pointer_down(position, container) {
            Some(phase) => {
                self.apply_phase(phase);
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, position: Point<Pixels>, container: Bounds<Pixels>) -> bool {
        match self.gesture.pointer_move(position, container) {
            Some(phase) => {
                self.apply_phase(phase);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self, position: Point<Pixels>, container: Bounds<Pixels>) -> bool {
        match self.gesture.pointer_up(position, container) {
            Some(phase) => {
                self.apply_phase(phase);
                true
            }
            None => false,
        }
    }

    fn apply_phase(&mut self, phase: GesturePhase) {
        match phase {
            GesturePhase::Start { point } => self.drag_start(point),
            GesturePhase::Moved { start, current } => self.drag_move(start, current),
            GesturePhase::End { start, end } => self.drag_end(start, end),
        }
    }

    // --- Gesture steps, in component-local coordinates ----------------

    /// Start a gesture at `point`: pick the mode, make the box visible and
    /// notify the start listeners with the committed bounds.
    pub fn drag_start(&mut self, point: Point<Pixels>) {
        let mode = self.mode_at(point);
        if matches!(mode, DragMode::NewBox) {
            self.bounds = BoxBounds::degenerate(point);
        }
        debug!(?mode, "drag box gesture started");

        self.visible = true;
        self.drag = Some(ActiveDrag {
            mode,
            top_left: self.bounds.top_left,
            bottom_right: self.bounds.bottom_right,
            last_point: point,
        });
        self.drag_start_callbacks.call(&self.bounds);
    }

    /// Advance the gesture to `current`, commit the result and notify the
    /// drag listeners. Without a preceding start this is a no-op.
    pub fn drag_move(&mut self, _start: Point<Pixels>, current: Point<Pixels>) {
        let Some(mut drag) = self.drag else {
            return;
        };

        match drag.mode {
            DragMode::NewBox => {
                drag.bottom_right = current;
            }
            DragMode::Resize(edges) => {
                // Opposite edges can both be grabbed on a box thinner than
                // the detection band; bottom wins over top, right over left.
                if edges.bottom {
                    drag.bottom_right.y = current.y;
                } else if edges.top {
                    drag.top_left.y = current.y;
                }
                if edges.right {
                    drag.bottom_right.x = current.x;
                } else if edges.left {
                    drag.top_left.x = current.x;
                }
            }
            DragMode::Move => {
                let dx = current.x - drag.last_point.x;
                let dy = current.y - drag.last_point.y;
                drag.top_left.x += dx;
                drag.top_left.y += dy;
                drag.bottom_right.x += dx;
                drag.bottom_right.y += dy;
                drag.last_point = current;
            }
        }

        self.bounds = BoxBounds::new(drag.top_left, drag.bottom_right);
        self.drag = Some(drag);
        self.drag_callbacks.call(&self.bounds);
    }

    /// Finish the gesture. A click that never moved while creating a new
    /// box hides it again; either way the end listeners are notified.
    pub fn drag_end(&mut self, start: Point<Pixels>, end: Point<Pixels>) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        if matches!(drag.mode, DragMode::NewBox) && start == end {
            self.visible = false;
        }
        self.drag_end_callbacks.call(&self.bounds);
    }

    /// Edges a grab at `p` would resize, honoring the configured radius
    /// and axis mask. Empty while the box is hidden or resizing is off.
    pub fn resizing_edges_at(&self, p: Point<Pixels>) -> ResizeEdges {
        if !self.visible {
            return ResizeEdges::default();
        }
        let mask = if self.config.resizable {
            self.config.resize_axes
        } else {
            AxisMask::None
        };
        resizing_edges(self.bounds, p, self.config.detection_radius, mask)
    }

    /// Mode a gesture starting at `p` would run in right now.
    pub fn mode_at(&self, p: Point<Pixels>) -> DragMode {
        let edges = self.resizing_edges_at(p);
        if self.visible && edges.any() {
            DragMode::Resize(edges)
        } else if self.visible && self.config.movable && self.bounds.contains(p) {
            DragMode::Move
        } else {
            DragMode::NewBox
        }
    }

    // --- Box state ----------------------------------------------------

    pub fn bounds(&self) -> BoxBounds {
        self.bounds
    }

    /// Replace the box outright. The layer owns the bounds while a gesture
    /// is in flight; replacing them mid-gesture is on the caller.
    pub fn set_bounds(&mut self, bounds: BoxBounds) {
        self.bounds = bounds;
    }

    pub fn box_visible(&self) -> bool {
        self.visible
    }

    pub fn set_box_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Mode of the gesture currently in flight, if any.
    pub fn active_mode(&self) -> Option<DragMode> {
        self.drag.map(|d| d.mode)
    }

    // --- Configuration ------------------------------------------------

    pub fn detection_radius(&self) -> Pixels {
        self.config.detection_radius
    }

    /// Set the half-width of the edge detection band. Negative values are
    /// rejected and leave the radius unchanged.
    pub fn set_detection_radius(&mut self, radius: Pixels) -> Result<()> {
        if radius < px(0.0) {
            bail!("detection radius cannot be negative");
        }
        self.config.detection_radius = radius;
        Ok(())
    }

    pub fn resizable(&self) -> bool {
        self.config.resizable
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.config.resizable = resizable;
        self.refresh_markers();
    }

    pub fn movable(&self) -> bool {
        self.config.movable
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.config.movable = movable;
        self.refresh_markers();
    }

    pub fn resize_axes(&self) -> AxisMask {
        self.config.resize_axes
    }

    pub fn set_resize_axes(&mut self, axes: AxisMask) {
        self.config.resize_axes = axes;
        self.refresh_markers();
    }

    pub fn config(&self) -> &DragBoxConfig {
        &self.config
    }

    /// Style flags derived from the configuration; recomputed by every
    /// setter so repeated assignments stay idempotent.
    pub fn markers(&self) -> StyleMarkers {
        self.markers
    }

    /// Whether corner affordances exist. Corners only make sense when both
    /// axes resize.
    pub fn has_corners(&self) -> bool {
        self.config.resize_axes == AxisMask::Both
    }

    fn refresh_markers(&mut self) {
        self.markers = StyleMarkers {
            x_resizable: self.config.resizable && self.config.resize_axes.allows_x(),
            y_resizable: self.config.resizable && self.config.resize_axes.allows_y(),
            movable: self.config.movable,
        };
    }

    // --- Gesture source -----------------------------------------------

    /// Whether pointer events are consumed at all. Delegates to the
    /// gesture source; the box state itself is untouched by toggling.
    pub fn enabled(&self) -> bool {
        self.gesture.enabled()
    }

    /// Disabling mid-gesture abandons the gesture: no end notification is
    /// sent and the box keeps its last committed bounds.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.gesture.set_enabled(enabled);
        if !enabled {
            self.drag = None;
        }
    }

    // --- Listener registration ----------------------------------------

    pub fn on_drag_start(&mut self, callback: DragBoxCallback) {
        self.drag_start_callbacks.add(callback);
    }

    pub fn off_drag_start(&mut self, callback: &DragBoxCallback) {
        self.drag_start_callbacks.remove(callback);
    }

    pub fn on_drag(&mut self, callback: DragBoxCallback) {
        self.drag_callbacks.add(callback);
    }

    pub fn off_drag(&mut self, callback: &DragBoxCallback) {
        self.drag_callbacks.remove(callback);
    }

    pub fn on_drag_end(&mut self, callback: DragBoxCallback) {
        self.drag_end_callbacks.add(callback);
    }

    pub fn off_drag_end(&mut self, callback: &DragBoxCallback) {
        self.drag_end_callbacks.remove(callback);
    }
}

impl Default for DragBoxLayer {
    fn default() -> Self {
        Self::new()
    }
}
