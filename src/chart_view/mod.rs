pub mod input;
pub mod renderer;

use crate::data_types::{AxisMask, AxisRange, Series, SharedPlotState};
use crate::drag_box::DragBoxLayer;
use crate::scales::ChartScale;
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use eyre::Result;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

use self::input::ChartInputHandler;

/// A chart with an interactive drag-box selection layer.
///
/// The view owns the plotted series and the axis ranges; the selection
/// state lives in its own [`DragBoxLayer`] entity, observed so any change
/// there re-renders the chart.
pub struct ChartView {
    pub drag_box: Entity<DragBoxLayer>,
    pub theme: ChartTheme,

    series: Vec<Series>,
    x_range: AxisRange,
    y_range: AxisRange,
    shared_state: SharedPlotState,

    input: ChartInputHandler,
    bounds: Rc<RefCell<Bounds<Pixels>>>,
    focus_handle: FocusHandle,
}

impl Focusable for ChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ChartView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let drag_box = cx.new(|_| DragBoxLayer::new());
        cx.observe(&drag_box, |_, _, cx| cx.notify()).detach();

        let focus_handle = cx.focus_handle();
        let bounds = Rc::new(RefCell::new(Bounds::default()));

        let input =
            ChartInputHandler::new(drag_box.clone(), focus_handle.clone(), bounds.clone());

        info!("ChartView new called");

        Self {
            drag_box,
            theme: ChartTheme::default(),
            series: Vec::new(),
            x_range: AxisRange::new(0.0, 1.0),
            y_range: AxisRange::new(0.0, 1.0),
            shared_state: SharedPlotState::default(),
            input,
            bounds,
            focus_handle,
        }
    }

    // --- Series and axes ----------------------------------------------

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) {
        self.x_range = AxisRange::new(min, max);
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) {
        self.y_range = AxisRange::new(min, max);
    }

    /// Fit both axes to the attached series with a 5% margin. Does nothing
    /// when no series carries finite data.
    pub fn auto_fit_axes(&mut self) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for s in &self.series {
            if let Some((sx_min, sx_max, sy_min, sy_max)) = s.plot.borrow().get_min_max() {
                x_min = x_min.min(sx_min);
                x_max = x_max.max(sx_max);
                y_min = y_min.min(sy_min);
                y_max = y_max.max(sy_max);
            }
        }

        if x_min.is_finite() {
            self.x_range.fit(x_min, x_max, 0.05);
            self.y_range.fit(y_min, y_max, 0.05);
        }
    }

    pub fn shared_state(&self) -> &SharedPlotState {
        &self.shared_state
    }

    pub fn set_debug_mode(&mut self, debug: bool) {
        self.shared_state.debug_mode = debug;
    }

    /// Container bounds captured by the last paint, shared with the input
    /// handler and the plot canvas.
    pub(crate) fn bounds_handle(&self) -> Rc<RefCell<Bounds<Pixels>>> {
        self.bounds.clone()
    }

    /// Transform matching the last painted frame, for hit queries against
    /// the plots. Zero-sized until the first paint.
    pub fn plot_transform(&self) -> PlotTransform {
        let bounds = *self.bounds.borrow();
        let x_scale = ChartScale::new_linear(
            (self.x_range.min, self.x_range.max),
            (0.0, bounds.size.width.as_f32()),
        );
        let y_scale = ChartScale::new_linear(
            (self.y_range.min, self.y_range.max),
            (bounds.size.height.as_f32(), 0.0),
        );
        PlotTransform::new(x_scale, y_scale, bounds)
    }

    // --- Drag box forwarding ------------------------------------------
    //
    // Convenience setters that mutate the selection layer and request a
    // re-render in one step. Everything here is also reachable through
    // `drag_box` directly.

    pub fn set_detection_radius(&mut self, radius: Pixels, cx: &mut Context<Self>) -> Result<()> {
        let result = self
            .drag_box
            .update(cx, |layer, _| layer.set_detection_radius(radius));
        if result.is_ok() {
            cx.notify();
        }
        result
    }

    pub fn set_resizable(&mut self, resizable: bool, cx: &mut Context<Self>) {
        self.drag_box
            .update(cx, |layer, _| layer.set_resizable(resizable));
        cx.notify();
    }

    pub fn set_movable(&mut self, movable: bool, cx: &mut Context<Self>) {
        self.drag_box
            .update(cx, |layer, _| layer.set_movable(movable));
        cx.notify();
    }

    pub fn set_resize_axes(&mut self, axes: AxisMask, cx: &mut Context<Self>) {
        self.drag_box
            .update(cx, |layer, _| layer.set_resize_axes(axes));
        cx.notify();
    }

    pub fn set_drag_box_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.drag_box
            .update(cx, |layer, _| layer.set_enabled(enabled));
        cx.notify();
    }

    /// Data-space extent of the current selection under the last painted
    /// frame, or `None` while the box is hidden.
    pub fn selection_extent(&self, cx: &App) -> Option<((f64, f64), (f64, f64))> {
        let layer = self.drag_box.read(cx);
        if !layer.box_visible() {
            return None;
        }
        Some(self.plot_transform().selection_extent(layer.bounds()))
    }
}

impl Render for ChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let element = renderer::render_chart(self, cx);

        let input = self.input.clone();
        let entity_id = cx.entity_id();

        element
            .id(("chart-view", entity_id))
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_down(e, w, c)
            })
            .on_mouse_move({
                let input = input.clone();
                move |e, w, c| input.handle_mouse_move(e, w, c)
            })
            .on_mouse_up(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_up(e, w, c)
            })
    }
}
