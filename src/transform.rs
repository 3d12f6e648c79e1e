//! Transform helper for coordinate projection

use crate::data_types::BoxBounds;
use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds<Pixels>,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Bounds<Pixels>) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    pub fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        Point::new(
            self.bounds.origin.x + px(self.x_scale.map(point.x)),
            self.bounds.origin.y + px(self.y_scale.map(point.y)),
        )
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        Point::new(
            self.x_scale
                .invert((point.x - self.bounds.origin.x).as_f32()),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    pub fn x_data_to_screen(&self, x: f64) -> Pixels {
        self.bounds.origin.x + px(self.x_scale.map(x))
    }

    pub fn y_data_to_screen(&self, y: f64) -> Pixels {
        self.bounds.origin.y + px(self.y_scale.map(y))
    }

    /// Data-space extent of a selection rectangle, as
    /// ((x_low, x_high), (y_low, y_high)). The rectangle is expected in
    /// component-local coordinates, the frame the drag box operates in.
    /// The extents come back ordered per axis regardless of drag direction.
    pub fn selection_extent(&self, selection: BoxBounds) -> ((f64, f64), (f64, f64)) {
        let x1 = self.x_scale.invert(selection.top_left.x.as_f32());
        let x2 = self.x_scale.invert(selection.bottom_right.x.as_f32());
        let y1 = self.y_scale.invert(selection.top_left.y.as_f32());
        let y2 = self.y_scale.invert(selection.bottom_right.y.as_f32());
        ((x1.min(x2), x1.max(x2)), (y1.min(y2), y1.max(y2)))
    }
}
