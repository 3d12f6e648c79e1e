// Plot types module

pub mod line;

pub use line::LinePlot;

use crate::data_types::PlotPoint;
use crate::transform::PlotTransform;
use gpui::*;

/// One visible datum of a plot, with its projected pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotEntity {
    pub index: usize,
    pub datum: PlotPoint,
    pub position: Point<Pixels>,
}

/// Trait for rendering plot types
pub trait PlotRenderer {
    fn render(&self, window: &mut Window, transform: &PlotTransform, series_id: &str);

    /// Get min/max bounds for auto-fitting (x_min, x_max, y_min, y_max)
    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)>;

    /// Get Y min/max range within a specific X range.
    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)>;
}
