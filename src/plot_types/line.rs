use crate::data_types::{LinePlotConfig, PlotDataSource, PlotPoint, VecDataSource};
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use gpui::*;

use super::{PlotEntity, PlotRenderer};

/// Line plot type
pub struct LinePlot {
    pub source: Box<dyn PlotDataSource>,
    pub config: LinePlotConfig,
}

impl LinePlot {
    pub fn new(data: Vec<PlotPoint>) -> Self {
        Self {
            source: Box::new(VecDataSource::new(data)),
            config: LinePlotConfig::default(),
        }
    }

    pub fn with_source(source: Box<dyn PlotDataSource>) -> Self {
        Self {
            source,
            config: LinePlotConfig::default(),
        }
    }

    /// Contiguous runs of finite samples, in data order. A non-finite x or
    /// y ends the current run, so the painted line breaks at gaps instead
    /// of bridging them.
    pub fn segments(&self) -> Vec<Vec<PlotPoint>> {
        let mut segments = Vec::new();
        let mut current: Vec<PlotPoint> = Vec::new();
        for p in self.source.points() {
            if p.is_finite() {
                current.push(*p);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// One entity per finite sample, with its projected pixel position.
    /// Gap samples produce no entity.
    pub fn entities(&self, transform: &PlotTransform) -> Vec<PlotEntity> {
        self.source
            .points()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(index, p)| PlotEntity {
                index,
                datum: *p,
                position: transform.data_to_screen(Point::new(p.x, p.y)),
            })
            .collect()
    }

    /// Entity with the smallest pixel distance to `target`, considering
    /// only samples inside the transform's domains. Ties keep the earlier
    /// sample. `None` when nothing qualifies.
    pub fn entity_nearest(
        &self,
        transform: &PlotTransform,
        target: Point<Pixels>,
    ) -> Option<PlotEntity> {
        let (x_min, x_max) = transform.x_scale.domain();
        let (y_min, y_max) = transform.y_scale.domain();

        let mut nearest: Option<PlotEntity> = None;
        let mut best_dist = f32::INFINITY;
        for entity in self.entities(transform) {
            let p = entity.datum;
            if p.x < x_min || p.x > x_max || p.y < y_min || p.y > y_max {
                continue;
            }
            let dx = (entity.position.x - target.x).as_f32();
            let dy = (entity.position.y - target.y).as_f32();
            let dist = dx * dx + dy * dy;
            if dist < best_dist {
                best_dist = dist;
                nearest = Some(entity);
            }
        }
        nearest
    }
}

impl PlotRenderer for LinePlot {
    fn render(&self, window: &mut Window, transform: &PlotTransform, _series_id: &str) {
        let mut builder = PathBuilder::stroke(px(self.config.line_width));
        let mut first = true;
        let mut last_px_x = f32::MIN;
        let mut last_px_y = 0.0;

        for point in self.source.points() {
            if !point.is_finite() {
                // Gap: the next finite sample starts a new subpath.
                first = true;
                continue;
            }

            let screen_point = transform.data_to_screen(Point::new(point.x, point.y));
            let px_x = screen_point.x.as_f32();
            let px_y = screen_point.y.as_f32();

            // Simple decimation: if we are on the same X pixel, only draw if
            // the Y change is significant.
            if !first && (px_x - last_px_x).abs() < 0.5 && (px_y - last_px_y).abs() < 1.0 {
                continue;
            }

            if first {
                builder.move_to(screen_point);
                first = false;
            } else {
                builder.line_to(screen_point);
            }
            last_px_x = px_x;
            last_px_y = px_y;
        }

        if let Ok(path) = builder.build() {
            window.paint_path(path, self.config.color);
        }
    }

    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)> {
        self.source.get_bounds()
    }

    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        self.source.get_y_range(x_min, x_max)
    }
}
