use super::data::PlotPoint;

/// Trait for data sources that provide points for a plot.
pub trait PlotDataSource {
    /// Returns the bounds of the data as (x_min, x_max, y_min, y_max).
    /// Non-finite samples are skipped; `None` when nothing finite remains.
    fn get_bounds(&self) -> Option<(f64, f64, f64, f64)>;

    /// Y-range within a specific X-window (for auto-scaling Y).
    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)>;

    /// All samples in insertion order, gaps included.
    fn points(&self) -> &[PlotPoint];

    /// Add a single data point.
    fn add_data(&mut self, point: PlotPoint);

    /// Replace all data.
    fn set_data(&mut self, data: Vec<PlotPoint>);

    /// Total number of samples, gaps included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default implementation backed by a simple Vec.
pub struct VecDataSource {
    data: Vec<PlotPoint>,
}

impl VecDataSource {
    pub fn new(data: Vec<PlotPoint>) -> Self {
        Self { data }
    }
}

impl PlotDataSource for VecDataSource {
    fn get_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for p in self.data.iter().filter(|p| p.is_finite()) {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        if x_min.is_finite() {
            Some((x_min, x_max, y_min, y_max))
        } else {
            None
        }
    }

    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for p in self
            .data
            .iter()
            .filter(|p| p.is_finite() && p.x >= x_min && p.x <= x_max)
        {
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        if y_min.is_finite() {
            Some((y_min, y_max))
        } else {
            None
        }
    }

    fn points(&self) -> &[PlotPoint] {
        &self.data
    }

    fn add_data(&mut self, point: PlotPoint) {
        self.data.push(point);
    }

    fn set_data(&mut self, data: Vec<PlotPoint>) {
        self.data = data;
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
