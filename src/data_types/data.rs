#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A sample with both coordinates finite. Non-finite samples mark gaps
    /// in a series and never contribute to bounds or hit-testing.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A named plot attached to a chart view.
#[derive(Clone)]
pub struct Series {
    pub id: String,
    pub plot: std::rc::Rc<std::cell::RefCell<dyn crate::plot_types::PlotRenderer>>,
}

impl Series {
    pub fn new(id: impl Into<String>, plot: impl crate::plot_types::PlotRenderer + 'static) -> Self {
        Self {
            id: id.into(),
            plot: std::rc::Rc::new(std::cell::RefCell::new(plot)),
        }
    }
}
