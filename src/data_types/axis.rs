/// State for a single axis (X or Y).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fit the range to `[min, max]` padded by `margin` (fraction of the
    /// span) on each side. A degenerate input span falls back to a unit
    /// window around the value.
    pub fn fit(&mut self, min: f64, max: f64, margin: f64) {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            self.min = min - 0.5;
            self.max = max + 0.5;
        } else {
            self.min = min - span * margin;
            self.max = max + span * margin;
        }
    }
}
