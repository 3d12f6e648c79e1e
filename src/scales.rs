use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear data-to-pixel mapping with the domain and range kept alongside
/// the underlying d3rs scale.
#[derive(Clone)]
pub struct ChartScale {
    scale: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        // A degenerate domain would make every mapping collapse; widen it
        // to a unit window around the value.
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            scale,
            domain: (d_min, d_max),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.scale.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.scale.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }
}
