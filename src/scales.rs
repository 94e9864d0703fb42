//! Linear index-to-pixel mapping kept by each view alongside its plot engine.

#[derive(Clone, Debug, PartialEq)]
pub struct IndexScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl IndexScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut scale = Self {
            domain: (0.0, 1.0),
            range,
        };
        scale.update_domain(domain.0, domain.1);
        scale
    }

    pub fn map(&self, value: f64) -> f32 {
        let (m, c) = self.coeffs();
        let res = (value * m + c) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let (m, c) = self.coeffs();
        if m == 0.0 {
            return self.domain.0;
        }
        (pixel as f64 - c) / m
    }

    /// Nearest index under `pixel`, limited to `[0, len - 1]`.
    pub fn pixel_to_index(&self, pixel: f32, len: usize) -> usize {
        let v = self.invert(pixel).round();
        if v <= 0.0 || len == 0 {
            0
        } else {
            (v as usize).min(len - 1)
        }
    }

    /// Pixel width of one index step.
    pub fn step_width(&self) -> f32 {
        (self.map(1.0) - self.map(0.0)).abs()
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn update_domain(&mut self, min: f64, max: f64) {
        let mut d_min = min;
        let mut d_max = max;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        self.domain = (d_min, d_max);
    }

    pub fn update_range(&mut self, min: f32, max: f32) {
        self.range = (min, max);
    }

    /// Returns (m, c) such that pixel = value * m + c.
    fn coeffs(&self) -> (f64, f64) {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let m = (r_max - r_min) as f64 / (d_max - d_min);
        let c = r_min as f64 - m * d_min;
        (m, c)
    }
}
