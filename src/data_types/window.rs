use serde::{Deserialize, Serialize};

/// Visible range in shared index space (array offsets, not residue numbers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub min: f64,
    pub max: f64,
}

impl ViewWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, idx: f64) -> bool {
        idx >= self.min && idx <= self.max
    }

    pub fn pan(&mut self, delta: f64) {
        self.min += delta;
        self.max += delta;
    }

    /// Clamps each edge independently to `[lo, hi]`.
    pub fn clamp_edges(&mut self, lo: f64, hi: f64) {
        self.min = self.min.clamp(lo, hi);
        self.max = self.max.clamp(lo, hi);
        if self.max < self.min {
            self.max = self.min;
        }
    }

    /// Moves the window back inside `[lo, hi]` keeping its span when it fits.
    pub fn clamp_preserving_span(&mut self, lo: f64, hi: f64) {
        let limit_span = hi - lo;
        let span = self.span();
        if span > limit_span {
            self.min = lo;
            self.max = hi;
        } else if self.min < lo {
            self.min = lo;
            self.max = lo + span;
        } else if self.max > hi {
            self.max = hi;
            self.min = hi - span;
        }
    }
}
