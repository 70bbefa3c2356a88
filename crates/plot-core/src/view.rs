// File: crates/plot-core/src/view.rs
// Axis limits derived from what a figure actually draws.

use crate::figure::Figure;

/// Fractional padding added on each side of the data range.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Autoscale over visible line data; vertical markers widen x only.
    pub fn from_figure(figure: &Figure) -> Self {
        let mut x = Extent::default();
        let mut y = Extent::default();
        for line in figure.lines() {
            for (&xv, &yv) in line.x.iter().zip(&line.y) {
                if xv.is_finite() && yv.is_finite() {
                    x.add(xv);
                    y.add(yv);
                }
            }
        }
        for &xv in figure.vertical_markers() {
            if xv.is_finite() {
                x.add(xv);
            }
        }
        let (x_min, x_max) = x.padded();
        let (y_min, y_max) = y.padded();
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}

struct Extent {
    min: f64,
    max: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }
}

impl Extent {
    fn add(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    fn padded(&self) -> (f64, f64) {
        if !self.min.is_finite() || !self.max.is_finite() {
            return (0.0, 1.0);
        }
        if (self.max - self.min).abs() < 1e-12 {
            return (self.min - 1.0, self.max + 1.0);
        }
        let m = (self.max - self.min) * MARGIN;
        (self.min - m, self.max + m)
    }
}
