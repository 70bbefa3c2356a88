// File: crates/plot-core/src/axis.rs
// Summary: Axis model with a title and optional pinned tick positions.

use crate::grid::{nice_ticks, MAX_TICKS};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axis {
    pub label: String,
    /// Explicit tick positions; `None` lets the locator choose.
    pub ticks: Option<Vec<f64>>,
}

impl Axis {
    /// Tick positions inside `[min, max]`: pinned ones if set, else nice ones.
    pub fn tick_values(&self, min: f64, max: f64) -> Vec<f64> {
        match &self.ticks {
            Some(pinned) => pinned
                .iter()
                .copied()
                .filter(|t| *t >= min && *t <= max)
                .collect(),
            None => nice_ticks(min, max, MAX_TICKS),
        }
    }
}
