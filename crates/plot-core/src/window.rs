// File: crates/plot-core/src/window.rs
// Summary: Display window over the x-axis and the boolean mask it induces.

/// Below this many visible x-points, ticks are pinned to the visible x-values.
pub const FORCED_TICK_LIMIT: usize = 6;

/// Inclusive `[x_min, x_max]` bound on which points are rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayWindow {
    pub x_min: f64,
    pub x_max: f64,
}

impl DisplayWindow {
    pub fn new(x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max }
    }

    /// Fill unset bounds from the min/max of `x`.
    pub fn resolve(x: &[f64], x_min: Option<f64>, x_max: Option<f64>) -> Self {
        let lo = x_min.unwrap_or_else(|| x.iter().copied().fold(f64::INFINITY, f64::min));
        let hi = x_max.unwrap_or_else(|| x.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        Self::new(lo, hi)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    pub fn mask(&self, x: &[f64]) -> Vec<bool> {
        x.iter().map(|&v| self.contains(v)).collect()
    }
}

/// Keep the entries of `values` whose mask slot is set.
pub fn apply_mask(values: &[f64], mask: &[bool]) -> Vec<f64> {
    values
        .iter()
        .zip(mask)
        .filter_map(|(&v, &keep)| keep.then_some(v))
        .collect()
}

/// Explicit x ticks when the window leaves only a handful of points.
pub fn forced_ticks(visible_x: &[f64]) -> Option<Vec<f64>> {
    (visible_x.len() < FORCED_TICK_LIMIT).then(|| visible_x.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let w = DisplayWindow::new(2.0, 4.0);
        assert_eq!(w.mask(&[1.0, 2.0, 3.0, 4.0, 5.0]), vec![false, true, true, true, false]);
    }

    #[test]
    fn resolve_defaults_to_data_range() {
        let w = DisplayWindow::resolve(&[3.0, -1.0, 7.0], None, Some(5.0));
        assert_eq!(w, DisplayWindow::new(-1.0, 5.0));
    }

    #[test]
    fn nan_x_is_never_visible() {
        let w = DisplayWindow::new(0.0, 10.0);
        assert!(!w.contains(f64::NAN));
    }

    #[test]
    fn tick_forcing_boundary() {
        assert!(forced_ticks(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_some());
        assert!(forced_ticks(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).is_none());
    }

    #[test]
    fn mask_applies_per_slot() {
        let mask = [true, false, true];
        assert_eq!(apply_mask(&[10.0, 20.0, 30.0], &mask), vec![10.0, 30.0]);
    }
}
