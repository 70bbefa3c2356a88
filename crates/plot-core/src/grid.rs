// File: crates/plot-core/src/grid.rs
// Summary: Tick locator picking evenly spaced "nice" positions.

/// Step multipliers tried within each decade, smallest first.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Default tick budget per axis.
pub const MAX_TICKS: usize = 9;

/// Ticks at multiples of a "nice" step, all inside `[min, max]`, at most `max_ticks`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max_ticks == 0 {
        return Vec::new();
    }
    if max <= min {
        return vec![min];
    }
    let raw = (max - min) / max_ticks.max(2) as f64;
    let mut magnitude = 10f64.powf(raw.log10().floor());
    loop {
        for mult in NICE_STEPS {
            let step = mult * magnitude;
            let first = (min / step - 1e-9).ceil() as i64;
            let last = (max / step + 1e-9).floor() as i64;
            if last < first {
                continue;
            }
            if ((last - first + 1) as usize) <= max_ticks {
                return (first..=last).map(|k| snap(k as f64 * step, step)).collect();
            }
        }
        magnitude *= 10.0;
    }
}

/// Collapse float noise such as `0.30000000000000004` and `-0.0`.
fn snap(v: f64, step: f64) -> f64 {
    if v.abs() < step * 1e-9 {
        return 0.0;
    }
    let digits = (-step.log10().floor() + 1.0).clamp(0.0, 15.0) as i32;
    let p = 10f64.powi(digits);
    (v * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_range_gets_fifths() {
        assert_eq!(nice_ticks(0.0, 1.0, 9), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_stay_inside_view() {
        let t = nice_ticks(0.55, 10.45, 9);
        assert!(t.iter().all(|&v| (0.55..=10.45).contains(&v)));
        assert_eq!(t, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn budget_is_respected() {
        for &(lo, hi) in &[(-3.2, 17.9), (0.001, 0.0093), (1e6, 3.5e6), (-1.0, 1.0)] {
            let t = nice_ticks(lo, hi, MAX_TICKS);
            assert!(!t.is_empty() && t.len() <= MAX_TICKS, "{lo}..{hi} -> {t:?}");
        }
    }
}
