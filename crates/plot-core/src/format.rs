// File: crates/plot-core/src/format.rs
// Summary: Tick-label formatting with an optional shared offset and scientific multiplier.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PlotError;

/// Leading digits ticks must share before an offset is factored out.
const OFFSET_THRESHOLD: i32 = 4;
/// Exponents at or beyond these bounds switch `Sci` labels to a multiplier.
const SCI_LIMITS: (i32, i32) = (-5, 6);
/// Upper bound on decimals printed per label.
const MAX_DECIMALS: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Sci,
    Plain,
}

impl FromStr for Notation {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sci" | "scientific" => Ok(Notation::Sci),
            "plain" => Ok(Notation::Plain),
            _ => Err(PlotError::InvalidNotation(s.to_string())),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notation::Sci => "sci",
            Notation::Plain => "plain",
        })
    }
}

/// How tick values become label text on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat {
    pub use_offset: bool,
    pub notation: Notation,
}

impl Default for TickFormat {
    /// Formatter in effect before any explicit request: offset on, sci limits.
    fn default() -> Self {
        Self { use_offset: true, notation: Notation::Sci }
    }
}

/// Labels for one axis plus the text drawn at the axis end, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickLabels {
    pub labels: Vec<String>,
    pub offset_text: Option<String>,
}

impl TickFormat {
    /// Label `ticks` lying in the view interval `[lo, hi]`.
    pub fn format(&self, ticks: &[f64], lo: f64, hi: f64) -> TickLabels {
        if ticks.is_empty() {
            return TickLabels::default();
        }
        let offset = if self.use_offset { compute_offset(ticks) } else { 0.0 };
        let oom = self.order_of_magnitude(ticks, offset, hi - lo);
        let scale = 10f64.powi(oom);
        let scaled: Vec<f64> = ticks.iter().map(|t| (t - offset) / scale).collect();
        let decimals = decimals_needed(&scaled);
        let labels = scaled
            .iter()
            .map(|v| {
                let s = format!("{:.*}", decimals, v);
                // "-0.0" reads as noise on an axis
                if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
                    s.trim_start_matches('-').to_string()
                } else {
                    s
                }
            })
            .collect();

        let mut text = String::new();
        if oom != 0 {
            text.push_str(&format!("1e{oom}"));
        }
        if offset != 0.0 {
            text.push(if offset > 0.0 { '+' } else { '-' });
            text.push_str(&compact_sci(offset.abs()));
        }
        TickLabels { labels, offset_text: (!text.is_empty()).then_some(text) }
    }

    /// With an offset the exponent follows the view span, else the largest |tick|.
    fn order_of_magnitude(&self, ticks: &[f64], offset: f64, span: f64) -> i32 {
        if self.notation == Notation::Plain {
            return 0;
        }
        let val = if offset != 0.0 {
            span.abs()
        } else {
            ticks.iter().map(|t| t.abs()).fold(0.0, f64::max)
        };
        if val == 0.0 || !val.is_finite() {
            return 0;
        }
        let oom = val.log10().floor() as i32;
        if oom <= SCI_LIMITS.0 || oom >= SCI_LIMITS.1 { oom } else { 0 }
    }
}

/// Shared additive offset for ticks that agree on their leading digits, else 0.
fn compute_offset(ticks: &[f64]) -> f64 {
    let lmin = ticks.iter().copied().fold(f64::INFINITY, f64::min);
    let lmax = ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lmin.is_finite() || !lmax.is_finite() || lmin == lmax || (lmin <= 0.0 && 0.0 <= lmax) {
        return 0.0;
    }
    let (abs_min, abs_max) = if lmin.abs() < lmax.abs() {
        (lmin.abs(), lmax.abs())
    } else {
        (lmax.abs(), lmin.abs())
    };
    let sign = lmin.signum();
    let oom_max = abs_max.log10().ceil() as i32;

    let mut oom = oom_max;
    while oom > -300 && (abs_min / 10f64.powi(oom)).floor() == (abs_max / 10f64.powi(oom)).floor() {
        oom -= 1;
    }
    let mut oom = oom + 1;
    if (abs_max - abs_min) / 10f64.powi(oom) <= 1e-2 {
        let mut o = oom_max;
        while o > -300 && abs_max - abs_min < 10f64.powi(o) {
            o -= 1;
        }
        oom = o + 1;
    }

    let lead = (abs_max / 10f64.powi(oom)).floor();
    if lead >= 10f64.powi(OFFSET_THRESHOLD - 1) {
        sign * lead * 10f64.powi(oom)
    } else {
        0.0
    }
}

/// Fewest decimals that print every value without visible rounding.
fn decimals_needed(values: &[f64]) -> usize {
    (0..=MAX_DECIMALS)
        .find(|&d| {
            let p = 10f64.powi(d as i32);
            values.iter().all(|v| {
                let shifted = v * p;
                (shifted - shifted.round()).abs() < 1e-6 * shifted.abs().max(1.0)
            })
        })
        .unwrap_or(MAX_DECIMALS)
}

/// `10000.0` -> `1e4`, `10002.0` -> `1.0002e4`.
fn compact_sci(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let exp = v.log10().floor() as i32;
    let mantissa = v / 10f64.powi(exp);
    let m = format!("{:.10}", mantissa);
    let m = m.trim_end_matches('0').trim_end_matches('.');
    format!("{m}e{exp}")
}
