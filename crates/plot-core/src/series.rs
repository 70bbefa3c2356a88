// File: crates/plot-core/src/series.rs
// Summary: Series input model: row promotion, x-axis synthesis, validation, vertical markers.
// Notes:
// - A flat sequence is promoted to a single row, so every caller-facing
//   shape funnels into `SeriesSet` before validation.

use serde::Deserialize;

use crate::error::{PlotError, Result, MAX_SERIES};

/// Ordered rows of y-values sharing one x-axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    rows: Vec<Vec<f64>>,
}

impl SeriesSet {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Promote one flat sequence to a one-row set.
    pub fn single(values: Vec<f64>) -> Self {
        Self { rows: vec![values] }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of points in the first row (0 when there are no rows).
    pub fn point_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Use `x` as given, or synthesize `1..=N` from the first row's length.
    pub fn resolve_x(&self, x: Option<&[f64]>) -> Vec<f64> {
        match x {
            Some(x) => x.to_vec(),
            None => (1..=self.point_count()).map(|i| i as f64).collect(),
        }
    }

    /// Enforce the row cap and that every row matches the x-axis length.
    pub fn validate(&self, x_len: usize) -> Result<()> {
        if self.rows.len() > MAX_SERIES {
            return Err(PlotError::TooManySeries { count: self.rows.len(), max: MAX_SERIES });
        }
        if let Some((index, row)) = self.rows.iter().enumerate().find(|(_, r)| r.len() != x_len) {
            return Err(PlotError::LengthMismatch { index, len: row.len(), expected: x_len });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for SeriesSet {
    fn from(values: Vec<f64>) -> Self {
        Self::single(values)
    }
}

impl From<&[f64]> for SeriesSet {
    fn from(values: &[f64]) -> Self {
        Self::single(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SeriesSet {
    fn from(values: [f64; N]) -> Self {
        Self::single(values.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for SeriesSet {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<&[Vec<f64>]> for SeriesSet {
    fn from(rows: &[Vec<f64>]) -> Self {
        Self::from_rows(rows.to_vec())
    }
}

/// X-positions of vertical reference lines. A scalar broadcasts to one marker.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "MarkerSpec")]
pub struct Markers(Vec<f64>);

#[derive(Deserialize)]
#[serde(untagged)]
enum MarkerSpec {
    One(f64),
    Many(Vec<f64>),
}

impl From<MarkerSpec> for Markers {
    fn from(spec: MarkerSpec) -> Self {
        match spec {
            MarkerSpec::One(x) => Markers(vec![x]),
            MarkerSpec::Many(xs) => Markers(xs),
        }
    }
}

impl Markers {
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<f64> for Markers {
    fn from(x: f64) -> Self {
        Markers(vec![x])
    }
}

impl From<Vec<f64>> for Markers {
    fn from(xs: Vec<f64>) -> Self {
        Markers(xs)
    }
}

impl From<&[f64]> for Markers {
    fn from(xs: &[f64]) -> Self {
        Markers(xs.to_vec())
    }
}
