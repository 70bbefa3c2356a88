// File: crates/plot-core/src/error.rs
// Summary: Error type shared by validation, rendering and export.

use thiserror::Error;

/// Upper bound on rows per call: 10 colors times 4 line styles, minus one.
pub const MAX_SERIES: usize = 39;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("will only plot a maximum of {max} series, got {count}")]
    TooManySeries { count: usize, max: usize },

    #[error("x and series {index} must have the same number of points ({expected} vs {len})")]
    LengthMismatch { index: usize, len: usize, expected: usize },

    #[error("unknown notation style '{0}', expected 'sci' or 'plain'")]
    InvalidNotation(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("display surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
