// File: crates/plot-core/tests/common/mod.rs
// Purpose: Shared helpers: a display that records what it was shown instead of rasterizing.

#![allow(dead_code)]

use plot_core::{Display, Figure, RenderOptions, Result, TickFormat};

/// State of a figure at the moment it reached the display.
#[derive(Clone, Debug)]
pub struct Shown {
    pub lines: usize,
    pub legend: Option<Vec<String>>,
    pub x_ticks: Option<Vec<f64>>,
    pub tick_format: TickFormat,
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Shown>,
}

impl Display for RecordingDisplay {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        self.shown.push(Shown {
            lines: figure.lines().len(),
            legend: figure.legend().map(|l| l.labels().iter().map(|s| s.to_string()).collect()),
            x_ticks: figure.x_axis().ticks.clone(),
            tick_format: figure.tick_format(),
        });
        Ok(())
    }
}

/// Figure without text so pixel output does not depend on installed fonts.
pub fn textless_figure() -> Figure {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    Figure::with_options(opts)
}

pub fn rows(count: usize, len: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|r| (0..len).map(|i| (i as f64 * 0.3 + r as f64).sin() + r as f64).collect())
        .collect()
}

pub fn out_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
