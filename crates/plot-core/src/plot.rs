// File: crates/plot-core/src/plot.rs
// Summary: The series plotter: translate plot parameters into figure calls, export, then show.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::display::Display;
use crate::error::Result;
use crate::figure::{Figure, Line};
use crate::format::{Notation, TickFormat};
use crate::legend::Legend;
use crate::series::{Markers, SeriesSet};
use crate::style::SeriesStyle;
use crate::types::SAVE_DPI;
use crate::window::{apply_mask, forced_ticks, DisplayWindow};

/// Parameters of one plot call. Every field is optional in TOML.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Shared x-axis; `1..=N` when absent.
    pub x: Option<Vec<f64>>,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub vertical_markers: Option<Markers>,
    pub y_title: String,
    pub x_title: String,
    pub title: String,
    /// Legend labels by series index; missing entries leave a series unlabelled.
    pub labels: Option<Vec<String>>,
    pub reverse_legend: bool,
    /// Export target without extension; empty disables export.
    pub save_path: String,
    pub dpi: u32,
    pub use_offset: bool,
    pub notation: Notation,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x: None,
            x_min: None,
            x_max: None,
            vertical_markers: None,
            y_title: String::new(),
            x_title: String::new(),
            title: String::new(),
            labels: None,
            reverse_legend: false,
            save_path: String::new(),
            dpi: SAVE_DPI,
            use_offset: false,
            notation: Notation::Sci,
        }
    }
}

impl PlotOptions {
    /// `<save_path>.png`, or `None` when export is disabled.
    pub fn png_path(&self) -> Option<PathBuf> {
        (!self.save_path.is_empty()).then(|| PathBuf::from(format!("{}.png", self.save_path)))
    }
}

/// Draw `series` onto `figure`, export if requested, then show it on `display`.
///
/// Lines accumulate on the figure; pass a fresh (or cleared) figure per chart.
pub fn plot_series<D: Display + ?Sized>(
    figure: &mut Figure,
    display: &mut D,
    series: impl Into<SeriesSet>,
    options: &PlotOptions,
) -> Result<()> {
    let series = series.into();
    let x = series.resolve_x(options.x.as_deref());
    let window = DisplayWindow::resolve(&x, options.x_min, options.x_max);
    series.validate(x.len())?;

    let mask = window.mask(&x);
    let visible_x = apply_mask(&x, &mask);
    if visible_x.is_empty() && !x.is_empty() {
        warn!(x_min = window.x_min, x_max = window.x_max, "display window hides every point");
    }

    for (i, row) in series.rows().iter().enumerate() {
        let style = SeriesStyle::for_index(i);
        let label = options.labels.as_ref().and_then(|l| l.get(i)).cloned();
        debug!(index = i, color_slot = style.color_slot, line = ?style.line, label = ?label, "plotting series");
        figure.plot(Line::new(visible_x.clone(), apply_mask(row, &mask), style, label));
    }

    figure.set_x_label(options.x_title.as_str());
    figure.set_y_label(options.y_title.as_str());
    figure.set_title(options.title.as_str());

    if options.labels.is_some() {
        let mut legend = Legend::new(figure.legend_handles());
        if options.reverse_legend {
            legend.reverse();
        }
        figure.set_legend(legend);
    }

    figure.set_grid(true);

    if let Some(markers) = &options.vertical_markers {
        for xc in markers.iter() {
            figure.axvline(xc);
        }
    }

    if let Some(ticks) = forced_ticks(&visible_x) {
        figure.set_x_ticks(ticks);
    }

    if let Some(path) = options.png_path() {
        figure.save_png(&path, f64::from(options.dpi))?;
    }

    figure.set_tick_format(TickFormat { use_offset: options.use_offset, notation: options.notation });
    display.show(figure)
}
