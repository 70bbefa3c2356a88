// File: crates/plot-core/src/figure.rs
// Summary: Caller-owned figure: the drawing context a plot call mutates, rasterizes and exports.

use std::path::Path;

use tracing::info;

use crate::axis::Axis;
use crate::error::Result;
use crate::format::TickFormat;
use crate::legend::{Legend, LegendEntry};
use crate::render::{self, Frame, RenderOptions};
use crate::style::SeriesStyle;
use crate::view::ViewState;

/// One drawn series: already-masked points plus its stroke style and label.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: SeriesStyle,
    pub label: Option<String>,
}

impl Line {
    pub fn new(x: Vec<f64>, y: Vec<f64>, style: SeriesStyle, label: Option<String>) -> Self {
        Self { x, y, style, label }
    }
}

pub struct Figure {
    options: RenderOptions,
    lines: Vec<Line>,
    vertical_markers: Vec<f64>,
    title: String,
    x_axis: Axis,
    y_axis: Axis,
    legend: Option<Legend>,
    grid: bool,
    tick_format: TickFormat,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            vertical_markers: Vec::new(),
            title: String::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            legend: None,
            grid: false,
            tick_format: TickFormat::default(),
        }
    }

    /// Drop all drawn content, keeping render options.
    pub fn clear(&mut self) {
        *self = Self::with_options(self.options.clone());
    }

    pub fn plot(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Vertical reference line at `x` spanning the full y-range.
    pub fn axvline(&mut self, x: f64) {
        self.vertical_markers.push(x);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_axis.label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_axis.label = label.into();
    }

    pub fn set_x_ticks(&mut self, ticks: Vec<f64>) {
        self.x_axis.ticks = Some(ticks);
    }

    pub fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn set_tick_format(&mut self, format: TickFormat) {
        self.tick_format = format;
    }

    /// Handles of labelled lines in draw order. Lines with no label, an empty
    /// label or one starting with `_` stay out of the legend.
    pub fn legend_handles(&self) -> Vec<LegendEntry> {
        self.lines
            .iter()
            .filter_map(|l| {
                l.label
                    .as_deref()
                    .filter(|label| !label.is_empty() && !label.starts_with('_'))
                    .map(|label| LegendEntry { label: label.to_string(), style: l.style })
            })
            .collect()
    }

    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn lines(&self) -> &[Line] { &self.lines }
    pub fn vertical_markers(&self) -> &[f64] { &self.vertical_markers }
    pub fn title(&self) -> &str { &self.title }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn legend(&self) -> Option<&Legend> { self.legend.as_ref() }
    pub fn grid(&self) -> bool { self.grid }
    pub fn tick_format(&self) -> TickFormat { self.tick_format }

    pub fn view(&self) -> ViewState {
        ViewState::from_figure(self)
    }

    /// Rasterize at `dpi` into an RGBA8 frame sized to the full figure.
    pub fn render(&self, dpi: f64) -> Result<Frame> {
        render::render_frame(self, dpi, false)
    }

    /// Export a PNG at `dpi`, cropped to drawn content. Overwrites `path`;
    /// the parent directory must already exist.
    pub fn save_png(&self, path: impl AsRef<Path>, dpi: f64) -> Result<()> {
        let path = path.as_ref();
        let frame = render::render_frame(self, dpi, true)?;
        let bytes = frame.encode_png()?;
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), width = frame.width, height = frame.height, dpi, "saved figure");
        Ok(())
    }
}
