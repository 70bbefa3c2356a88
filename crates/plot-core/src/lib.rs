// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the series plotter, figure model and rendering API.

pub mod error;
pub mod series;
pub mod window;
pub mod style;
pub mod theme;
pub mod axis;
pub mod grid;
pub mod format;
pub mod legend;
pub mod view;
pub mod types;
pub mod geometry;
pub mod figure;
pub mod text;
pub mod render;
pub mod display;
pub mod plot;

pub use error::{PlotError, Result, MAX_SERIES};
pub use series::{Markers, SeriesSet};
pub use window::DisplayWindow;
pub use style::{LineStyle, SeriesStyle};
pub use theme::Theme;
pub use axis::Axis;
pub use format::{Notation, TickFormat};
pub use legend::{Legend, LegendEntry};
pub use view::ViewState;
pub use figure::{Figure, Line};
pub use render::{Frame, RenderOptions};
pub use display::{Display, HeadlessDisplay};
pub use plot::{plot_series, PlotOptions};
