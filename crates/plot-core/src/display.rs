// File: crates/plot-core/src/display.rs
// Summary: Display surface abstraction the plotter hands finished figures to.

use tracing::info;

use crate::error::Result;
use crate::figure::Figure;
use crate::render::Frame;

/// Where a finished figure is shown.
pub trait Display {
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }
}

/// Rasterizes into memory at the figure's display resolution and keeps the latest frame.
#[derive(Default)]
pub struct HeadlessDisplay {
    last: Option<Frame>,
    shown: usize,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    pub fn frames_shown(&self) -> usize {
        self.shown
    }
}

impl Display for HeadlessDisplay {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let frame = figure.render(figure.options().display_dpi)?;
        info!(width = frame.width, height = frame.height, "figure shown");
        self.last = Some(frame);
        self.shown += 1;
        Ok(())
    }
}
