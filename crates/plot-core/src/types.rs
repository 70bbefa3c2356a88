// File: crates/plot-core/src/types.rs
// Summary: Shared figure geometry constants (sizes in inches/points, subplot box, text sizes).

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f64 = 6.4;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f64 = 4.8;
/// Resolution used by the display surface.
pub const DISPLAY_DPI: f64 = 100.0;
/// Default export resolution.
pub const SAVE_DPI: u32 = 300;
/// Points per inch; all layout is done in points.
pub const POINTS_PER_INCH: f64 = 72.0;
/// Padding around content when cropping an export, in inches.
pub const TIGHT_PAD_IN: f64 = 0.1;

pub const FONT_SIZE: f32 = 10.0;
pub const TITLE_SIZE: f32 = 12.0;
pub const TICK_LENGTH: f32 = 3.5;
pub const SPINE_WIDTH: f32 = 0.8;
pub const GRID_WIDTH: f32 = 0.8;

/// Axes placement as fractions of the figure, measured from the bottom-left.
/// Contract: `left < right` and `bottom < top`, all within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotBox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl SubplotBox {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }
}

impl Default for SubplotBox {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.11, 0.88)
    }
}
