// File: crates/plot-core/src/style.rs
// Summary: Per-series stroke styling: 10-slot color cycle crossed with 4 line styles.

use skia_safe as skia;

/// Number of colors in the cycle before the line style advances.
pub const PALETTE_SIZE: usize = 10;

/// Stroke width of data lines, in points.
pub const LINE_WIDTH: f32 = 1.5;

/// The "tab10" cycle, slots C0..C9.
pub const PALETTE: [(u8, u8, u8); PALETTE_SIZE] = [
    (0x1f, 0x77, 0xb4), // blue
    (0xff, 0x7f, 0x0e), // orange
    (0x2c, 0xa0, 0x2c), // green
    (0xd6, 0x27, 0x28), // red
    (0x94, 0x67, 0xbd), // purple
    (0x8c, 0x56, 0x4b), // brown
    (0xe3, 0x77, 0xc2), // pink
    (0x7f, 0x7f, 0x7f), // gray
    (0xbc, 0xbd, 0x22), // olive
    (0x17, 0xbe, 0xcf), // cyan
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Style for a decade of series (`index / 10`).
    pub fn for_decade(decade: usize) -> Self {
        match decade {
            0 => LineStyle::Solid,
            1 => LineStyle::Dashed,
            2 => LineStyle::Dotted,
            // Decades past 3 need more than 39 rows, which validation rejects.
            _ => LineStyle::DashDot,
        }
    }

    /// On/off dash intervals in points for a stroke of `width`, or `None` when solid.
    pub fn dash_intervals(&self, width: f32) -> Option<Vec<f32>> {
        let unit: &[f32] = match self {
            LineStyle::Solid => return None,
            LineStyle::Dashed => &[3.7, 1.6],
            LineStyle::Dotted => &[1.0, 1.65],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        Some(unit.iter().map(|v| v * width).collect())
    }

    /// Skia path effect drawing this style at `width`.
    pub fn path_effect(&self, width: f32) -> Option<skia::PathEffect> {
        let intervals = self.dash_intervals(width)?;
        skia::PathEffect::dash(&intervals, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color_slot: usize,
    pub line: LineStyle,
}

impl SeriesStyle {
    pub fn for_index(index: usize) -> Self {
        Self {
            color_slot: index % PALETTE_SIZE,
            line: LineStyle::for_decade(index / PALETTE_SIZE),
        }
    }

    pub fn color(&self) -> skia::Color {
        let (r, g, b) = PALETTE[self.color_slot % PALETTE_SIZE];
        skia::Color::from_rgb(r, g, b)
    }

    /// Stroke paint in point units.
    pub fn stroke(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(LINE_WIDTH);
        paint.set_color(self.color());
        if let Some(effect) = self.line.path_effect(LINE_WIDTH) {
            paint.set_path_effect(effect);
        }
        paint
    }
}
