// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for figure chrome (background, spines, grid, text, legend frame).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_edge: skia::Color,
    pub marker: skia::Color,
}

impl Theme {
    /// White figure, black spines, light gray grid.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            marker: skia::Color::from_argb(255, 255, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
            legend_edge: skia::Color::from_argb(204, 90, 90, 100),
            marker: skia::Color::from_argb(255, 255, 64, 64),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
