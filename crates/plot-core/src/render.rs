// File: crates/plot-core/src/render.rs
// Summary: Headless rasterization of a Figure with Skia CPU raster surfaces, tight cropping and PNG encoding.

use image::ImageEncoder;
use skia_safe as skia;
use tracing::debug;

use crate::error::{PlotError, Result};
use crate::figure::Figure;
use crate::format::TickLabels;
use crate::geometry::RectI32;
use crate::style::{LineStyle, LINE_WIDTH};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::*;
use crate::view::ViewState;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width_in: f64,
    pub height_in: f64,
    /// Resolution of the display surface (exports pass their own).
    pub display_dpi: f64,
    pub subplot: SubplotBox,
    pub theme: Theme,
    /// Draw text (titles, tick labels, legend labels). Off for pixel-stable tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_in: FIG_WIDTH_IN,
            height_in: FIG_HEIGHT_IN,
            display_dpi: DISPLAY_DPI,
            subplot: SubplotBox::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// Row-major, unpremultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba.iter().copied().cycle().take(width as usize * height as usize * 4).collect();
        Self { width, height, pixels }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    /// Smallest rectangle holding every pixel that differs from `background`.
    pub fn content_bounds(&self, background: [u8; 4]) -> Option<RectI32> {
        let mut bounds: Option<RectI32> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) == background {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                bounds = Some(match bounds {
                    None => RectI32::from_ltrb(x, y, x + 1, y + 1),
                    Some(b) => b.include(x, y),
                });
            }
        }
        bounds
    }

    /// Copy `rect` out of this frame; parts outside the frame become `background`.
    pub fn crop(&self, rect: RectI32, background: [u8; 4]) -> Frame {
        let w = rect.width().max(0) as u32;
        let h = rect.height().max(0) as u32;
        let mut out = Frame::filled(w, h, background);
        for oy in 0..h {
            let sy = rect.top + oy as i32;
            if sy < 0 || sy >= self.height as i32 {
                continue;
            }
            let sx0 = rect.left.max(0);
            let sx1 = rect.right.min(self.width as i32);
            if sx1 <= sx0 {
                continue;
            }
            let src = (sy as usize * self.width as usize + sx0 as usize) * 4;
            let dst = (oy as usize * w as usize + (sx0 - rect.left) as usize) * 4;
            let n = (sx1 - sx0) as usize * 4;
            out.pixels[dst..dst + n].copy_from_slice(&self.pixels[src..src + n]);
        }
        out
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(&self.pixels, self.width, self.height, image::ExtendedColorType::Rgba8)
            .map_err(|e| PlotError::Render(format!("encode PNG failed: {e}")))?;
        Ok(out)
    }
}

/// Figure geometry in points.
struct Layout {
    canvas_w: f32,
    canvas_h: f32,
    plot: skia::Rect,
    legend: Option<skia::Rect>,
}

// Legend metrics, in units of the font size.
const LEGEND_BORDER_PAD: f32 = 0.4;
const LEGEND_LABEL_SPACING: f32 = 0.5;
const LEGEND_HANDLE_LENGTH: f32 = 2.0;
const LEGEND_HANDLE_TEXT_PAD: f32 = 0.8;
const LEGEND_AXES_PAD: f32 = 0.5;
const LINE_HEIGHT: f32 = 1.2;

/// Rasterize `figure` at `dpi`. With `tight`, the canvas grows to hold an
/// outside legend and the result is cropped to content plus padding.
pub(crate) fn render_frame(figure: &Figure, dpi: f64, tight: bool) -> Result<Frame> {
    let opts = figure.options();
    let theme = opts.theme;
    let shaper = opts.draw_labels.then(TextShaper::new);
    let layout = layout(figure, shaper.as_ref(), tight);

    let scale = (dpi / POINTS_PER_INCH) as f32;
    let width = to_pixels(layout.canvas_w, dpi);
    let height = to_pixels(layout.canvas_h, dpi);
    debug!(width, height, dpi, tight, lines = figure.lines().len(), "rasterizing figure");

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| PlotError::Render("failed to create raster surface".into()))?;
    let canvas = surface.canvas();
    canvas.clear(theme.background);
    canvas.scale((scale, scale));

    let view = figure.view();
    let plot = layout.plot;
    let x_ticks = figure.x_axis().tick_values(view.x_min, view.x_max);
    let y_ticks = figure.y_axis().tick_values(view.y_min, view.y_max);
    let map = Mapper { view, plot };

    if figure.grid() {
        draw_grid(canvas, &map, &x_ticks, &y_ticks, &theme);
    }

    canvas.save();
    canvas.clip_rect(plot, skia::ClipOp::Intersect, true);
    draw_lines(canvas, figure, &map);
    draw_markers(canvas, figure, &map, &theme);
    canvas.restore();

    draw_spines(canvas, &map, &x_ticks, &y_ticks, &theme);

    let format = figure.tick_format();
    let x_labels = format.format(&x_ticks, view.x_min, view.x_max);
    let y_labels = format.format(&y_ticks, view.y_min, view.y_max);
    if let Some(shaper) = &shaper {
        draw_text(canvas, shaper, figure, &map, (x_ticks.as_slice(), &x_labels), (y_ticks.as_slice(), &y_labels), &theme);
    }
    if let (Some(legend), Some(frame)) = (figure.legend(), layout.legend) {
        draw_legend(canvas, shaper.as_ref(), legend, frame, &theme);
    }

    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(PlotError::Render("failed to read back raster surface".into()));
    }
    let frame = Frame { width: width as u32, height: height as u32, pixels };
    if !tight {
        return Ok(frame);
    }

    let bg = rgba(theme.background);
    let pad = (TIGHT_PAD_IN * dpi).round() as i32;
    Ok(match frame.content_bounds(bg) {
        Some(bounds) => frame.crop(bounds.inflate(pad), bg),
        None => frame,
    })
}

/// Points to whole pixels, absorbing f32 noise so 6.4in at 100dpi is 640, not 641.
fn to_pixels(points: f32, dpi: f64) -> i32 {
    (f64::from(points) * dpi / POINTS_PER_INCH - 1e-3).ceil().max(1.0) as i32
}

fn rgba(c: skia::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

fn text_width(shaper: Option<&TextShaper>, text: &str, size: f32) -> f32 {
    match shaper {
        Some(s) => s.measure_width(text, size),
        // Rough advance when text is not drawn, keeps layout stable.
        None => text.chars().count() as f32 * size * 0.6,
    }
}

fn layout(figure: &Figure, shaper: Option<&TextShaper>, tight: bool) -> Layout {
    let opts = figure.options();
    let fig_w = (opts.width_in * POINTS_PER_INCH) as f32;
    let fig_h = (opts.height_in * POINTS_PER_INCH) as f32;
    let sub = opts.subplot;
    let plot = skia::Rect::from_ltrb(
        sub.left as f32 * fig_w,
        (1.0 - sub.top as f32) * fig_h,
        sub.right as f32 * fig_w,
        (1.0 - sub.bottom as f32) * fig_h,
    );

    let legend = figure.legend().filter(|l| !l.is_empty()).map(|l| {
        let label_w = l
            .entries
            .iter()
            .map(|e| text_width(shaper, &e.label, FONT_SIZE))
            .fold(0.0, f32::max);
        let n = l.entries.len() as f32;
        let w = FONT_SIZE * (2.0 * LEGEND_BORDER_PAD + LEGEND_HANDLE_LENGTH + LEGEND_HANDLE_TEXT_PAD) + label_w;
        let h = FONT_SIZE * (2.0 * LEGEND_BORDER_PAD + n * LINE_HEIGHT + (n - 1.0) * LEGEND_LABEL_SPACING);
        let left = plot.right + FONT_SIZE * LEGEND_AXES_PAD;
        let top = plot.center_y() - h * 0.5;
        skia::Rect::from_ltrb(left, top, left + w, top + h)
    });

    let canvas_w = match (tight, legend) {
        (true, Some(frame)) => fig_w.max(frame.right + FONT_SIZE),
        _ => fig_w,
    };
    Layout { canvas_w, canvas_h: fig_h, plot, legend }
}

/// Data-to-point mapping for the plot rectangle.
struct Mapper {
    view: ViewState,
    plot: skia::Rect,
}

impl Mapper {
    fn sx(&self, x: f64) -> f32 {
        let span = self.view.x_span().max(1e-12);
        self.plot.left + ((x - self.view.x_min) / span) as f32 * self.plot.width()
    }

    fn sy(&self, y: f64) -> f32 {
        let span = self.view.y_span().max(1e-12);
        self.plot.bottom - ((y - self.view.y_min) / span) as f32 * self.plot.height()
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, map: &Mapper, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, GRID_WIDTH);
    let p = map.plot;
    for &t in x_ticks {
        let x = map.sx(t);
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
    for &t in y_ticks {
        let y = map.sy(t);
        canvas.draw_line((p.left, y), (p.right, y), &paint);
    }
}

fn draw_lines(canvas: &skia::Canvas, figure: &Figure, map: &Mapper) {
    for line in figure.lines() {
        let mut path = skia::Path::new();
        let mut pen_down = false;
        for (&x, &y) in line.x.iter().zip(&line.y) {
            if !(x.is_finite() && y.is_finite()) {
                // gaps break the stroke
                pen_down = false;
                continue;
            }
            let pt = (map.sx(x), map.sy(y));
            if pen_down {
                path.line_to(pt);
            } else {
                path.move_to(pt);
                pen_down = true;
            }
        }
        canvas.draw_path(&path, &line.style.stroke());
    }
}

fn draw_markers(canvas: &skia::Canvas, figure: &Figure, map: &Mapper, theme: &Theme) {
    let mut paint = stroke_paint(theme.marker, LINE_WIDTH);
    if let Some(effect) = LineStyle::Dotted.path_effect(LINE_WIDTH) {
        paint.set_path_effect(effect);
    }
    for &x in figure.vertical_markers() {
        let px = map.sx(x);
        canvas.draw_line((px, map.plot.top), (px, map.plot.bottom), &paint);
    }
}

fn draw_spines(canvas: &skia::Canvas, map: &Mapper, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, SPINE_WIDTH);
    canvas.draw_rect(map.plot, &paint);
    let p = map.plot;
    for &t in x_ticks {
        let x = map.sx(t);
        canvas.draw_line((x, p.bottom), (x, p.bottom + TICK_LENGTH), &paint);
    }
    for &t in y_ticks {
        let y = map.sy(t);
        canvas.draw_line((p.left - TICK_LENGTH, y), (p.left, y), &paint);
    }
}

fn draw_text(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    figure: &Figure,
    map: &Mapper,
    x: (&[f64], &TickLabels),
    y: (&[f64], &TickLabels),
    theme: &Theme,
) {
    let p = map.plot;
    let color = theme.text;
    let label_pad = TICK_LENGTH + 3.5;
    let row = FONT_SIZE * LINE_HEIGHT;

    // x tick labels, offset text, title of the axis
    let x_label_y = p.bottom + label_pad + row * 0.5;
    for (&t, label) in x.0.iter().zip(&x.1.labels) {
        shaper.draw(canvas, label, map.sx(t), x_label_y, FONT_SIZE, color, Align::Center);
    }
    let x_title_y = x_label_y + row;
    if let Some(offset) = &x.1.offset_text {
        shaper.draw(canvas, offset, p.right, x_title_y, FONT_SIZE, color, Align::Right);
    }
    shaper.draw(canvas, &figure.x_axis().label, p.center_x(), x_title_y + 4.0, FONT_SIZE, color, Align::Center);

    // y tick labels, offset text, rotated title
    let mut widest = 0.0f32;
    for (&t, label) in y.0.iter().zip(&y.1.labels) {
        widest = widest.max(shaper.measure_width(label, FONT_SIZE));
        shaper.draw(canvas, label, p.left - label_pad, map.sy(t), FONT_SIZE, color, Align::Right);
    }
    if let Some(offset) = &y.1.offset_text {
        shaper.draw(canvas, offset, p.left, p.top - row * 0.5 - 2.0, FONT_SIZE, color, Align::Left);
    }
    let y_title_x = p.left - label_pad - widest - 4.0 - row * 0.5;
    shaper.draw_vertical(canvas, &figure.y_axis().label, y_title_x, p.center_y(), FONT_SIZE, color);

    shaper.draw(canvas, figure.title(), p.center_x(), p.top - 6.0 - TITLE_SIZE * 0.6, TITLE_SIZE, color, Align::Center);
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    legend: &crate::legend::Legend,
    frame: skia::Rect,
    theme: &Theme,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(frame, 2.0, 2.0, &fill);
    canvas.draw_round_rect(frame, 2.0, 2.0, &stroke_paint(theme.legend_edge, SPINE_WIDTH));

    let row = FONT_SIZE * LINE_HEIGHT;
    let step = row + FONT_SIZE * LEGEND_LABEL_SPACING;
    let handle_x0 = frame.left + FONT_SIZE * LEGEND_BORDER_PAD;
    let handle_x1 = handle_x0 + FONT_SIZE * LEGEND_HANDLE_LENGTH;
    let text_x = handle_x1 + FONT_SIZE * LEGEND_HANDLE_TEXT_PAD;
    let mut yc = frame.top + FONT_SIZE * LEGEND_BORDER_PAD + row * 0.5;
    for entry in &legend.entries {
        canvas.draw_line((handle_x0, yc), (handle_x1, yc), &entry.style.stroke());
        if let Some(shaper) = shaper {
            shaper.draw(canvas, &entry.label, text_x, yc, FONT_SIZE, theme.text, Align::Left);
        }
        yc += step;
    }
}
