// File: crates/plot-demo/src/window.rs
// Summary: On-screen display: renders the figure to RGBA and blits it into a winit window via softbuffer (CPU).

use std::num::NonZeroU32;

use plot_core::{Display, Figure, Frame, PlotError, Result};
use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Shows each figure in its own window and blocks until that window is
/// closed (close button, Esc or Q). The figure is re-rendered to fit on resize.
pub struct WindowDisplay {
    event_loop: EventLoop<()>,
    title: String,
}

impl WindowDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self { event_loop: EventLoop::new(), title: title.into() }
    }
}

impl Display for WindowDisplay {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let opts = figure.options();
        let initial = PhysicalSize::new(
            (opts.width_in * opts.display_dpi).round() as u32,
            (opts.height_in * opts.display_dpi).round() as u32,
        );
        let window = WindowBuilder::new()
            .with_title(self.title.as_str())
            .with_inner_size(initial)
            .build(&self.event_loop)
            .map_err(surface_err)?;
        let context = unsafe { softbuffer::Context::new(&window) }.map_err(surface_err)?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(surface_err)?;
        info!(width = initial.width, height = initial.height, "showing figure; close the window to continue");

        let bg = opts.theme.background;
        let background = pack([bg.r(), bg.g(), bg.b(), bg.a()]);
        let mut cached: Option<(PhysicalSize<u32>, Frame)> = None;
        let mut failure: Option<PlotError> = None;

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                                ..
                            },
                        ..
                    } => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(_) => window.request_redraw(),
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    let size = window.inner_size();
                    if let Err(e) = present(&mut surface, figure, &mut cached, size, background) {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Render (or reuse) a frame for `size` and push it to the window.
fn present(
    surface: &mut softbuffer::Surface,
    figure: &Figure,
    cached: &mut Option<(PhysicalSize<u32>, Frame)>,
    size: PhysicalSize<u32>,
    background: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimized
        return Ok(());
    };
    if cached.as_ref().map_or(true, |(s, _)| *s != size) {
        let opts = figure.options();
        let dpi = fit_dpi(opts.width_in, opts.height_in, size.width, size.height);
        debug!(width = size.width, height = size.height, dpi, "re-rendering for window");
        *cached = Some((size, figure.render(dpi)?));
    }
    let Some((_, frame)) = cached.as_ref() else {
        return Ok(());
    };

    surface.resize(w, h).map_err(surface_err)?;
    let mut buffer = surface.buffer_mut().map_err(surface_err)?;
    blit(frame, &mut buffer, size.width, size.height, background);
    buffer.present().map_err(surface_err)
}

/// Largest dpi at which a `width_in` x `height_in` figure fits `width` x `height` pixels.
fn fit_dpi(width_in: f64, height_in: f64, width: u32, height: u32) -> f64 {
    (f64::from(width) / width_in).min(f64::from(height) / height_in).max(1.0)
}

/// Center `frame` in a `width` x `height` buffer of 0RGB words, background elsewhere.
fn blit(frame: &Frame, buffer: &mut [u32], width: u32, height: u32, background: u32) {
    let len = (width as usize * height as usize).min(buffer.len());
    let buffer = &mut buffer[..len];
    buffer.fill(background);

    let dx = width.saturating_sub(frame.width) / 2;
    let dy = height.saturating_sub(frame.height) / 2;
    let cols = frame.width.min(width - dx) as usize;
    let rows = frame.height.min(height - dy);
    for y in 0..rows {
        let dst = ((y + dy) as usize * width as usize) + dx as usize;
        if dst + cols > len {
            break;
        }
        let src = y as usize * frame.width as usize * 4;
        let row = frame.pixels[src..src + cols * 4].chunks_exact(4);
        for (out, px) in buffer[dst..dst + cols].iter_mut().zip(row) {
            *out = pack([px[0], px[1], px[2], px[3]]);
        }
    }
}

/// RGBA8 to softbuffer's 0RGB word; alpha is dropped (frames are opaque).
fn pack([r, g, b, _]: [u8; 4]) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

fn surface_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Surface(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_is_zero_rgb() {
        assert_eq!(pack([0x12, 0x34, 0x56, 0xff]), 0x0012_3456);
    }

    #[test]
    fn fit_keeps_aspect() {
        // 6.4x4.8in into a wide 1280x480 window: height limits
        assert!((fit_dpi(6.4, 4.8, 1280, 480) - 100.0).abs() < 1e-9);
        // and width limits when tall
        assert!((fit_dpi(6.4, 4.8, 640, 960) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn blit_centers_and_fills() {
        let mut frame = Frame::filled(2, 1, [255, 0, 0, 255]);
        frame.pixels[4..8].copy_from_slice(&[0, 0, 255, 255]);
        let mut buf = vec![0u32; 4 * 3];
        blit(&frame, &mut buf, 4, 3, 0x00ff_ffff);
        // row 1, columns 1..3 carry the frame
        assert_eq!(&buf[4..8], &[0x00ff_ffff, 0x00ff_0000, 0x0000_00ff, 0x00ff_ffff]);
        assert!(buf[..4].iter().chain(&buf[8..]).all(|&p| p == 0x00ff_ffff));
    }

    #[test]
    fn blit_clips_oversized_frames() {
        let frame = Frame::filled(5, 4, [0, 255, 0, 255]);
        let mut buf = vec![0u32; 3 * 2];
        blit(&frame, &mut buf, 3, 2, 0);
        assert!(buf.iter().all(|&p| p == 0x0000_ff00));
    }
}
