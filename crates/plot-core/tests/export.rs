// File: crates/plot-core/tests/export.rs
// Purpose: PNG export (path, resolution, tight crop) and in-memory display rendering.

mod common;

use common::{out_dir, rows, textless_figure, RecordingDisplay};
use plot_core::{plot_series, HeadlessDisplay, PlotError, PlotOptions};

#[test]
fn save_path_gets_png_extension() {
    let dir = out_dir("export_named");
    let base = dir.join("out");
    let png = dir.join("out.png");
    std::fs::remove_file(&png).ok();

    let mut fig = textless_figure();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { save_path: base.to_string_lossy().into_owned(), dpi: 50, ..Default::default() };
    plot_series(&mut fig, &mut display, rows(3, 20), &opts).expect("plot and save");

    let bytes = std::fs::read(&png).expect("out.png exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    assert!(!base.exists(), "extension must be appended, not replaced");
}

#[test]
fn missing_directory_fails_export_without_showing() {
    let dir = out_dir("export_missing");
    let missing = dir.join("not_created");
    std::fs::remove_dir_all(&missing).ok();

    let mut fig = textless_figure();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { save_path: missing.join("out").to_string_lossy().into_owned(), dpi: 30, ..Default::default() };
    let err = plot_series(&mut fig, &mut display, rows(1, 5), &opts).unwrap_err();

    assert!(matches!(err, PlotError::Io(_)), "{err:?}");
    assert!(!missing.exists(), "export must not create directories");
    assert!(display.shown.is_empty());
}

#[test]
fn empty_save_path_writes_nothing() {
    let dir = out_dir("export_empty");
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();

    let mut fig = textless_figure();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { save_path: String::new(), ..Default::default() };
    assert_eq!(opts.png_path(), None);
    plot_series(&mut fig, &mut display, rows(2, 8), &opts).unwrap();

    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    assert!(!std::path::Path::new(".png").exists());
}

#[test]
fn export_is_cropped_to_content() {
    let dir = out_dir("export_tight");
    let base = dir.join("tight");
    let mut fig = textless_figure();
    let mut display = RecordingDisplay::default();
    let dpi = 40;
    let opts = PlotOptions { save_path: base.to_string_lossy().into_owned(), dpi, ..Default::default() };
    plot_series(&mut fig, &mut display, rows(1, 30), &opts).unwrap();

    let img = image::open(dir.join("tight.png")).expect("decode png").to_rgba8();
    let full_w = (6.4 * dpi as f64).ceil() as u32;
    let full_h = (4.8 * dpi as f64).ceil() as u32;
    assert!(img.width() < full_w && img.height() < full_h, "{}x{}", img.width(), img.height());
    // padding keeps a background border
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn tight_export_keeps_outside_legend() {
    let dir = out_dir("export_legend");
    let with = dir.join("with_legend");
    let without = dir.join("without_legend");
    let data = rows(2, 10);
    let dpi = 40;

    let labelled = PlotOptions {
        save_path: with.to_string_lossy().into_owned(),
        labels: Some(vec!["alpha".into(), "beta".into()]),
        dpi,
        ..Default::default()
    };
    let plain = PlotOptions { save_path: without.to_string_lossy().into_owned(), dpi, ..Default::default() };

    let mut display = RecordingDisplay::default();
    plot_series(&mut textless_figure(), &mut display, data.clone(), &labelled).unwrap();
    plot_series(&mut textless_figure(), &mut display, data, &plain).unwrap();

    let w_with = image::open(dir.join("with_legend.png")).unwrap().width();
    let w_without = image::open(dir.join("without_legend.png")).unwrap().width();
    assert!(w_with > w_without, "legend should widen the export ({w_with} vs {w_without})");
}

#[test]
fn headless_display_renders_at_display_dpi() {
    let mut fig = textless_figure();
    let mut display = HeadlessDisplay::new();
    let opts = PlotOptions {
        vertical_markers: Some(vec![3.0, 7.0].into()),
        labels: Some(vec!["only".into()]),
        ..Default::default()
    };
    plot_series(&mut fig, &mut display, rows(2, 10), &opts).unwrap();

    let frame = display.last_frame().expect("frame shown");
    assert_eq!((frame.width, frame.height), (640, 480));
    assert_eq!(frame.pixels.len(), 640 * 480 * 4);
    assert_eq!(display.frames_shown(), 1);
    // figure corner is plain background
    assert_eq!(frame.pixel(0, 0), [255, 255, 255, 255]);
}

#[test]
fn full_render_with_text_succeeds() {
    let mut fig = plot_core::Figure::new();
    let mut display = HeadlessDisplay::new();
    let opts = PlotOptions {
        title: "all decorations".into(),
        x_title: "x".into(),
        y_title: "y".into(),
        labels: Some((0..39).map(|i| format!("s{i}")).collect()),
        reverse_legend: true,
        vertical_markers: Some(5.0_f64.into()),
        use_offset: true,
        ..Default::default()
    };
    plot_series(&mut fig, &mut display, rows(39, 12), &opts).expect("render with text");
    assert!(display.last_frame().is_some());
}
