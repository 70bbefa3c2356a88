// File: crates/plot-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic multi-series figure to an RGBA frame.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

mod common;

use common::{textless_figure, RecordingDisplay};
use plot_core::{plot_series, PlotOptions};

fn render_bytes() -> Vec<u8> {
    let mut fig = textless_figure();
    let x: Vec<f64> = (0..25).map(|i| i as f64 * 0.25).collect();
    let rows: Vec<Vec<f64>> = (0..12)
        .map(|r| x.iter().map(|v| (v + r as f64 * 0.4).sin() + r as f64 * 0.2).collect())
        .collect();
    let opts = PlotOptions {
        x: Some(x),
        x_max: Some(5.0),
        vertical_markers: Some(vec![1.0, 4.0].into()),
        labels: Some(vec!["first".into(), "second".into()]),
        ..Default::default()
    };
    plot_series(&mut fig, &mut RecordingDisplay::default(), rows, &opts).expect("plot");
    fig.render(100.0).expect("render").encode_png().expect("encode")
}

#[test]
fn golden_multi_series() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("multi_series.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
