// File: crates/plot-core/tests/legend.rs
// Purpose: Label lookup, legend construction and reversal; per-series styling.

mod common;

use common::{rows, RecordingDisplay};
use plot_core::{plot_series, Figure, LineStyle, PlotOptions};

fn labels(v: &[&str]) -> Option<Vec<String>> {
    Some(v.iter().map(|s| s.to_string()).collect())
}

#[test]
fn legend_follows_draw_order() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { labels: labels(&["A", "B"]), ..Default::default() };
    plot_series(&mut fig, &mut display, rows(2, 5), &opts).unwrap();
    assert_eq!(display.shown[0].legend, Some(vec!["A".to_string(), "B".to_string()]));
}

#[test]
fn reverse_legend_flips_entries() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { labels: labels(&["A", "B"]), reverse_legend: true, ..Default::default() };
    plot_series(&mut fig, &mut display, rows(2, 5), &opts).unwrap();
    assert_eq!(fig.legend().unwrap().labels(), vec!["B", "A"]);
    // handles travel with their labels
    let entries = &fig.legend().unwrap().entries;
    assert_eq!(entries[0].style.color_slot, 1);
    assert_eq!(entries[1].style.color_slot, 0);
}

#[test]
fn short_labels_leave_series_unlabelled() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { labels: labels(&["first"]), ..Default::default() };
    plot_series(&mut fig, &mut display, rows(3, 5), &opts).unwrap();
    assert_eq!(fig.lines()[0].label.as_deref(), Some("first"));
    assert_eq!(fig.lines()[1].label, None);
    assert_eq!(fig.lines()[2].label, None);
    assert_eq!(fig.legend().unwrap().labels(), vec!["first"]);
}

#[test]
fn extra_labels_are_ignored() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { labels: labels(&["a", "b", "c", "d"]), ..Default::default() };
    plot_series(&mut fig, &mut display, rows(2, 5), &opts).unwrap();
    assert_eq!(fig.legend().unwrap().labels(), vec!["a", "b"]);
}

#[test]
fn no_labels_means_no_legend() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    plot_series(&mut fig, &mut display, rows(2, 5), &PlotOptions::default()).unwrap();
    assert!(fig.legend().is_none());
    assert!(fig.grid());
}

#[test]
fn styles_by_index() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    plot_series(&mut fig, &mut display, rows(31, 4), &PlotOptions::default()).unwrap();
    let expect = [(0, LineStyle::Solid), (10, LineStyle::Dashed), (20, LineStyle::Dotted), (30, LineStyle::DashDot)];
    for (i, line) in expect {
        let style = fig.lines()[i].style;
        assert_eq!(style.color_slot, 0, "series {i}");
        assert_eq!(style.line, line, "series {i}");
    }
    assert_eq!(fig.lines()[17].style.color_slot, 7);
}

#[test]
fn titles_are_verbatim() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions {
        title: "Run 7".into(),
        x_title: "time [s]".into(),
        y_title: "  flux ".into(),
        ..Default::default()
    };
    plot_series(&mut fig, &mut display, vec![1.0, 2.0], &opts).unwrap();
    assert_eq!(fig.title(), "Run 7");
    assert_eq!(fig.x_axis().label, "time [s]");
    assert_eq!(fig.y_axis().label, "  flux ");
}

#[test]
fn blank_and_underscore_labels_stay_out_of_legend() {
    let mut fig = Figure::new();
    let mut display = RecordingDisplay::default();
    let opts = PlotOptions { labels: labels(&["kept", "", "_hidden", "also kept"]), ..Default::default() };
    plot_series(&mut fig, &mut display, rows(4, 5), &opts).unwrap();
    // the lines keep their labels, only the legend skips them
    assert_eq!(fig.lines()[2].label.as_deref(), Some("_hidden"));
    assert_eq!(display.shown[0].legend, Some(vec!["kept".to_string(), "also kept".to_string()]));
    let styles: Vec<usize> = fig.legend().unwrap().entries.iter().map(|e| e.style.color_slot).collect();
    assert_eq!(styles, vec![0, 3]);
}
