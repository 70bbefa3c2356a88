// File: crates/plot-demo/src/main.rs
// Summary: Loads CSV columns as series, plots them via plot-core (optionally exporting a PNG) and shows the result in a window.

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{plot_series, theme, Figure, HeadlessDisplay, Notation, PlotOptions, RenderOptions, SeriesSet};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "window")]
mod window;

#[derive(Parser, Debug)]
#[command(name = "series-plot", version, about = "Plot CSV columns on a shared x-axis")]
struct Cli {
    /// CSV file with a header row; each column is one series
    input: PathBuf,

    /// TOML file with plot options; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the first column as the shared x-axis
    #[arg(long)]
    x_column: bool,

    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    x_max: Option<f64>,

    /// Vertical reference line (repeatable)
    #[arg(long = "vline", allow_hyphen_values = true)]
    vlines: Vec<f64>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    x_title: Option<String>,

    #[arg(long)]
    y_title: Option<String>,

    #[arg(long)]
    reverse_legend: bool,

    /// Export to <SAVE>.png
    #[arg(long)]
    save: Option<String>,

    #[arg(long)]
    dpi: Option<u32>,

    #[arg(long)]
    use_offset: bool,

    /// Tick label notation: sci or plain
    #[arg(long)]
    style: Option<Notation>,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Render in memory instead of opening a window (CI, no display server)
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut opts = match &cli.config {
        Some(path) => load_options(path)?,
        None => PlotOptions::default(),
    };

    let table = load_columns(&cli.input)
        .with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    info!(columns = table.headers.len(), rows = table.row_count(), "loaded {}", cli.input.display());
    if table.headers.is_empty() {
        anyhow::bail!("no columns found in {}", cli.input.display());
    }

    let (x, headers, columns) = table.split_x(cli.x_column);
    if x.is_some() {
        opts.x = x;
    }
    if opts.labels.is_none() {
        opts.labels = Some(headers);
    }
    apply_flags(&cli, &mut opts);

    let mut render = RenderOptions::default();
    render.theme = theme::find(&cli.theme);
    let mut figure = Figure::with_options(render);
    let series = SeriesSet::from_rows(columns);

    if use_window(&cli) {
        #[cfg(feature = "window")]
        {
            let title = if opts.title.is_empty() { cli.input.display().to_string() } else { opts.title.clone() };
            let mut display = window::WindowDisplay::new(title);
            plot_series(&mut figure, &mut display, series, &opts)?;
        }
    } else {
        let mut display = HeadlessDisplay::new();
        plot_series(&mut figure, &mut display, series, &opts)?;
        if let Some(frame) = display.last_frame() {
            println!("Rendered {}x{} frame", frame.width, frame.height);
        }
    }

    if let Some(path) = opts.png_path() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Window unless asked otherwise or there is nothing to open one on.
fn use_window(cli: &Cli) -> bool {
    if cli.headless {
        return false;
    }
    if !cfg!(feature = "window") {
        warn!("built without the window feature; rendering headless");
        return false;
    }
    let no_server = std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none();
    if cfg!(all(unix, not(target_os = "macos"))) && no_server {
        warn!("no display server found; rendering headless");
        return false;
    }
    true
}

fn load_options(path: &Path) -> Result<PlotOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Flags win over file values when given.
fn apply_flags(cli: &Cli, opts: &mut PlotOptions) {
    if cli.x_min.is_some() { opts.x_min = cli.x_min; }
    if cli.x_max.is_some() { opts.x_max = cli.x_max; }
    if !cli.vlines.is_empty() { opts.vertical_markers = Some(cli.vlines.clone().into()); }
    if let Some(t) = &cli.title { opts.title = t.clone(); }
    if let Some(t) = &cli.x_title { opts.x_title = t.clone(); }
    if let Some(t) = &cli.y_title { opts.y_title = t.clone(); }
    if cli.reverse_legend { opts.reverse_legend = true; }
    if let Some(s) = &cli.save { opts.save_path = s.clone(); }
    if let Some(d) = cli.dpi { opts.dpi = d; }
    if cli.use_offset { opts.use_offset = true; }
    if let Some(n) = cli.style { opts.notation = n; }
}

/// Column-major numeric table read from CSV.
struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Optionally peel off the first column as x; returns (x, labels, series).
    fn split_x(self, x_column: bool) -> (Option<Vec<f64>>, Vec<String>, Vec<Vec<f64>>) {
        let Table { mut headers, mut columns } = self;
        if x_column && !columns.is_empty() {
            headers.remove(0);
            let x = columns.remove(0);
            (Some(x), headers, columns)
        } else {
            (None, headers, columns)
        }
    }
}

/// Load every column as f64; unparsable cells become NaN so rows stay aligned.
fn load_columns(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let mut columns = vec![Vec::new(); headers.len()];
    let mut bad_cells = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        for (i, col) in columns.iter_mut().enumerate() {
            let v = rec.get(i).and_then(|s| s.parse::<f64>().ok());
            if v.is_none() {
                bad_cells += 1;
            }
            col.push(v.unwrap_or(f64::NAN));
        }
    }
    if bad_cells > 0 {
        warn!(bad_cells, "non-numeric cells read as gaps");
    }
    Ok(Table { headers, columns })
}
