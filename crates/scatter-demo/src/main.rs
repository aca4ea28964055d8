// File: crates/scatter-demo/src/main.rs
// Summary: Demo seeds (or loads) points, fits the regression line and renders PNG and optional SVG output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use scatter_core::{correlation, svg, theme, Action, ChartView, Config, InputController, PointStore, RegressionLine};
use scatter_render_skia::{RenderOptions, SkiaRenderer};

#[derive(Debug, Parser)]
#[command(name = "scatter-demo", about = "Render a scatterplot with its least-squares line")]
struct Args {
    /// CSV point file with an `x,y` header; random points are seeded when absent
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of random points to seed
    #[arg(long)]
    points: Option<usize>,
    #[arg(long)]
    min: Option<f64>,
    #[arg(long)]
    max: Option<f64>,
    /// RNG seed for reproducible points
    #[arg(long)]
    seed: Option<u64>,
    /// Draw the regression line
    #[arg(long)]
    line: bool,
    /// Draw residuals (implies --line)
    #[arg(long)]
    residuals: bool,
    #[arg(long, default_value = "target/out/scatter.png")]
    out: PathBuf,
    #[arg(long)]
    svg: Option<PathBuf>,
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let mut store = match &args.input {
        Some(path) => {
            PointStore::load_csv(path).with_context(|| format!("failed to load points from '{}'", path.display()))?
        }
        None => {
            let mut store = PointStore::new();
            let seeded = match args.seed {
                Some(seed) => store.seed_random_with(&mut StdRng::seed_from_u64(seed), cfg.seed_count, cfg.seed_min, cfg.seed_max),
                None => store.seed_random_between(cfg.seed_count, cfg.seed_min, cfg.seed_max),
            };
            seeded.context("failed to seed points")?;
            store
        }
    };
    println!("Loaded {} points", store.len());

    let fit = RegressionLine::fit(store.points());
    println!(
        "r = {:.4}, slope = {:.4}, intercept = {:.4}",
        correlation(store.points()),
        fit.slope,
        fit.intercept
    );

    let mut view = ChartView::new(cfg.width, cfg.height, cfg.insets).with_style(cfg.view_style());
    view.refresh(store.points());
    let controller = InputController::new();
    if args.residuals {
        controller.apply(Action::DrawResiduals, &mut store, &mut view);
    } else if args.line {
        controller.apply(Action::DrawLine, &mut store, &mut view);
    }

    let theme = theme::find(&cfg.theme);
    let opts = RenderOptions { width: cfg.width as i32, height: cfg.height as i32, theme, draw_labels: true };
    SkiaRenderer::new().render_to_png(view.surface(), &opts, &args.out)?;
    println!("Wrote {}", args.out.display());

    if let Some(svg_path) = &args.svg {
        svg::write_svg(view.surface(), cfg.width, cfg.height, &theme, svg_path)?;
        println!("Wrote {}", svg_path.display());
    }
    Ok(())
}

/// Config file first, then command-line overrides.
fn load_config(args: &Args) -> Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };
    if let Some(n) = args.points { cfg.seed_count = n; }
    if let Some(min) = args.min { cfg.seed_min = min; }
    if let Some(max) = args.max { cfg.seed_max = max; }
    if let Some(w) = args.width { cfg.width = w; }
    if let Some(h) = args.height { cfg.height = h; }
    if let Some(t) = &args.theme { cfg.theme = t.clone(); }
    info!(?cfg, "effective config");
    Ok(cfg)
}
