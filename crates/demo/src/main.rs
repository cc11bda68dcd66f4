// File: crates/demo/src/main.rs
// Summary: Demo "page": loads or generates daily spend, applies a range preset, mounts the chart
//          in a virtual container, simulates a resize and a hover, and writes SVG/PNG output.

mod data;
mod settings;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, ValueEnum};
use log::info;
use shadow_chart::{ChartEngine, ChartHost, ScaleTransform, Series, VirtualContainer};
use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "spend-chart", about = "Render the ShadowStack daily spend chart")]
struct Cli {
    /// `date,value` CSV; mock data is generated when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Range preset applied to the loaded series
    #[arg(short, long, value_enum, default_value_t = RangePreset::D30)]
    range: RangePreset,

    /// Days of mock data to generate
    #[arg(long, default_value_t = data::MOCK_DAYS)]
    days: usize,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 320.0)]
    height: f64,

    /// Hover the point for this day (0-based) before exporting
    #[arg(long)]
    hover_day: Option<usize>,

    /// TOML file with color, label, margins and theme
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file; `.png` needs the `png` feature
    #[arg(short, long, default_value = "target/out/spend.svg")]
    out: PathBuf,

    /// Seed for the mock generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RangePreset {
    #[value(name = "7d")]
    D7,
    #[value(name = "30d")]
    D30,
    #[value(name = "90d")]
    D90,
}

impl RangePreset {
    fn days(self) -> usize {
        match self {
            RangePreset::D7 => 7,
            RangePreset::D30 => 30,
            RangePreset::D90 => 90,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = settings.view_config().context("invalid view settings")?;

    let full = match &cli.input {
        Some(path) => data::load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            let today = Utc::now().date_naive().and_hms_opt(0, 0, 0).context("midnight")?;
            let end = Utc.from_utc_datetime(&today);
            data::generate_daily_spend(cli.days, data::MOCK_BASE, data::MOCK_VARIANCE, end, cli.seed)
        }
    };
    let series: Series = full.tail(cli.range.days());
    info!("{} of {} point(s) in range {:?}", series.len(), full.len(), cli.range);
    if series.len() < 2 {
        println!("Note: fewer than 2 points in range; the chart will be empty.");
    }

    // Mount half-size first so the resize path is exercised.
    let container = VirtualContainer::with_id("spend-trend", cli.width / 2.0, cli.height / 2.0);
    let host = ChartHost::mount_engine(
        &container,
        ChartEngine::with_theme(settings.theme()).with_id_prefix("spend-trend"),
        series.clone(),
        config,
    );
    container.resize(cli.width, cli.height);

    if let Some(day) = cli.hover_day {
        hover_day(&host, &series, day);
    }

    match cli.out.extension().and_then(|e| e.to_str()) {
        Some("png") => write_png(&host, &cli.out)?,
        _ => host.with_engine(|e| e.write_svg(&cli.out))?,
    }
    println!("Wrote {}", cli.out.display());

    host.unmount();
    Ok(())
}

/// Move the pointer onto `day`'s point and report the tooltip.
fn hover_day(host: &ChartHost, series: &Series, day: usize) {
    let Some(point) = series.get(day) else {
        println!("Note: --hover-day {day} is outside the {} point(s) in range", series.len());
        return;
    };
    let target = host.with_engine(|e| {
        let plot = e.plot_area()?;
        let (x, y) = e.scales()?;
        Some((plot.left + x.to_px(point.millis()), plot.top + y.to_px(point.value)))
    });
    let Some((px, py)) = target else { return };
    match host.pointer_move(px, py) {
        Some(f) => println!("Hover: {} {} ({:?})", f.tooltip.date_label, f.tooltip.value_label, f.tooltip.placement),
        None => println!("Hover: nothing at ({px:.1}, {py:.1})"),
    }
}

#[cfg(feature = "png")]
fn write_png(host: &ChartHost, out: &std::path::Path) -> Result<()> {
    use shadow_chart_skia::SkiaRenderer;
    let (scene, surface) = host.with_engine(|e| (e.frame(), e.theme().surface));
    SkiaRenderer::new(surface).render_to_png(&scene, out)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_host: &ChartHost, out: &std::path::Path) -> Result<()> {
    anyhow::bail!("{}: PNG output needs the `png` feature (cargo run -p shadow-chart-demo --features png)", out.display())
}
