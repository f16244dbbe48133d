//! RangeLab CLI — headless slider commands.
//!
//! Commands:
//! - `simulate` — press a thumb, move the pointer through a path, release,
//!   and print the committed `range-select` event as JSON
//! - `check-config` — validate a TOML settings file and print what it resolves to

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use rangelab_core::{
    Bounds, Labels, MemoryRenderer, PointerEvent, RangeSelect, RangeSlider, Selection,
    SettingsOverrides, SliderSettings, Thumb, TrackGeometry,
};

#[derive(Parser)]
#[command(
    name = "rangelab-cli",
    about = "RangeLab CLI — headless dual-thumb range slider"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one drag gesture and print the committed selection.
    Simulate {
        /// Thumb to press.
        #[arg(long, value_enum)]
        thumb: ThumbArg,

        /// Pointer x positions visited while the thumb is held.
        #[arg(long = "to-x", required = true, num_args = 1.., allow_negative_numbers = true)]
        to_x: Vec<f64>,

        /// Track width, in the same units as the pointer positions.
        #[arg(long, default_value_t = 100.0)]
        width: f64,

        /// Track left edge.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        left: f64,

        /// TOML settings file.
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,

        /// Also print the formatted labels after the drag.
        #[arg(long, default_value_t = false)]
        labels: bool,
    },
    /// Validate a TOML settings file.
    CheckConfig {
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThumbArg {
    Left,
    Right,
}

impl From<ThumbArg> for Thumb {
    fn from(arg: ThumbArg) -> Self {
        match arg {
            ThumbArg::Left => Thumb::Left,
            ThumbArg::Right => Thumb::Right,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            thumb,
            to_x,
            width,
            left,
            config,
            min,
            max,
            from,
            to,
            labels,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            settings.apply_overrides(SettingsOverrides {
                min,
                max,
                from,
                to,
                suffix: None,
            });
            run_simulate(&settings, thumb.into(), TrackGeometry::new(left, width), &to_x, labels)
        }
        Commands::CheckConfig { path } => run_check_config(&path),
    }
}

fn load_settings(path: Option<&Path>) -> Result<SliderSettings> {
    match path {
        Some(path) => SliderSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(SliderSettings::default()),
    }
}

fn run_simulate(
    settings: &SliderSettings,
    thumb: Thumb,
    geometry: TrackGeometry,
    path: &[f64],
    show_labels: bool,
) -> Result<()> {
    let (event, labels) = simulate(settings, thumb, geometry, path)?;

    println!("{}", serde_json::to_string_pretty(&event)?);
    if show_labels {
        println!("{} – {}", labels.from, labels.to);
    }
    Ok(())
}

/// Press `thumb`, visit every x in `path`, release. Returns the committed
/// event and the labels shown afterwards.
fn simulate(
    settings: &SliderSettings,
    thumb: Thumb,
    geometry: TrackGeometry,
    path: &[f64],
) -> Result<(RangeSelect, Labels)> {
    if !geometry.left.is_finite() {
        bail!("track left edge must be finite, got {}", geometry.left);
    }
    if !geometry.width.is_finite() || geometry.width <= 0.0 {
        bail!("track width must be positive and finite, got {}", geometry.width);
    }
    if let Some(x) = path.iter().find(|x| x.is_nan()) {
        bail!("pointer positions must be numbers, got {x}");
    }

    let mut slider = RangeSlider::new(settings.to_config(), MemoryRenderer::new())
        .context("invalid slider settings")?;

    slider.handle(PointerEvent::Down { thumb, geometry });
    for &x in path {
        slider.handle(PointerEvent::Move { x });
        debug!(x, from = slider.selection().from, to = slider.selection().to, "moved");
    }
    let Some(event) = slider.handle(PointerEvent::Up) else {
        bail!("drag did not complete");
    };
    Ok((event, slider.labels()))
}

fn run_check_config(path: &Path) -> Result<()> {
    let (settings, bounds, selection) = check_config(path)?;

    println!("Config OK: {}", path.display());
    println!("  bounds:    [{}, {}]", bounds.min(), bounds.max());
    println!("  selection: [{}, {}]", selection.from, selection.to);
    println!("  suffix:    {:?}", settings.suffix);
    Ok(())
}

fn check_config(path: &Path) -> Result<(SliderSettings, Bounds, Selection)> {
    let settings = SliderSettings::load(path).map_err(|err| {
        warn!(%err, path = %path.display(), "config rejected");
        err
    })?;
    let (bounds, selection) = settings.resolve()?;
    Ok((settings, bounds, selection))
}
