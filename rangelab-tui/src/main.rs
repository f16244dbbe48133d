//! RangeLab — terminal host for a dual-thumb range slider.
//!
//! Drag either thumb with the mouse; releasing commits the selection to the
//! log. Keys: q quit, r remount, x destroy, c clear log.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rangelab_core::{SettingsOverrides, SliderSettings, Tooltip};
use rangelab_tui::{input, ui, AppState};

#[derive(Parser)]
#[command(name = "rangelab", about = "RangeLab — drag a dual-thumb range slider in the terminal")]
struct Args {
    /// TOML settings file (min, max, suffix, [selected]).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lower bound. Overrides the config file.
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Upper bound. Overrides the config file.
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Initial selection start.
    #[arg(long, allow_negative_numbers = true)]
    from: Option<f64>,

    /// Initial selection end.
    #[arg(long, allow_negative_numbers = true)]
    to: Option<f64>,

    /// Label suffix, e.g. " $".
    #[arg(long)]
    suffix: Option<String>,

    /// Log file. The terminal is owned by the UI, so logs go here.
    #[arg(long, default_value = "rangelab.log")]
    log_file: PathBuf,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            min: self.min,
            max: self.max,
            from: self.from,
            to: self.to,
            suffix: self.suffix.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    let mut settings = match &args.config {
        Some(path) => SliderSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => SliderSettings::default(),
    };
    settings.apply_overrides(args.overrides());
    settings.validate().context("invalid slider settings")?;
    info!(?settings, "starting rangelab");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // The one tooltip for the whole UI.
    let tooltip = Tooltip::new();
    let mut app = AppState::new(settings, tooltip)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    app.destroy_slider();
    app.tooltip.destroy();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(commits = app.commits.len(), "rangelab exited");
    result
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app);
        })?;

        // 2. Deliver committed events to the host
        app.drain_host_events();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
