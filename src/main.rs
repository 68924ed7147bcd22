//! Emptyset demo
//!
//! Binary entry point for the interactive demo.

use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use emptyset::app::{App, Options};

/// Environment variable holding the log filter
const LOG_ENV: &str = "EMPTYSET_LOG";

/// Interactive demo of empty data set overlays
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of list sections
    #[arg(long, default_value_t = 1)]
    sections: usize,

    /// Items present at startup
    #[arg(long, default_value_t = 0)]
    items: usize,

    /// Force the empty state to display even when items exist
    #[arg(long)]
    force: bool,

    /// Start on the grid view
    #[arg(long)]
    grid: bool,

    /// Write logs to this file (filter with EMPTYSET_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let app = App::new(Options {
        sections: cli.sections,
        items: cli.items,
        force: cli.force,
        grid: cli.grid,
    })?;

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = run(terminal, app);
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();
    result
}

/// Send logs to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> color_eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    tracing::info!(path = %path.display(), "logging enabled");
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with a 200ms timeout so the overlay can animate and finish its
/// fade-in while no input arrives.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => app.on_mouse_event(mouse),
            _ => {}
        }
    } else {
        app.on_tick();
    }
    Ok(())
}
