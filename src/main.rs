use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;

// Declare modules
mod constants;
mod domain;
mod event;
mod form;
mod handler;
mod render;
mod state;
mod store;
#[cfg(test)]
mod test_utils;
mod theme;
mod tui;
mod ui;

use crate::{
    constants::{APP_NAME, LOG_FILE, TICK_RATE},
    event::Action,
    handler::handle_event,
    state::App,
    store::Storage,
};

// lazydash version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
██╗      █████╗ ███████╗██╗   ██╗██████╗  █████╗ ███████╗██╗  ██╗
██║     ██╔══██╗╚══███╔╝╚██╗ ██╔╝██╔══██╗██╔══██╗██╔════╝██║  ██║
██║     ███████║  ███╔╝  ╚████╔╝ ██║  ██║███████║███████╗███████║
██║     ██╔══██║ ███╔╝    ╚██╔╝  ██║  ██║██╔══██║╚════██║██╔══██║
███████╗██║  ██║███████╗   ██║   ██████╔╝██║  ██║███████║██║  ██║
╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═════╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝
"#;

/// lazydash - Terminal dashboard editor
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use a different dashboard file instead of the default location
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

/// Application entry point
fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("lazydash v{VERSION}");
        println!("A terminal dashboard editor");
        return Ok(());
    }

    color_eyre::install()?;
    let _log_guard = init_logging()?;

    let storage = match cli.data {
        Some(path) => Storage::new(path),
        None => Storage::at_default_path()?,
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(storage);
    let result = run_app(&mut terminal, &mut app);

    tui::restore()?;
    result
}

/// Sets up file logging under the data directory.
///
/// Logging is skipped entirely when no data directory exists; the TUI owns
/// stdout, so there is nowhere else to write.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let Some(mut dir) = dirs::data_dir() else {
        return Ok(None);
    };
    dir.push(APP_NAME);
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

/// Main application loop: draw, poll, translate, update.
fn run_app(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if crossterm::event::poll(TICK_RATE)? {
            let event = crossterm::event::read()?;

            // Resizes redraw on the next loop iteration.
            if matches!(event, crossterm::event::Event::Resize(_, _)) {
                continue;
            }

            if let Some(action) = handle_event(app, event)
                && let Err(err) = app.update(action)
            {
                app.update(Action::ShowMessage(format!("Error: {err}")))?;
            }
        }
    }
    Ok(())
}
