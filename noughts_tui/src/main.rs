//! noughts — two-player tic-tac-toe for the terminal.

#![warn(missing_docs)]

mod controller;
mod screen;
mod screens;
mod store;
mod theme;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetSize,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use controller::AppController;
use store::Store;

/// Two-player tic-tac-toe at one keyboard.
#[derive(Debug, Parser)]
#[command(name = "noughts", version, about)]
struct Cli {
    /// Directory for the settings, score, and log files (default: ~/.noughts).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::open(cli.data_dir);

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = init_tracing(&store);
    info!("Starting noughts");

    let mut controller = AppController::new(store);

    let mut stdout = io::stdout();
    // Apply the stored window size; some terminal emulators ignore this.
    let (cols, rows) = controller.preferred_window_size();
    let _ = execute!(stdout, SetSize(cols, rows));

    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Routes all tracing output to the log file under the data directory.
///
/// Stdout belongs to the TUI, so the log file is the only sink; it doubles
/// as the error log, with every line timestamped by the subscriber. When the
/// file cannot be opened the app runs without logging rather than failing.
fn init_tracing(store: &Store) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(store.dir()) {
        eprintln!("warning: cannot create {}: {e}", store.dir().display());
        return None;
    }
    let path = store.log_path();
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: cannot open {}: {e}", path.display());
            return None;
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
