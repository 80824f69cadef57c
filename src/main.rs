// velzon: a terminal admin-dashboard shell.
// Sets up the terminal, runs the event loop, and restores the terminal on
// the way out.

mod app;
mod config;
mod error;
mod nav;
mod pages;
mod router;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "velzon", version, about = "Terminal admin-dashboard shell")]
struct Cli {
    /// Route to open at startup.
    #[arg(long, default_value = "/dashboard")]
    route: String,

    /// Start with the sidebar collapsed.
    #[arg(long)]
    collapsed: bool,

    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load(cli.config.as_deref())?;
    let mut app = App::new(config, cli.route, cli.collapsed);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

/// Log to stderr, filtered by RUST_LOG. The alternate screen keeps the TUI
/// clean; redirect stderr to capture the trace.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
