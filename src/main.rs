//! News TUI - Terminal User Interface for searching news articles.
//!
//! Main entry point and event loop for the application.

mod app;
mod browser;
mod config;
mod dispatch;
mod input;
mod logging;
mod news;
mod panel;
mod ui;

use app::{App, Completion};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dispatch::Dispatcher;
use input::KeyOutcome;
use news::NewsClient;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;
use ui::ScreenLayout;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "news-tui", about = "Search and browse news articles in the terminal")]
struct Cli {
    /// Path to config.jsonc (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Main application entry point.
///
/// # Details
/// Loads configuration, starts logging, creates the search client and
/// runs the event loop until the user quits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config.clone() {
            Some(path) => path,
            None => Config::default_config_path()?,
        };
        Config::default().save(Some(&path))?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let log_path = logging::init_tracing(&config)?;
    info!(base_url = %config.base_url, log = %log_path.display(), "news-tui starting up");

    let client = NewsClient::new(&config)?;
    let (dispatcher, mut completions) = Dispatcher::new(client);

    let mut app = App::new(config.sources.clone(), config.dark_mode);
    if config.fetch_latest_on_start {
        dispatcher.dispatch(app.fetch_latest());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &dispatcher, &mut completions).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("news-tui shutting down");
    result
}

/// Main event loop.
///
/// # Details
/// Applies finished requests, redraws, then handles at most one input
/// event. Polling with a timeout keeps the spinner moving and completions
/// flowing while the user is idle.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    completions: &mut UnboundedReceiver<Completion>,
) -> anyhow::Result<()> {
    let mut layout = ScreenLayout::default();

    loop {
        while let Ok(completion) = completions.try_recv() {
            app.complete(completion);
        }
        app.tick = app.tick.wrapping_add(1);

        terminal.draw(|f| {
            layout = ui::screen_layout(f.area(), app.panel.sources().len());
            app.panel.track_dropdown_region(layout.dropdown);
            ui::render(f, app, &layout);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match input::handle_key_event(key, app) {
                        KeyOutcome::Quit => break,
                        KeyOutcome::Dispatch(request) => dispatcher.dispatch(request),
                        KeyOutcome::Continue => {}
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse_event(mouse, app, &layout),
                _ => {}
            }
        }
    }

    Ok(())
}
