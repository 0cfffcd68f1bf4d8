//! Terminal UI for playing against the bot.

mod app;
mod input;
mod ui;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// How long to wait for a key before checking on the bot.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the user quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        strategy = %config.strategy(),
        human = %config.human_mark(),
        delay_ms = config.bot_delay_ms(),
        seed = ?config.seed(),
        "Starting tic-tac-toe TUI"
    );

    enable_raw_mode()?;
    let guard = TerminalGuard { out: io::stdout() };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Instant::now());
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Puts the terminal back into cooked mode on the main screen when dropped.
///
/// Created right after raw mode is enabled, so every later exit path
/// restores the terminal, including failed setup and panics.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            error!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Draws, reads keys, and lets the bot move when its delay is up.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, Instant::now());
        }

        app.tick(Instant::now())?;
    }
}
