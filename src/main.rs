//! Contact Form TUI - a validated contact form in the terminal
//!
//! A Ratatui-based form with name, email, phone and terms fields,
//! per-field validation and keyboard navigation.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::FormConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Poll interval; short enough for the snackbar fade to look smooth
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_form_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {e:#}");
        FormConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported by some terminals
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            tracing::info!("Quitting");
            return Ok(());
        }
    }
}
