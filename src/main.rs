//! Track Order TUI - order tracking page in the terminal
//!
//! Shows the order progress, the estimated delivery date and a feedback
//! form (rating, comment, optional image) with inline validation.

mod app;
mod config;
mod feedback;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TrackerConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "track_order_tui=info,feedback=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let config = TrackerConfig::load()?;
    tracing::info!(
        "Starting with stage {} and delivery {}",
        config.progress().current_stage(),
        config.delivery().date
    );

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
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file so output does not draw over the alternate screen.
/// Falls back to discarding logs, with a note on stderr, when the file cannot be opened.
/// Runs before raw mode, so the note is still visible.
fn log_writer() -> BoxMakeWriter {
    let path = TrackerConfig::log_path();
    match open_log_file(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(err) => {
            eprintln!("Logging disabled: cannot open {}: {err}", path.display());
            BoxMakeWriter::new(io::sink)
        }
    }
}

/// Open `path` for appending, creating missing parent directories
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("track-order-tui-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = temp_path("logs");
        let path = dir.join("nested").join("track-order.log");
        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_log_file_reports_unusable_parent() {
        // A regular file where a directory is expected
        let blocker = temp_path("blocker");
        std::fs::write(&blocker, "").unwrap();
        let result = open_log_file(&blocker.join("track-order.log"));
        std::fs::remove_file(&blocker).unwrap();
        assert!(result.is_err());
    }
}
