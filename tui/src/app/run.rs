use std::env;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use estimator::{Estimator, EstimatorConfig};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ui::screens::{form, Action, Screen};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Picks the model artifact: first command-line argument, then the environment.
fn config() -> EstimatorConfig {
    env::args()
        .nth(1)
        .map(EstimatorConfig::new)
        .unwrap_or_else(EstimatorConfig::from_env)
}

/// Loads the model, then runs the TUI application.
///
/// The model is loaded before the terminal is touched so a broken artifact
/// aborts startup with a readable error.
///
/// # Errors
/// Returns an error if the model cannot be loaded, or if terminal setup or
/// rendering fails.
pub fn run() -> Result<()> {
    let config = config();
    let estimator = Estimator::load(&config).with_context(|| {
        format!(
            "cannot start without a usable model at '{}'",
            config.model_path().display()
        )
    })?;
    info!("estimator ready");

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = Screen::Form(form::FormScreen::new(estimator));

    loop {
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
