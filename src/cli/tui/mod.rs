//! Interactive task-list screen
//!
//! One page holding the creation form, the priority filter and the task
//! list, drawn with ratatui. State lives only as long as the session.

mod app;
mod event;
mod utils;
mod views;

use std::io::{self, stdout, Stdout};
use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use super::Output;
use crate::config::TuiConfig;
use crate::domain::PriorityFilter;
use app::App;
use event::EventHandler;

/// Terminal type alias
pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Launch the TUI
pub fn run(output: &Output, config: &TuiConfig, filter: PriorityFilter) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let mut terminal = init_terminal()?;
    let mut app = App::new(config, filter);
    let event_handler = EventHandler::new(config.tick_rate_ms);

    // Restore the terminal even if the app panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut terminal, event_handler)
    }));

    let restore_result = restore_terminal();

    let result = match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    };

    output.verbose_ctx(
        "tui",
        &format!(
            "Session ended: {} task(s), {} completed (discarded)",
            app.store().len(),
            app.store().completed_count()
        ),
    );

    result
}

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
