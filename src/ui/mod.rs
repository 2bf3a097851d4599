//! Interactive routine screen
//!
//! Single-threaded: one terminal event is read, turned into an [`Action`]
//! and applied to the [`App`] before the next one is read. Routine
//! subscribers mark the app dirty, and the screen is redrawn before
//! blocking on input again.

pub mod app;
pub mod input;
pub mod render;

pub use app::{App, Focus};
pub use input::{map_event, Action};
pub use render::draw;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::backend::Backend;
use ratatui::Terminal;

/// Run until the user quits
pub fn run<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    tracing::info!("Routine screen started");
    loop {
        if app.take_dirty() {
            terminal
                .draw(|frame| draw(frame, app))
                .context("failed to draw routine screen")?;
        }
        if app.should_quit() {
            break;
        }

        let ev = event::read().context("failed to read terminal event")?;
        if let Some(action) = map_event(&ev, app.focus()) {
            app.apply(action);
        }
    }
    tracing::info!(
        completed = app.routine().checklist().completed(),
        "Routine screen closed"
    );
    Ok(())
}
