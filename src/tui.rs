use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::app::{App, Control};
use crate::core::score::ScoreBackend;
use crate::ui;

/// Runs the full-screen game until the player quits. The terminal is restored
/// on every exit path.
pub fn run<B: ScoreBackend>(app: &mut App<B>) -> Result<()> {
    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop<B: ScoreBackend>(terminal: &mut DefaultTerminal, app: &mut App<B>) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) == Control::Quit {
                    info!("player quit");
                    return Ok(());
                }
            }
        }
    }
}
