//! Terminal front end: ratatui rendering and crossterm input.

mod input;
mod screen;
mod screens;

pub use input::{CrosstermInput, InputSource, discard_queued, map_key};
pub use screen::Screen;
pub use screens::screen_for;

use std::cell::Cell;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::time::sleep;
use tracing::{error, info, instrument};

use crate::api::GameApi;
use crate::app::{Coordinator, Runtime};

/// Draws the screen for the coordinator's current view.
pub fn render(frame: &mut Frame, coordinator: &Coordinator) {
    screen_for(*coordinator.view()).render(frame, coordinator);
}

/// Runs the interactive client until the user quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit even when the loop fails.
#[instrument(skip(runtime))]
pub async fn run_tui<A: GameApi>(runtime: Runtime<A>) -> Result<()> {
    info!("Starting Mastermind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = session(&mut terminal, &runtime).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("Mastermind TUI stopped");
    res
}

/// Boots the coordinator, then drives it from the process terminal.
async fn session<B: Backend, A: GameApi>(
    terminal: &mut Terminal<B>,
    runtime: &Runtime<A>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut coordinator = Coordinator::new();
    let quit = runtime
        .start(&mut coordinator, |coordinator: &Coordinator| -> Result<()> {
            terminal.draw(|f| render(f, coordinator))?;
            Ok(())
        })
        .await?;
    if quit {
        return Ok(());
    }
    drive(terminal, runtime, &mut CrosstermInput, &mut coordinator).await
}

/// Draws, polls a key, and dispatches the mapped event until quit.
///
/// Requests run inline, so keys typed while one is in flight queue up on the
/// input source. They are discarded once the request completes: input is
/// disabled while a request is outstanding.
#[instrument(skip_all)]
pub async fn drive<B, A, I>(
    terminal: &mut Terminal<B>,
    runtime: &Runtime<A>,
    input: &mut I,
    coordinator: &mut Coordinator,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    A: GameApi,
    I: InputSource,
{
    // Set by any render that happens while a request is pending.
    let waited = Cell::new(false);
    let mut draw = |coordinator: &Coordinator| -> Result<()> {
        if coordinator.is_busy() {
            waited.set(true);
        }
        terminal.draw(|f| render(f, coordinator))?;
        Ok(())
    };
    draw(&*coordinator)?;

    loop {
        // Poll with a short timeout to keep the loop responsive.
        if input.poll(Duration::from_millis(100))? {
            match input.read()? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(app_event) = map_key(key, &*coordinator) {
                        waited.set(false);
                        if runtime.dispatch(coordinator, app_event, &mut draw).await? {
                            info!("Quit requested");
                            return Ok(());
                        }
                        if waited.get() {
                            discard_queued(input)?;
                        }
                    }
                }
                Event::Resize(_, _) => draw(&*coordinator)?,
                _ => {}
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
