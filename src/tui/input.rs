//! Terminal input: the event source and key press to event mapping.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, instrument};

use crate::app::{AppEvent, Coordinator};
use crate::tui::screens::screen_for;

/// Source of terminal events for the event loop.
pub trait InputSource {
    /// Waits up to `timeout` for an event and reports whether one is ready.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Reads the next event. Blocks if none is ready.
    fn read(&mut self) -> io::Result<Event>;
}

/// Reads events from the process terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Discards every event already queued on the source.
///
/// Returns the number of events dropped.
pub fn discard_queued<I: InputSource>(input: &mut I) -> io::Result<usize> {
    let mut dropped = 0;
    while input.poll(Duration::ZERO)? {
        input.read()?;
        dropped += 1;
    }
    if dropped > 0 {
        debug!(dropped, "Discarded input queued during request");
    }
    Ok(dropped)
}

/// Maps a key press to a coordinator event for the current view.
///
/// Ctrl+C quits from every view; every other key is interpreted by the
/// screen that is showing.
#[instrument(skip(coordinator), fields(view = ?coordinator.view()))]
pub fn map_key(key: KeyEvent, coordinator: &Coordinator) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppEvent::Quit);
    }
    let event = screen_for(*coordinator.view()).handle_key(key, coordinator);
    debug!(?event, "Key mapped");
    event
}
