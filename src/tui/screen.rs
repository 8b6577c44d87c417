//! Screen trait for the terminal front end.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::{AppEvent, Coordinator};

/// A view of the coordinator state plus its key bindings.
///
/// Screens hold no state of their own: everything they draw comes from the
/// [`Coordinator`], and every key they understand becomes an [`AppEvent`].
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator);

    /// Maps a key press to an event, or `None` if the key is unbound here.
    fn handle_key(&self, key: KeyEvent, coordinator: &Coordinator) -> Option<AppEvent>;
}
