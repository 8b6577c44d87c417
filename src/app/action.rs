//! Side effects requested by the coordinator.

use crate::api::{Credentials, Registration, SessionId};
use crate::app::RequestKind;
use crate::game::Difficulty;

/// Instructions produced by the coordinator for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the screen.
    Render,
    /// Exit the client.
    Quit,
    /// Fetch `/auth/me`; the kind decides how the result is used.
    FetchUser(RequestKind),
    /// Log in and store the token.
    Login(Credentials),
    /// Create an account.
    Register(Registration),
    /// Remove the stored token.
    Logout,
    /// Open a game session.
    StartGame(Difficulty),
    /// Send a complete guess.
    SubmitGuess {
        /// Session the guess belongs to.
        session_id: SessionId,
        /// Four symbols.
        guess: String,
    },
    /// Ask for a hint.
    RequestHint {
        /// Session to hint about.
        session_id: SessionId,
    },
    /// Fetch the top players.
    FetchLeaderboard,
}
