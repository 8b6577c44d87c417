//! Inputs of the coordinator.
//!
//! Events come from two places: user intents produced by the terminal input
//! layer, and completions of requests executed by the [`crate::Runtime`].

use crate::api::{LeaderboardEntry, NewGame, User};
use crate::app::View;
use crate::game::{Difficulty, SubmitOutcome};

/// Remote operation the coordinator is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// `/auth/me` on startup or after login.
    CurrentUser,
    /// `/auth/me` for the profile view.
    Profile,
    /// `/auth/me` before leaving a finished or abandoned game.
    EndGame,
    /// `/auth/login`.
    Login,
    /// `/auth/register`.
    Register,
    /// Token removal.
    Logout,
    /// `/game/start_game/`.
    StartGame,
    /// `/game/guess/`.
    SubmitGuess,
    /// `/game/get_ai_hint/`.
    Hint,
    /// `/game/top_players/`.
    Leaderboard,
}

impl RequestKind {
    /// Phrase used in error messages ("Error starting game: ...").
    pub fn describe(self) -> &'static str {
        match self {
            Self::CurrentUser => "loading user",
            Self::Profile => "loading profile",
            Self::EndGame => "ending game",
            Self::Login => "logging in",
            Self::Register => "registering",
            Self::Logout => "logging out",
            Self::StartGame => "starting game",
            Self::SubmitGuess => "making guess",
            Self::Hint => "getting hint",
            Self::Leaderboard => "loading leaderboard",
        }
    }
}

/// Events processed by the coordinator.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Open a view (menu entry, back button, login/register switch).
    Navigate(View),
    /// Move the highlighted entry up (menu, difficulty selector).
    CursorUp,
    /// Move the highlighted entry down.
    CursorDown,
    /// Activate the highlighted entry.
    Confirm,
    /// Pick a difficulty in the selector.
    SelectDifficulty(Difficulty),
    /// Start a game at the selected difficulty.
    PlayNow,
    /// Keypad digit.
    PressSymbol(char),
    /// Keypad backspace.
    RemoveLast,
    /// Hint button.
    RequestHint,
    /// Submit button.
    Submit,
    /// Leave the game view (play again, try again, or abandon).
    EndGame,
    /// Re-fetch the data of the current view.
    Refresh,
    /// Character typed into the auth form.
    TypeChar(char),
    /// Backspace in the auth form.
    Erase,
    /// Focus the next auth form field.
    NextField,
    /// Send the auth form.
    SubmitForm,
    /// Forget the stored token.
    Logout,
    /// Exit.
    Quit,

    /// Current user fetched.
    UserLoaded(User),
    /// Token obtained and stored.
    LoggedIn,
    /// Account created.
    Registered(User),
    /// Token removed.
    LoggedOut,
    /// Session opened by the server.
    GameStarted {
        /// Level the game was requested at.
        difficulty: Difficulty,
        /// Server response.
        game: NewGame,
    },
    /// Guess evaluated by the server.
    GuessEvaluated {
        /// Guess that was sent.
        guess: String,
        /// Classified response.
        outcome: SubmitOutcome,
        /// Server message accompanying the response.
        message: Option<String>,
    },
    /// Hint text received.
    HintReceived(String),
    /// Top players received.
    LeaderboardLoaded(Vec<LeaderboardEntry>),
    /// A request failed; state is left as it was.
    RequestFailed {
        /// Operation that failed.
        request: RequestKind,
        /// Message to show.
        message: String,
        /// True if the server rejected or lacked our credentials.
        unauthorized: bool,
    },
}
