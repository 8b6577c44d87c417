//! Named screens and the main menu entries.

use strum::EnumIter;

/// Screen the coordinator is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Username/password form.
    Login,
    /// Account creation form.
    Register,
    /// Main menu.
    Menu,
    /// Difficulty selector.
    Difficulty,
    /// Keypad, current guess and attempt history.
    Game,
    /// Rules and scoring.
    Instructions,
    /// Top players.
    Leaderboard,
    /// Account details.
    Profile,
}

impl View {
    /// True for the screens shown before authentication.
    pub fn is_auth(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuOption {
    /// Opens the difficulty selector.
    PlayGame,
    /// Opens the rules.
    Instructions,
    /// Opens the leaderboard.
    Leaderboard,
    /// Opens the profile.
    Profile,
    /// Forgets the stored token.
    Logout,
    /// Exits the client.
    Quit,
}

impl MenuOption {
    /// Entry title.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayGame => "Play Game",
            Self::Instructions => "Instructions",
            Self::Leaderboard => "Leaderboard",
            Self::Profile => "Profile",
            Self::Logout => "Log Out",
            Self::Quit => "Quit",
        }
    }

    /// Entry subtitle.
    pub fn description(self) -> &'static str {
        match self {
            Self::PlayGame => "Start a new Mastermind challenge",
            Self::Instructions => "Learn how to play",
            Self::Leaderboard => "View top 3 players",
            Self::Profile => "View your stats",
            Self::Logout => "Sign out of this device",
            Self::Quit => "Leave the game",
        }
    }
}
