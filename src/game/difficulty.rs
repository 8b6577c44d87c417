//! Difficulty presets offered before a game starts.

use strum::EnumIter;
use tracing::instrument;

/// One of the three server-side difficulty presets.
///
/// Every level guesses a 4-digit code; levels differ in digit range and in
/// the attempt budget the server grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Difficulty {
    /// Digits 0-5, 12 attempts.
    Easy,
    /// Digits 0-7, 10 attempts.
    Medium,
    /// Digits 0-9, 8 attempts.
    Hard,
}

impl Difficulty {
    /// Numeric level sent as `difficulty_level`.
    pub fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Parses a numeric level.
    #[instrument]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Highest digit the keypad offers.
    pub fn max_digit(self) -> u8 {
        match self {
            Self::Easy => 5,
            Self::Medium => 7,
            Self::Hard => 9,
        }
    }

    /// Attempts the server grants at this level.
    pub fn attempt_budget(self) -> u32 {
        match self {
            Self::Easy => 12,
            Self::Medium => 10,
            Self::Hard => 8,
        }
    }

    /// Keypad symbols, `'0'` through [`Self::max_digit`].
    pub fn symbols(self) -> Vec<char> {
        (0..=self.max_digit())
            .filter_map(|d| char::from_digit(u32::from(d), 10))
            .collect()
    }

    /// Returns true if the keypad at this level offers `symbol`.
    pub fn offers(self, symbol: char) -> bool {
        symbol
            .to_digit(10)
            .is_some_and(|d| d <= u32::from(self.max_digit()))
    }

    /// One-line summary for the selector.
    pub fn description(self) -> String {
        format!(
            "Digits from 0 - {}, {} attempts",
            self.max_digit(),
            self.attempt_budget()
        )
    }

    /// Previous preset, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }

    /// Next preset, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}
