//! The in-progress guess.

use tracing::{debug, instrument};

/// Number of symbols in every guess.
pub const GUESS_LENGTH: usize = 4;

/// Four slots filled left-to-right and cleared right-to-left.
///
/// The buffer stores whatever symbol it is given; the keypad restricts the
/// symbols to the active difficulty's range. A disabled buffer (game over)
/// ignores appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: [Option<char>; GUESS_LENGTH],
    enabled: bool,
}

impl Default for GuessBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessBuffer {
    /// Creates an empty, enabled buffer.
    pub fn new() -> Self {
        Self {
            slots: [None; GUESS_LENGTH],
            enabled: true,
        }
    }

    /// Fills the first empty slot.
    ///
    /// Returns false (and changes nothing) when the buffer is full or disabled.
    #[instrument(skip(self))]
    pub fn append(&mut self, symbol: char) -> bool {
        if !self.enabled {
            debug!("Buffer disabled, ignoring symbol");
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(symbol);
                true
            }
            None => false,
        }
    }

    /// Clears the last filled slot. Returns false if nothing was filled.
    #[instrument(skip(self))]
    pub fn remove_last(&mut self) -> bool {
        match self.slots.iter_mut().rev().find(|slot| slot.is_some()) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// True iff all four slots are filled.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True iff no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Clears every slot.
    pub fn reset(&mut self) {
        self.slots = [None; GUESS_LENGTH];
    }

    /// Stops accepting symbols until the buffer is replaced.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Returns true while the buffer accepts symbols.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Slot contents, left to right.
    pub fn slots(&self) -> &[Option<char>; GUESS_LENGTH] {
        &self.slots
    }

    /// The joined guess, only once complete.
    pub fn as_guess(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }
}
