//! History of submitted guesses.

use derive_getters::Getters;
use derive_new::new;

/// One submitted guess and the feedback the server returned for it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Attempt {
    guess: String,
    correct_positions: u8,
    correct_numbers: u8,
    score_delta: Option<i64>,
}

/// Append-only attempt history, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptLedger {
    attempts: Vec<Attempt>,
}

impl AttemptLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submission.
    pub fn append(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    /// Forgets all attempts. Only called when a game ends.
    pub fn clear(&mut self) {
        self.attempts.clear();
    }

    /// Attempts in submission order.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The most recent attempt.
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Number of recorded attempts.
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    /// True if nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}
