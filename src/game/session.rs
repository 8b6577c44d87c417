//! Session state machine: status, counters and the outcome of each submission.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

use crate::api::SessionId;
use crate::game::{Attempt, AttemptLedger, Difficulty, GUESS_LENGTH, GuessBuffer};

/// Overall game status. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GameStatus {
    /// Guesses and hints are accepted.
    #[display("playing")]
    Playing,
    /// The code was cracked.
    #[display("won")]
    Won,
    /// Attempts ran out.
    #[display("lost")]
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Classified response to a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Exact match.
    Win {
        /// Cumulative score reported by the server.
        total_score: Option<i64>,
    },
    /// Attempts exhausted.
    Lose {
        /// Cumulative score reported by the server.
        total_score: Option<i64>,
    },
    /// Partial feedback.
    Continue {
        /// Digits present anywhere in the secret.
        correct_numbers: u8,
        /// Digits in the right place.
        correct_positions: u8,
        /// Remaining attempts reported by the server.
        attempts_left: Option<u32>,
        /// Score change of this guess, computed server-side.
        score_delta: Option<i64>,
        /// Cumulative score reported by the server.
        total_score: Option<i64>,
    },
}

/// Why an action was refused before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    /// Submit with empty slots.
    #[display("Please enter 4 digits before submitting")]
    IncompleteGuess,
    /// Submit or hint after the game ended.
    #[display("The game is over")]
    NotPlaying,
}

/// Status and counters of the running game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionState {
    status: GameStatus,
    attempts_left: u32,
    total_score: i64,
    difficulty: Difficulty,
    session_id: SessionId,
}

impl SessionState {
    /// Creates the state of a freshly started game.
    #[instrument(skip(session_id), fields(session_id = %session_id))]
    pub fn new(
        session_id: SessionId,
        difficulty: Difficulty,
        attempts_left: u32,
        total_score: i64,
    ) -> Self {
        Self {
            status: GameStatus::Playing,
            attempts_left,
            total_score,
            difficulty,
            session_id,
        }
    }

    /// Folds a submit outcome into status and counters.
    ///
    /// Returns the `(correct_positions, correct_numbers, score_delta)` to
    /// record, or `None` if the game was already over.
    #[instrument(skip(self), fields(session_id = %self.session_id, status = %self.status))]
    pub fn apply(&mut self, outcome: SubmitOutcome) -> Option<(u8, u8, Option<i64>)> {
        if self.status.is_over() {
            warn!("Submit outcome after game end ignored");
            return None;
        }

        let full = GUESS_LENGTH as u8;
        let feedback = match outcome {
            SubmitOutcome::Win { total_score } => {
                self.finish(GameStatus::Won, total_score);
                (full, full, None)
            }
            SubmitOutcome::Lose { total_score } => {
                self.finish(GameStatus::Lost, total_score);
                (0, 0, None)
            }
            SubmitOutcome::Continue {
                correct_numbers,
                correct_positions,
                attempts_left,
                score_delta,
                total_score,
            } => {
                if let Some(left) = attempts_left {
                    self.attempts_left = left;
                }
                if let Some(score) = total_score {
                    self.total_score = score;
                }
                if self.attempts_left == 0 {
                    // Server reported no attempts left without a verdict.
                    info!("No attempts left on a feedback response, treating as lost");
                    self.status = GameStatus::Lost;
                }
                (correct_positions, correct_numbers, score_delta)
            }
        };

        debug!(
            status = %self.status,
            attempts_left = self.attempts_left,
            total_score = self.total_score,
            "Session updated"
        );
        Some(feedback)
    }

    fn finish(&mut self, status: GameStatus, total_score: Option<i64>) {
        info!(status = %status, "Game finished");
        self.status = status;
        self.attempts_left = 0;
        if let Some(score) = total_score {
            self.total_score = score;
        }
    }
}

/// Everything that lives exactly as long as one game.
#[derive(Debug, Clone, Getters)]
pub struct ActiveGame {
    session: SessionState,
    buffer: GuessBuffer,
    ledger: AttemptLedger,
    hint: Option<String>,
}

impl ActiveGame {
    /// Starts tracking a new game.
    #[instrument(skip(session_id), fields(session_id = %session_id))]
    pub fn new(
        session_id: SessionId,
        difficulty: Difficulty,
        attempts_left: u32,
        starting_score: i64,
    ) -> Self {
        info!(attempts_left, starting_score, "Tracking new game");
        Self {
            session: SessionState::new(session_id, difficulty, attempts_left, starting_score),
            buffer: GuessBuffer::new(),
            ledger: AttemptLedger::new(),
            hint: None,
        }
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    /// Keypad press. Out-of-range symbols and presses after game end are ignored.
    #[instrument(skip(self))]
    pub fn press_symbol(&mut self, symbol: char) -> bool {
        if !self.session.difficulty.offers(symbol) {
            debug!("Symbol not on this keypad");
            return false;
        }
        self.buffer.append(symbol)
    }

    /// Keypad backspace.
    pub fn remove_last(&mut self) -> bool {
        if self.session.status.is_over() {
            return false;
        }
        self.buffer.remove_last()
    }

    /// Validates a submit locally and returns the guess to send.
    #[instrument(skip(self))]
    pub fn prepare_submit(&self) -> Result<String, Rejection> {
        if self.session.status.is_over() {
            return Err(Rejection::NotPlaying);
        }
        self.buffer.as_guess().ok_or(Rejection::IncompleteGuess)
    }

    /// Validates a hint request locally.
    pub fn prepare_hint(&self) -> Result<(), Rejection> {
        if self.session.status.is_over() {
            return Err(Rejection::NotPlaying);
        }
        Ok(())
    }

    /// Applies a submit outcome: counters, ledger, buffer and hint together.
    #[instrument(skip(self))]
    pub fn apply_submit(&mut self, guess: String, outcome: SubmitOutcome) {
        let Some((correct_positions, correct_numbers, score_delta)) = self.session.apply(outcome)
        else {
            return;
        };
        self.ledger.append(Attempt::new(
            guess,
            correct_positions,
            correct_numbers,
            score_delta,
        ));
        self.buffer.reset();
        self.hint = None;
        if self.session.status.is_over() {
            self.buffer.disable();
        }
    }

    /// Attaches a hint to the current guess. Ignored once the game is over.
    #[instrument(skip(self, hint))]
    pub fn apply_hint(&mut self, hint: String) {
        if self.session.status.is_over() {
            debug!("Hint after game end ignored");
            return;
        }
        self.hint = Some(hint);
    }
}
