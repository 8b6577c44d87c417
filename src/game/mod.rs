//! Game-session view state: guess buffer, attempt ledger and session state machine.

mod buffer;
mod difficulty;
mod ledger;
mod session;

pub use buffer::{GUESS_LENGTH, GuessBuffer};
pub use difficulty::Difficulty;
pub use ledger::{Attempt, AttemptLedger};
pub use session::{ActiveGame, GameStatus, Rejection, SessionState, SubmitOutcome};
