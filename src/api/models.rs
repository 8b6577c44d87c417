//! Request and response bodies of the Mastermind REST API.

use chrono::{DateTime, NaiveDateTime};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::game::SubmitOutcome;

/// Account information returned by `/auth/me` and `/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    id: Option<i64>,
    username: String,
    email: String,
    created_at: String,
    /// Registration responses carry no score.
    #[serde(default)]
    score: i64,
}

impl User {
    /// Creates a user record.
    pub fn new(username: String, email: String, created_at: String, score: i64) -> Self {
        Self {
            id: None,
            username,
            email,
            created_at,
            score,
        }
    }

    /// Formats `created_at` as "Month day, year".
    ///
    /// Falls back to the raw server text if it is not an ISO-8601 timestamp.
    #[instrument(skip(self), fields(created_at = %self.created_at))]
    pub fn member_since(&self) -> String {
        const FORMAT: &str = "%B %-d, %Y";
        if let Ok(stamp) = DateTime::parse_from_rfc3339(&self.created_at) {
            return stamp.format(FORMAT).to_string();
        }
        match NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(stamp) => stamp.format(FORMAT).to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Login form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plain-text password, sent over the API transport.
    pub password: String,
}

/// Registration form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Registration {
    /// Desired account name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token scheme, always "bearer".
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Opaque game session identifier, echoed back exactly as issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionId {
    /// Integer identifiers.
    #[display("{_0}")]
    Numeric(u64),
    /// Any other token.
    #[display("{_0}")]
    Text(String),
}

/// Response of `/game/start_game/`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize, new)]
pub struct NewGame {
    session_id: SessionId,
    attempts_left: u32,
    #[serde(default)]
    message: Option<String>,
}

/// Body of `/game/guess/`.
#[derive(Debug, Clone, Serialize)]
pub struct GuessRequest<'a> {
    /// Session the guess belongs to.
    pub session_id: &'a SessionId,
    /// Exactly four symbols.
    pub guessed_number: &'a str,
}

/// Final verdict tag of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Verdict {
    /// The secret was guessed.
    #[serde(rename = "WIN")]
    Win,
    /// Attempts ran out.
    #[serde(rename = "LOSE")]
    Lose,
}

/// The `result` field of a guess response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GuessResult {
    /// Game over, either way.
    Verdict(Verdict),
    /// Partial feedback, game continues.
    Feedback {
        /// Digits present anywhere in the secret.
        correct_numbers: u8,
        /// Digits in the right place.
        correct_positions: u8,
    },
}

/// Response of `/game/guess/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuessResponse {
    /// Verdict or feedback.
    pub result: GuessResult,
    /// Cumulative score after this guess.
    #[serde(default)]
    pub total_score: Option<i64>,
    /// Remaining attempts, present on feedback responses.
    #[serde(default)]
    pub attempts_left: Option<u32>,
    /// Score change caused by this guess.
    #[serde(default)]
    pub score_this_attempt: Option<i64>,
    /// Human-readable server message.
    #[serde(default)]
    pub message: Option<String>,
}

impl GuessResponse {
    /// Classifies the response into the three submit outcomes.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> SubmitOutcome {
        match self.result {
            GuessResult::Verdict(Verdict::Win) => SubmitOutcome::Win {
                total_score: self.total_score,
            },
            GuessResult::Verdict(Verdict::Lose) => SubmitOutcome::Lose {
                total_score: self.total_score,
            },
            GuessResult::Feedback {
                correct_numbers,
                correct_positions,
            } => SubmitOutcome::Continue {
                correct_numbers,
                correct_positions,
                attempts_left: self.attempts_left,
                score_delta: self.score_this_attempt,
                total_score: self.total_score,
            },
        }
    }
}

/// Response of `/game/get_ai_hint/`.
#[derive(Debug, Clone, Deserialize)]
pub struct HintResponse {
    /// Suggestion text.
    pub hint: String,
}

/// Username projection nested in leaderboard rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerName {
    /// Account name.
    pub username: String,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct LeaderboardEntry {
    id: i64,
    user_id: i64,
    score: i64,
    #[serde(default)]
    user: Option<PlayerName>,
}

impl LeaderboardEntry {
    /// Creates a leaderboard row.
    pub fn new(id: i64, user_id: i64, score: i64, username: Option<String>) -> Self {
        Self {
            id,
            user_id,
            score,
            user: username.map(|username| PlayerName { username }),
        }
    }

    /// Name to display, falling back to the numeric user id.
    pub fn display_name(&self) -> String {
        match &self.user {
            Some(player) => player.username.clone(),
            None => format!("Player {}", self.user_id),
        }
    }
}

/// Response of `/game/top_players/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardResponse {
    /// Best players, highest score first.
    #[serde(default)]
    pub top_players: Vec<LeaderboardEntry>,
}
