//! Mastermind TUI library - terminal client for the Mastermind game service
//!
//! This library provides the client-side game-session view state, the REST
//! client for the remote game API, and a ratatui front end.
//!
//! # Architecture
//!
//! - **Game**: guess buffer, attempt ledger and session state machine
//! - **App**: view coordinator (events in, actions out) and the runtime that executes actions
//! - **Api**: REST client, wire models and the bearer token store
//! - **Tui**: screens and key bindings
//!
//! # Example
//!
//! ```no_run
//! use mastermind_tui::{Coordinator, RestApiClient, Runtime, TokenStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = RestApiClient::new(
//!     "http://localhost:8000/api/v1".to_string(),
//!     TokenStore::new(TokenStore::default_path()),
//! );
//! let runtime = Runtime::new(api);
//! let mut coordinator = Coordinator::new();
//! runtime.start(&mut coordinator, |_| Ok(())).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod app;
mod config;
mod game;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Remote API
pub use api::{
    ApiError, Credentials, GameApi, GuessRequest, GuessResponse, GuessResult, HintResponse,
    LeaderboardEntry, LeaderboardResponse, NewGame, PlayerName, Registration, RestApiClient,
    SessionId, TokenResponse, TokenStore, User, Verdict,
};

// Crate-level exports - View coordination
pub use app::{
    AppAction, AppEvent, AuthField, AuthForm, Coordinator, MenuOption, Notice, NoticeLevel,
    RequestKind, Runtime, View,
};

// Crate-level exports - Configuration
pub use config::{API_URL_VAR, ClientConfig, ConfigError, TOKEN_PATH_VAR};

// Crate-level exports - Game session state
pub use game::{
    ActiveGame, Attempt, AttemptLedger, Difficulty, GUESS_LENGTH, GameStatus, GuessBuffer,
    Rejection, SessionState, SubmitOutcome,
};
