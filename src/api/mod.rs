//! Remote API client: HTTP transport, wire models and token storage.

mod client;
mod error;
mod models;
mod token_store;

pub use client::{GameApi, RestApiClient};
pub use error::ApiError;
pub use models::{
    Credentials, GuessRequest, GuessResponse, GuessResult, HintResponse, LeaderboardEntry,
    LeaderboardResponse, NewGame, PlayerName, Registration, SessionId, TokenResponse, User,
    Verdict,
};
pub use token_store::TokenStore;
