//! REST client for the remote Mastermind API.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::api::{
    ApiError, Credentials, GuessRequest, GuessResponse, HintResponse, LeaderboardEntry,
    LeaderboardResponse, NewGame, Registration, SessionId, TokenResponse, TokenStore, User,
};
use crate::game::Difficulty;

/// Operations the client consumes from the game service.
///
/// Each call is one request-response round trip with no retry.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Returns true if a bearer token is available.
    fn has_credential(&self) -> bool;

    /// Fetches the logged-in user (`GET /auth/me`).
    async fn current_user(&self) -> Result<User, ApiError>;

    /// Exchanges credentials for a token and stores it (`POST /auth/login`).
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Creates an account (`POST /auth/register`).
    async fn register(&self, registration: &Registration) -> Result<User, ApiError>;

    /// Forgets the stored token.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Opens a new game session (`POST /game/start_game/`).
    async fn start_game(&self, difficulty: Difficulty) -> Result<NewGame, ApiError>;

    /// Submits a complete guess (`POST /game/guess/`).
    async fn submit_guess(
        &self,
        session_id: &SessionId,
        guess: &str,
    ) -> Result<GuessResponse, ApiError>;

    /// Asks for a hint about the current session (`POST /game/get_ai_hint/`).
    async fn request_hint(&self, session_id: &SessionId) -> Result<String, ApiError>;

    /// Fetches the top players (`GET /game/top_players/`).
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError>;
}

/// [`GameApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct RestApiClient {
    base_url: String,
    client: reqwest::Client,
    tokens: TokenStore,
}

impl RestApiClient {
    /// Creates a client for the API rooted at `base_url` (e.g. `http://host/api/v1`).
    #[instrument(skip(tokens), fields(token_path = %tokens.path().display()))]
    pub fn new(base_url: String, tokens: TokenStore) -> Self {
        info!(base_url = %base_url, "Creating REST API client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            tokens,
        }
    }

    /// Returns the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the token store backing this client.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Builds a request carrying the stored bearer token.
    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.load()?.ok_or_else(|| {
            warn!(path, "Authenticated request without a token");
            ApiError::MissingCredential
        })?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Sends a request and decodes a 2xx body, normalizing error responses.
    #[instrument(skip(self, request))]
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = %status, "Received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_error_body(status.as_u16(), &body);
            warn!(status = %status, error = %err, "API returned an error");
            return Err(err);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %body, "Response body did not match contract");
            ApiError::Decode {
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl GameApi for RestApiClient {
    fn has_credential(&self) -> bool {
        matches!(self.tokens.load(), Ok(Some(_)))
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<User, ApiError> {
        let request = self.authorized(Method::GET, "/auth/me")?;
        let user: User = self.send(request).await?;
        debug!(username = %user.username(), score = user.score(), "Fetched current user");
        Ok(user)
    }

    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        let token: TokenResponse = self.send(request).await?;
        self.tokens.save(&token.access_token)?;
        info!("Logged in");
        Ok(())
    }

    #[instrument(skip(self, registration), fields(username = %registration.username))]
    async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let request = self
            .request(Method::POST, "/auth/register")
            .json(registration);
        let user: User = self.send(request).await?;
        info!(username = %user.username(), "Registered");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<(), ApiError> {
        self.tokens.clear()
    }

    #[instrument(skip(self), fields(level = difficulty.level()))]
    async fn start_game(&self, difficulty: Difficulty) -> Result<NewGame, ApiError> {
        let path = format!("/game/start_game/?difficulty_level={}", difficulty.level());
        let request = self.authorized(Method::POST, &path)?;
        let game: NewGame = self.send(request).await?;
        info!(
            session_id = %game.session_id(),
            attempts_left = game.attempts_left(),
            "Game started"
        );
        Ok(game)
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn submit_guess(
        &self,
        session_id: &SessionId,
        guess: &str,
    ) -> Result<GuessResponse, ApiError> {
        let body = GuessRequest {
            session_id,
            guessed_number: guess,
        };
        let request = self.authorized(Method::POST, "/game/guess/")?.json(&body);
        let response: GuessResponse = self.send(request).await?;
        debug!(result = ?response.result, "Guess evaluated");
        Ok(response)
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn request_hint(&self, session_id: &SessionId) -> Result<String, ApiError> {
        let request = self
            .authorized(Method::POST, "/game/get_ai_hint/")?
            .json(session_id);
        let response: HintResponse = self.send(request).await?;
        Ok(response.hint)
    }

    #[instrument(skip(self))]
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let request = self.authorized(Method::GET, "/game/top_players/")?;
        let response: LeaderboardResponse = self.send(request).await?;
        debug!(count = response.top_players.len(), "Fetched leaderboard");
        Ok(response.top_players)
    }
}
