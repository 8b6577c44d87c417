//! Executes coordinator actions against the game API.
//!
//! The runtime drains the action queue produced by the [`Coordinator`],
//! performs network side effects one at a time, and feeds each completion
//! back as an [`AppEvent`]. Rendering is delegated to a caller-supplied
//! closure so the same loop drives the terminal front end and the tests.

use tracing::{debug, instrument, warn};

use crate::api::{ApiError, GameApi};
use crate::app::{AppAction, AppEvent, Coordinator, RequestKind};

/// Drives a [`Coordinator`] with a [`GameApi`] implementation.
#[derive(Debug)]
pub struct Runtime<A: GameApi> {
    api: A,
}

impl<A: GameApi> Runtime<A> {
    /// Creates a runtime over the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Boots the coordinator and processes the initial actions.
    ///
    /// Returns `true` if the client should quit.
    #[instrument(skip_all)]
    pub async fn start<R>(&self, coordinator: &mut Coordinator, render: R) -> anyhow::Result<bool>
    where
        R: FnMut(&Coordinator) -> anyhow::Result<()>,
    {
        let actions = coordinator.boot(self.api.has_credential());
        self.process(coordinator, actions, render).await
    }

    /// Feeds one event to the coordinator and processes the resulting actions.
    ///
    /// Returns `true` if the client should quit.
    pub async fn dispatch<R>(
        &self,
        coordinator: &mut Coordinator,
        event: AppEvent,
        render: R,
    ) -> anyhow::Result<bool>
    where
        R: FnMut(&Coordinator) -> anyhow::Result<()>,
    {
        let actions = coordinator.handle(event);
        self.process(coordinator, actions, render).await
    }

    /// Drains the action queue, including actions caused by completions.
    async fn process<R>(
        &self,
        coordinator: &mut Coordinator,
        initial: Vec<AppAction>,
        mut render: R,
    ) -> anyhow::Result<bool>
    where
        R: FnMut(&Coordinator) -> anyhow::Result<()>,
    {
        let mut pending = initial;

        while !pending.is_empty() {
            let actions = std::mem::take(&mut pending);
            for action in actions {
                match action {
                    AppAction::Render => render(coordinator)?,
                    AppAction::Quit => return Ok(true),
                    effect => {
                        if let Some(event) = self.execute(effect).await {
                            pending.extend(coordinator.handle(event));
                        }
                    }
                }
            }
        }
        Ok(false)
    }

    /// Performs one side effect and returns its completion event.
    ///
    /// `Render` and `Quit` have no completion and yield `None`.
    #[instrument(skip_all)]
    pub async fn execute(&self, action: AppAction) -> Option<AppEvent> {
        let event = match action {
            AppAction::Render | AppAction::Quit => return None,
            AppAction::FetchUser(request) => match self.api.current_user().await {
                Ok(user) => AppEvent::UserLoaded(user),
                Err(e) => failed(request, e),
            },
            AppAction::Login(credentials) => match self.api.login(&credentials).await {
                Ok(()) => AppEvent::LoggedIn,
                Err(e) => failed(RequestKind::Login, e),
            },
            AppAction::Register(registration) => match self.api.register(&registration).await {
                Ok(user) => AppEvent::Registered(user),
                Err(e) => failed(RequestKind::Register, e),
            },
            AppAction::Logout => match self.api.logout().await {
                Ok(()) => AppEvent::LoggedOut,
                Err(e) => failed(RequestKind::Logout, e),
            },
            AppAction::StartGame(difficulty) => match self.api.start_game(difficulty).await {
                Ok(game) => AppEvent::GameStarted { difficulty, game },
                Err(e) => failed(RequestKind::StartGame, e),
            },
            AppAction::SubmitGuess { session_id, guess } => {
                match self.api.submit_guess(&session_id, &guess).await {
                    Ok(response) => AppEvent::GuessEvaluated {
                        guess,
                        outcome: response.outcome(),
                        message: response.message,
                    },
                    Err(e) => failed(RequestKind::SubmitGuess, e),
                }
            }
            AppAction::RequestHint { session_id } => {
                match self.api.request_hint(&session_id).await {
                    Ok(hint) => AppEvent::HintReceived(hint),
                    Err(e) => failed(RequestKind::Hint, e),
                }
            }
            AppAction::FetchLeaderboard => match self.api.leaderboard().await {
                Ok(players) => AppEvent::LeaderboardLoaded(players),
                Err(e) => failed(RequestKind::Leaderboard, e),
            },
        };
        debug!(?event, "Action completed");
        Some(event)
    }
}

fn failed(request: RequestKind, error: ApiError) -> AppEvent {
    warn!(?request, error = %error, "Request failed");
    AppEvent::RequestFailed {
        request,
        message: error.to_string(),
        unauthorized: error.is_unauthorized(),
    }
}
