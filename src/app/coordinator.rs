//! View coordinator.
//!
//! Pure state machine that owns the canonical client state. It consumes
//! [`AppEvent`]s and produces [`AppAction`]s for the runtime; it performs no
//! I/O itself, so every transition is testable without a network.
//!
//! While a request is in flight, user input other than quitting is ignored.
//! At most one request is pending at a time.

use derive_getters::Getters;
use derive_new::new;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::api::{LeaderboardEntry, NewGame, User};
use crate::app::{AppAction, AppEvent, AuthForm, MenuOption, RequestKind, View};
use crate::game::{ActiveGame, Difficulty, SubmitOutcome};

/// Severity of a user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation.
    Info,
    /// Local validation failure.
    Warning,
    /// Failed request.
    Error,
}

/// Message shown in the status line until the next user input.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Notice {
    level: NoticeLevel,
    text: String,
}

/// Canonical client state and the single place where it changes.
#[derive(Debug, Clone, Getters)]
pub struct Coordinator {
    view: View,
    user: Option<User>,
    game: Option<ActiveGame>,
    pending: Option<RequestKind>,
    notice: Option<Notice>,
    menu_cursor: usize,
    selected_difficulty: Option<Difficulty>,
    leaderboard: Option<Vec<LeaderboardEntry>>,
    form: AuthForm,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    /// Creates a coordinator showing the login screen.
    pub fn new() -> Self {
        Self {
            view: View::Login,
            user: None,
            game: None,
            pending: None,
            notice: None,
            menu_cursor: 0,
            selected_difficulty: None,
            leaderboard: None,
            form: AuthForm::new(),
        }
    }

    /// Initial actions: resume a stored login or show the login form.
    #[instrument(skip(self))]
    pub fn boot(&mut self, has_credential: bool) -> Vec<AppAction> {
        if has_credential {
            info!("Stored token found, loading user");
            self.begin(RequestKind::CurrentUser);
            vec![
                AppAction::Render,
                AppAction::FetchUser(RequestKind::CurrentUser),
            ]
        } else {
            info!("No stored token, showing login");
            self.view = View::Login;
            vec![AppAction::Render]
        }
    }

    /// Menu entry under the cursor.
    pub fn selected_menu_option(&self) -> MenuOption {
        MenuOption::iter()
            .nth(self.menu_cursor)
            .unwrap_or(MenuOption::PlayGame)
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Processes one event and returns the actions to execute.
    #[instrument(skip(self, event), fields(view = ?self.view, pending = ?self.pending))]
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        debug!(?event, "Handling event");
        match event {
            AppEvent::Quit => vec![AppAction::Quit],

            AppEvent::UserLoaded(user) => self.on_user_loaded(user),
            AppEvent::LoggedIn => self.on_logged_in(),
            AppEvent::Registered(user) => self.on_registered(user),
            AppEvent::LoggedOut => self.on_logged_out(),
            AppEvent::GameStarted { difficulty, game } => self.on_game_started(difficulty, game),
            AppEvent::GuessEvaluated {
                guess,
                outcome,
                message,
            } => self.on_guess_evaluated(guess, outcome, message),
            AppEvent::HintReceived(hint) => self.on_hint(hint),
            AppEvent::LeaderboardLoaded(players) => self.on_leaderboard(players),
            AppEvent::RequestFailed {
                request,
                message,
                unauthorized,
            } => self.on_request_failed(request, message, unauthorized),

            intent => {
                if let Some(request) = self.pending {
                    debug!(?request, "Input ignored while request in flight");
                    return Vec::new();
                }
                self.notice = None;
                self.handle_intent(intent)
            }
        }
    }

    fn handle_intent(&mut self, intent: AppEvent) -> Vec<AppAction> {
        match intent {
            AppEvent::Navigate(view) => self.navigate(view),
            AppEvent::CursorUp => self.move_cursor(false),
            AppEvent::CursorDown => self.move_cursor(true),
            AppEvent::Confirm => self.confirm(),
            AppEvent::SelectDifficulty(difficulty) => {
                if self.view != View::Difficulty {
                    return Vec::new();
                }
                self.selected_difficulty = Some(difficulty);
                vec![AppAction::Render]
            }
            AppEvent::PlayNow => self.play_now(),
            AppEvent::PressSymbol(symbol) => self.press_symbol(symbol),
            AppEvent::RemoveLast => self.remove_last(),
            AppEvent::RequestHint => self.request_hint(),
            AppEvent::Submit => self.submit(),
            AppEvent::EndGame => self.end_game(),
            AppEvent::Refresh => self.refresh(),
            AppEvent::TypeChar(c) => self.edit_form(|form| form.type_char(c)),
            AppEvent::Erase => self.edit_form(AuthForm::erase),
            AppEvent::NextField => {
                let registering = self.view == View::Register;
                self.edit_form(|form| form.next_field(registering))
            }
            AppEvent::SubmitForm => self.submit_form(),
            AppEvent::Logout => self.logout(),
            other => {
                warn!(?other, "Completion event routed as intent");
                Vec::new()
            }
        }
    }

    fn begin(&mut self, request: RequestKind) {
        debug!(?request, "Request started");
        self.pending = Some(request);
    }

    fn warn_user(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        self.notice = Some(Notice::new(NoticeLevel::Warning, text.into()));
        vec![AppAction::Render]
    }

    #[instrument(skip(self))]
    fn navigate(&mut self, target: View) -> Vec<AppAction> {
        if self.view == View::Game && self.game.is_some() {
            return self.end_game();
        }
        if target.is_auth() != self.user.is_none() {
            debug!(?target, "Navigation not available in this state");
            return Vec::new();
        }

        info!(from = ?self.view, to = ?target, "Changing view");
        self.view = target;
        match target {
            View::Leaderboard => {
                self.leaderboard = None;
                self.begin(RequestKind::Leaderboard);
                vec![AppAction::Render, AppAction::FetchLeaderboard]
            }
            View::Profile => {
                self.begin(RequestKind::Profile);
                vec![
                    AppAction::Render,
                    AppAction::FetchUser(RequestKind::Profile),
                ]
            }
            View::Difficulty => {
                self.selected_difficulty = None;
                vec![AppAction::Render]
            }
            View::Login | View::Register => {
                self.form.clear_secret();
                vec![AppAction::Render]
            }
            View::Menu | View::Instructions | View::Game => vec![AppAction::Render],
        }
    }

    fn move_cursor(&mut self, down: bool) -> Vec<AppAction> {
        match self.view {
            View::Menu => {
                let count = MenuOption::iter().count();
                self.menu_cursor = if down {
                    (self.menu_cursor + 1) % count
                } else {
                    (self.menu_cursor + count - 1) % count
                };
                vec![AppAction::Render]
            }
            View::Difficulty => {
                self.selected_difficulty = Some(match (self.selected_difficulty, down) {
                    (None, _) => Difficulty::Easy,
                    (Some(current), true) => current.next(),
                    (Some(current), false) => current.previous(),
                });
                vec![AppAction::Render]
            }
            _ => Vec::new(),
        }
    }

    fn confirm(&mut self) -> Vec<AppAction> {
        match self.view {
            View::Menu => self.activate(self.selected_menu_option()),
            View::Difficulty => self.play_now(),
            View::Login | View::Register => self.submit_form(),
            _ => Vec::new(),
        }
    }

    #[instrument(skip(self))]
    fn activate(&mut self, option: MenuOption) -> Vec<AppAction> {
        info!(option = ?option, "Menu option selected");
        match option {
            MenuOption::PlayGame => self.navigate(View::Difficulty),
            MenuOption::Instructions => self.navigate(View::Instructions),
            MenuOption::Leaderboard => self.navigate(View::Leaderboard),
            MenuOption::Profile => self.navigate(View::Profile),
            MenuOption::Logout => self.logout(),
            MenuOption::Quit => vec![AppAction::Quit],
        }
    }

    fn play_now(&mut self) -> Vec<AppAction> {
        if self.view != View::Difficulty {
            return Vec::new();
        }
        match self.selected_difficulty {
            Some(difficulty) => {
                info!(level = difficulty.level(), "Starting game");
                self.begin(RequestKind::StartGame);
                vec![AppAction::Render, AppAction::StartGame(difficulty)]
            }
            None => self.warn_user("Please select a difficulty level first!"),
        }
    }

    fn active_game_mut(&mut self) -> Option<&mut ActiveGame> {
        if self.view != View::Game {
            return None;
        }
        self.game.as_mut()
    }

    fn press_symbol(&mut self, symbol: char) -> Vec<AppAction> {
        if self
            .active_game_mut()
            .is_some_and(|game| game.press_symbol(symbol))
        {
            vec![AppAction::Render]
        } else {
            Vec::new()
        }
    }

    fn remove_last(&mut self) -> Vec<AppAction> {
        if self.active_game_mut().is_some_and(|game| game.remove_last()) {
            vec![AppAction::Render]
        } else {
            Vec::new()
        }
    }

    #[instrument(skip(self))]
    fn request_hint(&mut self) -> Vec<AppAction> {
        let Some(game) = self.active_game_mut() else {
            return Vec::new();
        };
        if let Err(rejection) = game.prepare_hint() {
            debug!(%rejection, "Hint rejected locally");
            return Vec::new();
        }
        let session_id = game.session().session_id().clone();
        self.begin(RequestKind::Hint);
        vec![AppAction::Render, AppAction::RequestHint { session_id }]
    }

    #[instrument(skip(self))]
    fn submit(&mut self) -> Vec<AppAction> {
        let Some(game) = self.active_game_mut() else {
            return Vec::new();
        };
        match game.prepare_submit() {
            Ok(guess) => {
                let session_id = game.session().session_id().clone();
                info!(guess = %guess, "Submitting guess");
                self.begin(RequestKind::SubmitGuess);
                vec![
                    AppAction::Render,
                    AppAction::SubmitGuess { session_id, guess },
                ]
            }
            Err(rejection) => {
                debug!(%rejection, "Submit rejected locally");
                self.warn_user(rejection.to_string())
            }
        }
    }

    /// Re-fetches the profile for the authoritative score, then leaves the game.
    #[instrument(skip(self))]
    fn end_game(&mut self) -> Vec<AppAction> {
        if self.view != View::Game {
            return Vec::new();
        }
        info!("Ending game");
        self.begin(RequestKind::EndGame);
        vec![
            AppAction::Render,
            AppAction::FetchUser(RequestKind::EndGame),
        ]
    }

    fn refresh(&mut self) -> Vec<AppAction> {
        match self.view {
            View::Leaderboard => {
                self.begin(RequestKind::Leaderboard);
                vec![AppAction::Render, AppAction::FetchLeaderboard]
            }
            View::Profile => {
                self.begin(RequestKind::Profile);
                vec![
                    AppAction::Render,
                    AppAction::FetchUser(RequestKind::Profile),
                ]
            }
            _ => Vec::new(),
        }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut AuthForm)) -> Vec<AppAction> {
        if !self.view.is_auth() {
            return Vec::new();
        }
        edit(&mut self.form);
        vec![AppAction::Render]
    }

    #[instrument(skip(self))]
    fn submit_form(&mut self) -> Vec<AppAction> {
        match self.view {
            View::Login => match self.form.credentials() {
                Some(credentials) => {
                    self.begin(RequestKind::Login);
                    vec![AppAction::Render, AppAction::Login(credentials)]
                }
                None => self.warn_user("Please enter username and password"),
            },
            View::Register => match self.form.registration() {
                Some(registration) => {
                    self.begin(RequestKind::Register);
                    vec![AppAction::Render, AppAction::Register(registration)]
                }
                None => self.warn_user("Please fill in all fields"),
            },
            _ => Vec::new(),
        }
    }

    fn logout(&mut self) -> Vec<AppAction> {
        if self.user.is_none() || self.view == View::Game {
            return Vec::new();
        }
        self.begin(RequestKind::Logout);
        vec![AppAction::Render, AppAction::Logout]
    }

    #[instrument(skip(self, user), fields(username = %user.username()))]
    fn on_user_loaded(&mut self, user: User) -> Vec<AppAction> {
        match self.pending.take() {
            Some(RequestKind::CurrentUser) => {
                info!("Logged-in user loaded");
                self.view = View::Menu;
                self.menu_cursor = 0;
                self.form.clear();
            }
            Some(RequestKind::EndGame) => {
                info!(score = user.score(), "Game ended, returning to menu");
                self.game = None;
                self.selected_difficulty = None;
                self.view = View::Menu;
            }
            Some(RequestKind::Profile) => debug!("Profile refreshed"),
            other => warn!(?other, "User loaded without a matching request"),
        }
        self.user = Some(user);
        vec![AppAction::Render]
    }

    fn on_logged_in(&mut self) -> Vec<AppAction> {
        info!("Login succeeded, loading user");
        self.form.clear_secret();
        self.begin(RequestKind::CurrentUser);
        vec![
            AppAction::Render,
            AppAction::FetchUser(RequestKind::CurrentUser),
        ]
    }

    fn on_registered(&mut self, user: User) -> Vec<AppAction> {
        self.pending = None;
        info!(username = %user.username(), "Registration succeeded");
        self.form.clear_secret();
        self.view = View::Login;
        self.notice = Some(Notice::new(
            NoticeLevel::Info,
            format!("Account created for {}. Please log in.", user.username()),
        ));
        vec![AppAction::Render]
    }

    fn on_logged_out(&mut self) -> Vec<AppAction> {
        self.pending = None;
        info!("Logged out");
        self.user = None;
        self.game = None;
        self.leaderboard = None;
        self.selected_difficulty = None;
        self.menu_cursor = 0;
        self.form.clear();
        self.view = View::Login;
        vec![AppAction::Render]
    }

    #[instrument(skip(self, game), fields(session_id = %game.session_id()))]
    fn on_game_started(&mut self, difficulty: Difficulty, game: NewGame) -> Vec<AppAction> {
        self.pending = None;
        let starting_score = self.user.as_ref().map_or(0, |user| *user.score());
        self.game = Some(ActiveGame::new(
            game.session_id().clone(),
            difficulty,
            *game.attempts_left(),
            starting_score,
        ));
        self.view = View::Game;
        self.notice = game
            .message()
            .clone()
            .map(|text| Notice::new(NoticeLevel::Info, text));
        vec![AppAction::Render]
    }

    fn on_guess_evaluated(
        &mut self,
        guess: String,
        outcome: SubmitOutcome,
        message: Option<String>,
    ) -> Vec<AppAction> {
        self.pending = None;
        let Some(game) = self.game.as_mut() else {
            warn!("Guess result without an active game");
            return vec![AppAction::Render];
        };
        game.apply_submit(guess, outcome);
        // Per-attempt messages repeat the feedback; only the verdict is shown.
        if game.status().is_over() {
            self.notice = message.map(|text| Notice::new(NoticeLevel::Info, text));
        }
        vec![AppAction::Render]
    }

    fn on_hint(&mut self, hint: String) -> Vec<AppAction> {
        self.pending = None;
        if let Some(game) = self.game.as_mut() {
            game.apply_hint(hint);
        }
        vec![AppAction::Render]
    }

    fn on_leaderboard(&mut self, players: Vec<LeaderboardEntry>) -> Vec<AppAction> {
        self.pending = None;
        debug!(count = players.len(), "Leaderboard loaded");
        self.leaderboard = Some(players);
        vec![AppAction::Render]
    }

    #[instrument(skip(self))]
    fn on_request_failed(
        &mut self,
        request: RequestKind,
        message: String,
        unauthorized: bool,
    ) -> Vec<AppAction> {
        self.pending = None;
        warn!("Request failed");
        self.notice = Some(Notice::new(
            NoticeLevel::Error,
            format!("Error {}: {}", request.describe(), message),
        ));
        if request == RequestKind::CurrentUser && unauthorized {
            self.user = None;
            self.view = View::Login;
        }
        vec![AppAction::Render]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SessionId;
    use crate::game::GameStatus;

    fn user(score: i64) -> User {
        User::new(
            "ada".to_string(),
            "ada@example.com".to_string(),
            "2024-01-01T00:00:00".to_string(),
            score,
        )
    }

    fn logged_in() -> Coordinator {
        let mut coordinator = Coordinator::new();
        coordinator.boot(true);
        coordinator.handle(AppEvent::UserLoaded(user(1000)));
        coordinator
    }

    fn in_game() -> Coordinator {
        let mut coordinator = logged_in();
        coordinator.handle(AppEvent::Navigate(View::Difficulty));
        coordinator.handle(AppEvent::SelectDifficulty(Difficulty::Medium));
        coordinator.handle(AppEvent::PlayNow);
        coordinator.handle(AppEvent::GameStarted {
            difficulty: Difficulty::Medium,
            game: NewGame::new(SessionId::Numeric(42), 10, None),
        });
        coordinator
    }

    #[test]
    fn test_boot_without_token_shows_login() {
        let mut coordinator = Coordinator::new();
        assert_eq!(coordinator.boot(false), vec![AppAction::Render]);
        assert_eq!(*coordinator.view(), View::Login);
        assert!(!coordinator.is_busy());
    }

    #[test]
    fn test_boot_with_token_lands_on_menu() {
        let coordinator = logged_in();
        assert_eq!(*coordinator.view(), View::Menu);
        assert_eq!(coordinator.user().as_ref().map(|u| *u.score()), Some(1000));
    }

    #[test]
    fn test_expired_token_falls_back_to_login() {
        let mut coordinator = Coordinator::new();
        coordinator.boot(true);
        coordinator.handle(AppEvent::RequestFailed {
            request: RequestKind::CurrentUser,
            message: "Could not validate credentials".to_string(),
            unauthorized: true,
        });
        assert_eq!(*coordinator.view(), View::Login);
        assert_eq!(
            coordinator.notice().as_ref().map(|n| *n.level()),
            Some(NoticeLevel::Error)
        );
    }

    #[test]
    fn test_play_without_difficulty_warns() {
        let mut coordinator = logged_in();
        coordinator.handle(AppEvent::Navigate(View::Difficulty));
        let actions = coordinator.handle(AppEvent::PlayNow);
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(
            coordinator.notice().as_ref().map(|n| n.text().as_str()),
            Some("Please select a difficulty level first!")
        );
    }

    #[test]
    fn test_start_game_requests_session() {
        let mut coordinator = logged_in();
        coordinator.handle(AppEvent::Navigate(View::Difficulty));
        coordinator.handle(AppEvent::SelectDifficulty(Difficulty::Hard));
        let actions = coordinator.handle(AppEvent::PlayNow);
        assert_eq!(
            actions,
            vec![AppAction::Render, AppAction::StartGame(Difficulty::Hard)]
        );
        assert_eq!(*coordinator.pending(), Some(RequestKind::StartGame));
    }

    #[test]
    fn test_game_starts_with_cached_score() {
        let coordinator = in_game();
        assert_eq!(*coordinator.view(), View::Game);
        let game = coordinator.game().as_ref().expect("Game active");
        assert_eq!(*game.session().attempts_left(), 10);
        assert_eq!(*game.session().total_score(), 1000);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_incomplete_submit_makes_no_request() {
        let mut coordinator = in_game();
        coordinator.handle(AppEvent::PressSymbol('1'));
        coordinator.handle(AppEvent::PressSymbol('2'));
        let before = coordinator.game().clone();

        let actions = coordinator.handle(AppEvent::Submit);

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(!coordinator.is_busy());
        assert_eq!(
            coordinator.notice().as_ref().map(|n| n.text().as_str()),
            Some("Please enter 4 digits before submitting")
        );
        let after = coordinator.game().as_ref().expect("Game active");
        let before = before.as_ref().expect("Game active");
        assert_eq!(after.session(), before.session());
        assert_eq!(after.buffer(), before.buffer());
    }

    #[test]
    fn test_keypad_fills_and_backspace_clears() {
        let mut coordinator = in_game();
        assert_eq!(
            coordinator.handle(AppEvent::PressSymbol('1')),
            vec![AppAction::Render]
        );
        assert_eq!(
            coordinator.handle(AppEvent::PressSymbol('2')),
            vec![AppAction::Render]
        );
        let game = coordinator.game().as_ref().expect("Game active");
        assert_eq!(game.buffer().filled(), 2);

        assert_eq!(
            coordinator.handle(AppEvent::RemoveLast),
            vec![AppAction::Render]
        );
        assert_eq!(
            coordinator.handle(AppEvent::RemoveLast),
            vec![AppAction::Render]
        );
        assert!(coordinator.handle(AppEvent::RemoveLast).is_empty());
        let game = coordinator.game().as_ref().expect("Game active");
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn test_keypad_ignored_while_request_pending() {
        let mut coordinator = in_game();
        for symbol in ['1', '2', '3', '4'] {
            coordinator.handle(AppEvent::PressSymbol(symbol));
        }
        coordinator.handle(AppEvent::Submit);
        assert!(coordinator.is_busy());

        assert!(coordinator.handle(AppEvent::RemoveLast).is_empty());
        assert!(coordinator.handle(AppEvent::RequestHint).is_empty());
        let game = coordinator.game().as_ref().expect("Game active");
        assert!(game.buffer().is_complete());
    }

    #[test]
    fn test_failed_submit_leaves_state_unchanged() {
        let mut coordinator = in_game();
        for symbol in ['1', '2', '3', '4'] {
            coordinator.handle(AppEvent::PressSymbol(symbol));
        }
        coordinator.handle(AppEvent::Submit);
        coordinator.handle(AppEvent::RequestFailed {
            request: RequestKind::SubmitGuess,
            message: "Game session not found".to_string(),
            unauthorized: false,
        });

        let game = coordinator.game().as_ref().expect("Game active");
        assert!(game.buffer().is_complete());
        assert!(game.ledger().is_empty());
        assert_eq!(*game.session().attempts_left(), 10);
        assert_eq!(
            coordinator.notice().as_ref().map(|n| n.text().as_str()),
            Some("Error making guess: Game session not found")
        );
        assert!(!coordinator.is_busy());
    }

    #[test]
    fn test_hint_rejected_after_win() {
        let mut coordinator = in_game();
        for symbol in ['1', '2', '3', '4'] {
            coordinator.handle(AppEvent::PressSymbol(symbol));
        }
        coordinator.handle(AppEvent::Submit);
        coordinator.handle(AppEvent::GuessEvaluated {
            guess: "1234".to_string(),
            outcome: SubmitOutcome::Win {
                total_score: Some(5000),
            },
            message: None,
        });

        assert!(coordinator.handle(AppEvent::RequestHint).is_empty());
        let game = coordinator.game().as_ref().expect("Game active");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.hint(), &None);
    }

    #[test]
    fn test_server_messages_shown_on_start_and_verdict() {
        let mut coordinator = logged_in();
        coordinator.handle(AppEvent::Navigate(View::Difficulty));
        coordinator.handle(AppEvent::SelectDifficulty(Difficulty::Easy));
        coordinator.handle(AppEvent::PlayNow);
        coordinator.handle(AppEvent::GameStarted {
            difficulty: Difficulty::Easy,
            game: NewGame::new(SessionId::Numeric(3), 12, Some("Game started".to_string())),
        });
        assert_eq!(
            coordinator.notice().clone(),
            Some(Notice::new(NoticeLevel::Info, "Game started".to_string()))
        );

        for symbol in ['1', '2', '3', '4'] {
            coordinator.handle(AppEvent::PressSymbol(symbol));
        }
        assert!(coordinator.notice().is_none());
        coordinator.handle(AppEvent::Submit);
        coordinator.handle(AppEvent::GuessEvaluated {
            guess: "1234".to_string(),
            outcome: SubmitOutcome::Continue {
                correct_numbers: 1,
                correct_positions: 0,
                attempts_left: Some(11),
                score_delta: None,
                total_score: None,
            },
            message: Some("Attempt registered.".to_string()),
        });
        assert!(coordinator.notice().is_none());

        for symbol in ['4', '3', '2', '1'] {
            coordinator.handle(AppEvent::PressSymbol(symbol));
        }
        coordinator.handle(AppEvent::Submit);
        coordinator.handle(AppEvent::GuessEvaluated {
            guess: "4321".to_string(),
            outcome: SubmitOutcome::Win {
                total_score: Some(3000),
            },
            message: Some("Congratulations, you won".to_string()),
        });
        assert_eq!(
            coordinator.notice().as_ref().map(|n| n.text().as_str()),
            Some("Congratulations, you won")
        );
    }

    #[test]
    fn test_end_game_refetches_profile_then_discards() {
        let mut coordinator = in_game();
        let actions = coordinator.handle(AppEvent::EndGame);
        assert_eq!(
            actions,
            vec![
                AppAction::Render,
                AppAction::FetchUser(RequestKind::EndGame)
            ]
        );
        assert!(coordinator.game().is_some());

        coordinator.handle(AppEvent::UserLoaded(user(2400)));
        assert_eq!(*coordinator.view(), View::Menu);
        assert!(coordinator.game().is_none());
        assert_eq!(coordinator.user().as_ref().map(|u| *u.score()), Some(2400));
    }

    #[test]
    fn test_leaving_game_view_goes_through_end_game() {
        let mut coordinator = in_game();
        let actions = coordinator.handle(AppEvent::Navigate(View::Menu));
        assert_eq!(
            actions,
            vec![
                AppAction::Render,
                AppAction::FetchUser(RequestKind::EndGame)
            ]
        );
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut coordinator = logged_in();
        coordinator.handle(AppEvent::CursorUp);
        assert_eq!(coordinator.selected_menu_option(), MenuOption::Quit);
        coordinator.handle(AppEvent::CursorDown);
        assert_eq!(coordinator.selected_menu_option(), MenuOption::PlayGame);
    }

    #[test]
    fn test_login_flow() {
        let mut coordinator = Coordinator::new();
        coordinator.boot(false);
        for c in "ada".chars() {
            coordinator.handle(AppEvent::TypeChar(c));
        }
        coordinator.handle(AppEvent::NextField);
        for c in "pw".chars() {
            coordinator.handle(AppEvent::TypeChar(c));
        }
        let actions = coordinator.handle(AppEvent::SubmitForm);
        assert!(matches!(actions.as_slice(), [AppAction::Render, AppAction::Login(c)] if c.username == "ada"));

        let actions = coordinator.handle(AppEvent::LoggedIn);
        assert_eq!(
            actions,
            vec![
                AppAction::Render,
                AppAction::FetchUser(RequestKind::CurrentUser)
            ]
        );
        coordinator.handle(AppEvent::UserLoaded(user(0)));
        assert_eq!(*coordinator.view(), View::Menu);
        assert!(coordinator.form().password().is_empty());
    }

    #[test]
    fn test_registration_returns_to_login() {
        let mut coordinator = Coordinator::new();
        coordinator.boot(false);
        coordinator.handle(AppEvent::Navigate(View::Register));
        assert_eq!(*coordinator.view(), View::Register);
        coordinator.handle(AppEvent::Registered(user(0)));
        assert_eq!(*coordinator.view(), View::Login);
        assert_eq!(
            coordinator.notice().as_ref().map(|n| *n.level()),
            Some(NoticeLevel::Info)
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let mut coordinator = logged_in();
        let actions = coordinator.handle(AppEvent::Logout);
        assert_eq!(actions, vec![AppAction::Render, AppAction::Logout]);
        coordinator.handle(AppEvent::LoggedOut);
        assert_eq!(*coordinator.view(), View::Login);
        assert!(coordinator.user().is_none());
    }

    #[test]
    fn test_menu_views_unavailable_before_login() {
        let mut coordinator = Coordinator::new();
        coordinator.boot(false);
        assert!(coordinator.handle(AppEvent::Navigate(View::Leaderboard)).is_empty());
        assert_eq!(*coordinator.view(), View::Login);
    }
}
