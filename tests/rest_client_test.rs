//! Tests for the REST client against an in-process mock of the game API.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tempfile::TempDir;

use mastermind_tui::{
    ApiError, AppEvent, Coordinator, Credentials, Difficulty, GameApi, GameStatus, RestApiClient,
    Runtime, SessionId, SubmitOutcome, TokenStore, View,
};

const TOKEN: &str = "tok-123";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Could not validate credentials"})),
    )
        .into_response()
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "id": 1,
        "username": "ada",
        "email": "ada@example.com",
        "created_at": "2024-03-05T10:20:30.123456",
        "score": 2400
    }))
    .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "ada" && body["password"] == "pw" {
        Json(json!({"access_token": TOKEN, "token_type": "bearer"})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect username or password"})),
        )
            .into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    Json(json!({
        "username": body["username"],
        "email": body["email"],
        "created_at": "2024-03-05T10:20:30"
    }))
    .into_response()
}

async fn start_game(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let attempts = match params.get("difficulty_level").map(String::as_str) {
        Some("1") => 12,
        Some("2") => 10,
        Some("3") => 8,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Invalid difficulty level"})),
            )
                .into_response();
        }
    };
    Json(json!({"session_id": 5, "attempts_left": attempts, "message": "Game started"}))
        .into_response()
}

async fn guess(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if body["session_id"] != json!(5) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Game session not found"})),
        )
            .into_response();
    }
    match body["guessed_number"].as_str() {
        Some("4321") => Json(json!({
            "message": "Congratulations, you won",
            "result": "WIN",
            "total_score": 9000
        }))
        .into_response(),
        Some("0000") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => Json(json!({
            "message": "Attempt registered.",
            "score_this_attempt": 800,
            "total_score": 3200,
            "result": {"correct_numbers": 2, "correct_positions": 1},
            "attempts_left": 9,
            "history": []
        }))
        .into_response(),
    }
}

async fn hint(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"hint": format!("Session {} starts with 4", body)})).into_response()
}

async fn top_players(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "top_players": [
            {"id": 1, "user_id": 3, "score": 9000, "user": {"username": "grace"}},
            {"id": 2, "user_id": 8, "score": 500}
        ]
    }))
    .into_response()
}

/// Starts the mock API on an ephemeral port and returns its base URL.
async fn spawn_mock_api() -> String {
    let app = Router::new()
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/game/start_game/", post(start_game))
        .route("/api/v1/game/guess/", post(guess))
        .route("/api/v1/game/get_ai_hint/", post(hint))
        .route("/api/v1/game/top_players/", get(top_players));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock API failed");
    });
    format!("http://{}/api/v1", addr)
}

/// Creates a client with an empty token store in a temporary directory.
async fn setup_client() -> (TempDir, RestApiClient) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let tokens = TokenStore::new(dir.path().join("token"));
    let client = RestApiClient::new(spawn_mock_api().await, tokens);
    (dir, client)
}

async fn logged_in_client() -> (TempDir, RestApiClient) {
    let (dir, client) = setup_client().await;
    client
        .login(&Credentials::new("ada".to_string(), "pw".to_string()))
        .await
        .expect("Login failed");
    (dir, client)
}

#[tokio::test]
async fn test_missing_token_fails_without_network() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens on the discard port; a request would fail as Transport.
    let client = RestApiClient::new(
        "http://127.0.0.1:9/api/v1".to_string(),
        TokenStore::new(dir.path().join("token")),
    );
    assert!(!client.has_credential());
    assert_eq!(client.current_user().await, Err(ApiError::MissingCredential));
    assert_eq!(
        client.start_game(Difficulty::Easy).await,
        Err(ApiError::MissingCredential)
    );
}

#[tokio::test]
async fn test_login_stores_token_and_sends_bearer() {
    let (dir, client) = logged_in_client().await;
    assert!(client.has_credential());
    let stored = std::fs::read_to_string(dir.path().join("token")).unwrap();
    assert_eq!(stored.trim(), TOKEN);

    let user = client.current_user().await.expect("Current user failed");
    assert_eq!(user.username(), "ada");
    assert_eq!(*user.score(), 2400);
    assert_eq!(user.member_since(), "March 5, 2024");
}

#[tokio::test]
async fn test_failed_login_surfaces_detail() {
    let (_dir, client) = setup_client().await;
    let err = client
        .login(&Credentials::new("ada".to_string(), "wrong".to_string()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Api {
            status: 401,
            detail: "Incorrect username or password".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Incorrect username or password");
    assert!(!client.has_credential());
}

#[tokio::test]
async fn test_stale_token_is_unauthorized() {
    let (dir, client) = setup_client().await;
    std::fs::write(dir.path().join("token"), "expired").unwrap();
    let err = client.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Could not validate credentials");
}

#[tokio::test]
async fn test_register_without_score() {
    let (_dir, client) = setup_client().await;
    let user = client
        .register(&mastermind_tui::Registration::new(
            "grace".to_string(),
            "grace@example.com".to_string(),
            "pw".to_string(),
        ))
        .await
        .expect("Register failed");
    assert_eq!(user.username(), "grace");
    assert_eq!(*user.score(), 0);
}

#[tokio::test]
async fn test_game_round_trip() {
    let (_dir, client) = logged_in_client().await;

    let game = client.start_game(Difficulty::Medium).await.unwrap();
    assert_eq!(*game.session_id(), SessionId::Numeric(5));
    assert_eq!(*game.attempts_left(), 10);

    let response = client.submit_guess(game.session_id(), "1234").await.unwrap();
    assert_eq!(
        response.outcome(),
        SubmitOutcome::Continue {
            correct_numbers: 2,
            correct_positions: 1,
            attempts_left: Some(9),
            score_delta: Some(800),
            total_score: Some(3200),
        }
    );

    let hint = client.request_hint(game.session_id()).await.unwrap();
    assert_eq!(hint, "Session 5 starts with 4");

    let response = client.submit_guess(game.session_id(), "4321").await.unwrap();
    assert_eq!(
        response.outcome(),
        SubmitOutcome::Win {
            total_score: Some(9000)
        }
    );
}

#[tokio::test]
async fn test_error_without_detail_reports_status() {
    let (_dir, client) = logged_in_client().await;
    let err = client
        .submit_guess(&SessionId::Numeric(5), "0000")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "API error (500)");
}

#[tokio::test]
async fn test_unknown_session_detail() {
    let (_dir, client) = logged_in_client().await;
    let err = client
        .submit_guess(&SessionId::Text("nope".to_string()), "1234")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Game session not found");
}

#[tokio::test]
async fn test_leaderboard_rows() {
    let (_dir, client) = logged_in_client().await;
    let players = client.leaderboard().await.unwrap();
    let names: Vec<String> = players.iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["grace".to_string(), "Player 8".to_string()]);
}

#[tokio::test]
async fn test_logout_removes_token() {
    let (_dir, client) = logged_in_client().await;
    client.logout().await.unwrap();
    assert!(!client.has_credential());
    assert_eq!(client.current_user().await, Err(ApiError::MissingCredential));
}

#[tokio::test]
async fn test_runtime_plays_against_http_api() {
    let (_dir, client) = logged_in_client().await;
    let runtime = Runtime::new(client);
    let mut coordinator = Coordinator::new();
    let mut renders = 0usize;
    let mut render = |_: &Coordinator| -> anyhow::Result<()> {
        renders += 1;
        Ok(())
    };

    runtime.start(&mut coordinator, &mut render).await.unwrap();
    assert_eq!(*coordinator.view(), View::Menu);

    let events = [
        AppEvent::Navigate(View::Difficulty),
        AppEvent::SelectDifficulty(Difficulty::Hard),
        AppEvent::PlayNow,
        AppEvent::PressSymbol('4'),
        AppEvent::PressSymbol('3'),
        AppEvent::PressSymbol('2'),
        AppEvent::PressSymbol('1'),
        AppEvent::Submit,
    ];
    for event in events {
        let quit = runtime
            .dispatch(&mut coordinator, event, &mut render)
            .await
            .unwrap();
        assert!(!quit);
    }

    let game = coordinator.game().as_ref().expect("Game active");
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(*game.session().total_score(), 9000);
    assert!(renders > 0);
}
