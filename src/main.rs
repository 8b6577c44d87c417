//! Mastermind TUI - Unified CLI
//!
//! Interactive terminal client plus scriptable account and leaderboard commands.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use mastermind_tui::{
    ClientConfig, Credentials, GameApi, Registration, RestApiClient, Runtime, tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info,mastermind_tui=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play);

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.api_url.clone(), cli.token_path.clone())?;

    match command {
        Command::Play => init_file_logging(config.log_path())?,
        _ => init_stderr_logging(),
    }
    info!(
        api_base_url = %config.api_base_url(),
        token_path = %config.resolved_token_path().display(),
        "Configuration resolved"
    );

    let api = RestApiClient::new(config.api_base_url().clone(), config.token_store());

    match command {
        Command::Play => tui::run_tui(Runtime::new(api)).await,
        Command::Login { username, password } => run_login(&api, username, password).await,
        Command::Register {
            username,
            email,
            password,
        } => run_register(&api, username, email, password).await,
        Command::Logout => run_logout(&api).await,
        Command::Whoami => run_whoami(&api).await,
        Command::Leaderboard => run_leaderboard(&api).await,
    }
}

/// Logs to a file so the terminal UI is not overwritten.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log in and store the token
#[instrument(skip(api, password))]
async fn run_login(api: &RestApiClient, username: String, password: String) -> Result<()> {
    api.login(&Credentials::new(username, password))
        .await
        .context("Login failed")?;
    let user = api
        .current_user()
        .await
        .context("Logged in, but loading the account failed")?;
    println!("Logged in as {}", user.username());
    Ok(())
}

/// Create an account
#[instrument(skip(api, password))]
async fn run_register(
    api: &RestApiClient,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let user = api
        .register(&Registration::new(username, email, password))
        .await
        .context("Registration failed")?;
    println!(
        "Account created for {}. Log in with `mastermind_tui login -u {}`.",
        user.username(),
        user.username()
    );
    Ok(())
}

/// Remove the stored token
#[instrument(skip(api))]
async fn run_logout(api: &RestApiClient) -> Result<()> {
    api.logout().await.context("Logout failed")?;
    println!("Logged out");
    Ok(())
}

/// Show the logged-in account
#[instrument(skip(api))]
async fn run_whoami(api: &RestApiClient) -> Result<()> {
    let user = api.current_user().await.context("Loading the account failed")?;
    println!("Username:     {}", user.username());
    println!("Email:        {}", user.email());
    println!("Member since: {}", user.member_since());
    println!("Total score:  {}", user.score());
    Ok(())
}

/// Show the top players
#[instrument(skip(api))]
async fn run_leaderboard(api: &RestApiClient) -> Result<()> {
    let players = api
        .leaderboard()
        .await
        .context("Loading the leaderboard failed")?;
    if players.is_empty() {
        println!("No scores yet.");
    }
    for (i, entry) in players.iter().enumerate() {
        println!("#{:<3} {:<24} {:>8}", i + 1, entry.display_name(), entry.score());
    }
    Ok(())
}
