//! Command-line interface for mastermind_tui.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mastermind - terminal client for the Mastermind game service
#[derive(Parser, Debug)]
#[command(name = "mastermind_tui")]
#[command(about = "Terminal client for the Mastermind number-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. http://localhost:8000/api/v1
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Token file location
    #[arg(long, global = true)]
    pub token_path: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive terminal UI
    Play,

    /// Log in and store the token
    Login {
        /// Account name
        #[arg(short, long)]
        username: String,

        /// Password (read from MASTERMIND_PASSWORD if omitted)
        #[arg(short, long, env = "MASTERMIND_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account
    Register {
        /// Account name
        #[arg(short, long)]
        username: String,

        /// Contact address
        #[arg(short, long)]
        email: String,

        /// Password (read from MASTERMIND_PASSWORD if omitted)
        #[arg(short, long, env = "MASTERMIND_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Remove the stored token
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Show the top players
    Leaderboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["mastermind_tui"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mastermind_tui",
            "whoami",
            "--api-url",
            "http://example.test/api/v1",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Whoami));
        assert_eq!(cli.api_url.as_deref(), Some("http://example.test/api/v1"));
    }

    #[test]
    fn test_login_arguments() {
        let cli = Cli::try_parse_from(["mastermind_tui", "login", "-u", "ada", "-p", "secret"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Login {
                username: "ada".to_string(),
                password: "secret".to_string(),
            })
        );
    }
}
