//! Screens of the terminal front end, one per view.

mod auth;
mod difficulty;
mod game;
mod instructions;
mod leaderboard;
mod menu;
mod profile;

pub use auth::AuthScreen;
pub use difficulty::DifficultyScreen;
pub use game::GameScreen;
pub use instructions::InstructionsScreen;
pub use leaderboard::LeaderboardScreen;
pub use menu::MenuScreen;
pub use profile::ProfileScreen;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{Coordinator, NoticeLevel, View};
use crate::tui::Screen;

/// Returns the screen that renders `view`.
pub fn screen_for(view: View) -> &'static dyn Screen {
    match view {
        View::Login => &AuthScreen { registering: false },
        View::Register => &AuthScreen { registering: true },
        View::Menu => &MenuScreen,
        View::Difficulty => &DifficultyScreen,
        View::Game => &GameScreen,
        View::Instructions => &InstructionsScreen,
        View::Leaderboard => &LeaderboardScreen,
        View::Profile => &ProfileScreen,
    }
}

/// Draws the title, status and help bars shared by every screen.
///
/// Returns the area left for the screen body.
pub(crate) fn chrome(frame: &mut Frame, coordinator: &Coordinator, title: &str, help: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let (status_text, status_color) = status_line(coordinator);
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let help = Paragraph::new(help.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    chunks[2]
}

fn status_line(coordinator: &Coordinator) -> (String, Color) {
    if let Some(request) = coordinator.pending() {
        return (format!("Loading... ({})", request.describe()), Color::Yellow);
    }
    if let Some(notice) = coordinator.notice() {
        let color = match notice.level() {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        };
        return (notice.text().clone(), color);
    }
    match coordinator.user() {
        Some(user) => (
            format!("Player: {}   Score: {}", user.username(), user.score()),
            Color::Green,
        ),
        None => ("Not logged in".to_string(), Color::DarkGray),
    }
}
