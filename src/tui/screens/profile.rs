//! Account details.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::app::{AppEvent, Coordinator, View};
use crate::tui::Screen;
use crate::tui::screens::chrome;

/// Cached user record, refreshed when the view opens.
#[derive(Debug, Clone, Copy)]
pub struct ProfileScreen;

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

impl Screen for ProfileScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let body = chrome(
            frame,
            coordinator,
            "Mastermind - Profile",
            "r: Refresh | Esc / b: Back to menu | q: Quit",
        );

        let lines = match coordinator.user() {
            Some(user) => vec![
                field("Username", user.username().clone()),
                field("Email", user.email().clone()),
                field("Member since", user.member_since()),
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        format!("{:<14}", "Total score"),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        user.score().to_string(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
            None => vec![Line::from("Profile unavailable. Press r to retry.")],
        };

        let profile =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Account"));
        frame.render_widget(profile, body);
    }

    #[instrument(skip(self, key, _coordinator))]
    fn handle_key(&self, key: KeyEvent, _coordinator: &Coordinator) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(AppEvent::Refresh),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                Some(AppEvent::Navigate(View::Menu))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppEvent::Quit),
            _ => None,
        }
    }
}
