//! Top players.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::instrument;

use crate::app::{AppEvent, Coordinator, View};
use crate::tui::Screen;
use crate::tui::screens::chrome;

/// Ranked list fetched when the view opens.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardScreen;

impl Screen for LeaderboardScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let body = chrome(
            frame,
            coordinator,
            "Mastermind - Leaderboard",
            "r: Refresh | Esc / b: Back to menu | q: Quit",
        );

        let players = match coordinator.leaderboard() {
            Some(players) if !players.is_empty() => players,
            other => {
                let text = match (other, coordinator.is_busy()) {
                    (_, true) => "Loading...",
                    (Some(_), false) => "No scores yet. Be the first!",
                    (None, false) => "Leaderboard unavailable. Press r to retry.",
                };
                let empty = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).title("Top Players"));
                frame.render_widget(empty, body);
                return;
            }
        };

        let header = Row::new(vec![
            Cell::from("Rank").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Player").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Score").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let current = coordinator.user().as_ref().map(|user| user.username().as_str());
        let rows: Vec<Row> = players
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let name = entry.display_name();
                let style = if Some(name.as_str()) == current {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(format!("#{}", i + 1)),
                    Cell::from(name),
                    Cell::from(entry.score().to_string()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(60),
            Constraint::Min(8),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Top Players"));
        frame.render_widget(table, body);
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
