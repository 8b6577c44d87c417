//! Difficulty selector.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::app::{AppEvent, Coordinator, View};
use crate::game::Difficulty;
use crate::tui::Screen;
use crate::tui::screens::chrome;

/// Lists the three levels; one must be picked before playing.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyScreen;

impl Screen for DifficultyScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let body = chrome(
            frame,
            coordinator,
            "Mastermind - Choose Difficulty",
            "↑↓ / 1-3: Select | Enter / p: Play | Esc / b: Back | q: Quit",
        );

        let selected = *coordinator.selected_difficulty();
        let items: Vec<ListItem> = Difficulty::iter()
            .map(|difficulty| {
                let marker = if selected == Some(difficulty) { "(•)" } else { "( )" };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} {}. ", marker, difficulty.level())),
                    Span::styled(
                        format!("{:<8}", difficulty.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(difficulty.description(), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Difficulty"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let mut list_state = ListState::default();
        list_state.select(selected.map(|d| usize::from(d.level()) - 1));
        frame.render_stateful_widget(list, body, &mut list_state);
    }

    #[instrument(skip(self, key, _coordinator))]
    fn handle_key(&self, key: KeyEvent, _coordinator: &Coordinator) -> Option<AppEvent> {
        match key.code {
            KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Down => Some(AppEvent::CursorDown),
            KeyCode::Char(c @ '1'..='3') => c
                .to_digit(10)
                .and_then(|level| Difficulty::from_level(level as u8))
                .map(AppEvent::SelectDifficulty),
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(AppEvent::PlayNow),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                Some(AppEvent::Navigate(View::Menu))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppEvent::Quit),
            _ => None,
        }
    }
}
