//! Main menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::app::{AppEvent, Coordinator, MenuOption, View};
use crate::tui::Screen;
use crate::tui::screens::chrome;

/// Hub shown after login.
#[derive(Debug, Clone, Copy)]
pub struct MenuScreen;

impl Screen for MenuScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let body = chrome(
            frame,
            coordinator,
            "Mastermind - Menu",
            "↑↓: Navigate | Enter: Select | 1-4: Shortcuts | l: Log out | q: Quit",
        );

        let items: Vec<ListItem> = MenuOption::iter()
            .map(|option| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<14}", option.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(option.description(), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(*coordinator.menu_cursor()));
        frame.render_stateful_widget(menu, body, &mut list_state);
    }

    #[instrument(skip(self, key, _coordinator))]
    fn handle_key(&self, key: KeyEvent, _coordinator: &Coordinator) -> Option<AppEvent> {
        match key.code {
            KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Down => Some(AppEvent::CursorDown),
            KeyCode::Enter => Some(AppEvent::Confirm),
            KeyCode::Char('1') => Some(AppEvent::Navigate(View::Difficulty)),
            KeyCode::Char('2') => Some(AppEvent::Navigate(View::Instructions)),
            KeyCode::Char('3') => Some(AppEvent::Navigate(View::Leaderboard)),
            KeyCode::Char('4') => Some(AppEvent::Navigate(View::Profile)),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(AppEvent::Logout),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }
}
