//! Rules and scoring.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::app::{AppEvent, Coordinator, View};
use crate::game::Difficulty;
use crate::tui::Screen;
use crate::tui::screens::chrome;

/// Static how-to-play page.
#[derive(Debug, Clone, Copy)]
pub struct InstructionsScreen;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

impl Screen for InstructionsScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let body = chrome(
            frame,
            coordinator,
            "How to Play Mastermind",
            "Esc / b: Back to menu | q: Quit",
        );

        let mut lines = vec![
            Line::from("Decipher a secret 4-digit code. Every guess is answered with feedback"),
            Line::from("to help you refine the next one. The game ends when you crack the code"),
            Line::from("or run out of attempts."),
            Line::from(""),
            heading("Feedback"),
            Line::from("  Positions: correct digit in the correct position"),
            Line::from("  Numbers:   correct digit, in any position"),
            Line::from(""),
            heading("Difficulty levels"),
        ];
        lines.extend(
            Difficulty::iter()
                .map(|d| Line::from(format!("  {:<7} {}", d.label(), d.description()))),
        );
        lines.extend([
            Line::from(""),
            heading("Scoring"),
            Line::from("  Points per correct number:   Easy 600 | Medium 800 | Hard 1,200"),
            Line::from("  Points per correct position: Easy 1,200 | Medium 1,600 | Hard 2,400"),
            Line::from("  Scoring lower than your previous attempt costs a penalty:"),
            Line::from("  Easy -50 | Medium -100 | Hard -150"),
            Line::from(""),
            heading("Hints"),
            Line::from("  Press h during a game for a hint based on your previous attempts."),
        ]);

        let text = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(text, body);
    }

    #[instrument(skip(self, key, _coordinator))]
    fn handle_key(&self, key: KeyEvent, _coordinator: &Coordinator) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
                Some(AppEvent::Navigate(View::Menu))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppEvent::Quit),
            _ => None,
        }
    }
}
