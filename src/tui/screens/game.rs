//! Game screen: keypad on the left, guess, counters and history on the right.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use tracing::instrument;

use crate::app::{AppEvent, Coordinator};
use crate::game::{ActiveGame, GameStatus};
use crate::tui::Screen;
use crate::tui::screens::chrome;

const KEYPAD_COLUMNS: usize = 5;

/// Keypad, current guess and attempt history of the active game.
#[derive(Debug, Clone, Copy)]
pub struct GameScreen;

impl Screen for GameScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let playing = coordinator
            .game()
            .as_ref()
            .is_some_and(|game| game.status() == GameStatus::Playing);
        let help = if playing {
            "Digits: Guess | Backspace: Delete | Enter: Submit | h: Hint | Esc: Leave game"
        } else {
            "Enter / Esc: Back to menu | q: Quit"
        };
        let body = chrome(frame, coordinator, "Mastermind", help);

        let Some(game) = coordinator.game() else {
            let empty = Paragraph::new("No game in progress.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, body);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(body);

        render_keypad(frame, columns[0], game);
        render_display(frame, columns[1], game);
    }

    #[instrument(skip(self, key, coordinator))]
    fn handle_key(&self, key: KeyEvent, coordinator: &Coordinator) -> Option<AppEvent> {
        let over = coordinator
            .game()
            .as_ref()
            .is_none_or(|game| game.status().is_over());
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(AppEvent::PressSymbol(c)),
            KeyCode::Backspace | KeyCode::Delete => Some(AppEvent::RemoveLast),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(AppEvent::RequestHint),
            KeyCode::Enter if over => Some(AppEvent::EndGame),
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Esc => Some(AppEvent::EndGame),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppEvent::Quit),
            _ => None,
        }
    }
}

fn render_keypad(frame: &mut Frame, area: Rect, game: &ActiveGame) {
    let difficulty = *game.session().difficulty();
    let enabled = game.buffer().is_enabled();
    let key_style = if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines: Vec<Line> = difficulty
        .symbols()
        .chunks(KEYPAD_COLUMNS)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|symbol| Span::styled(format!(" [{}] ", symbol), key_style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [⌫] Delete   [h] Hint   [⏎] Submit",
        Style::default().fg(Color::Cyan),
    )));

    let keypad = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Keypad - {}", difficulty.label())),
        );
    frame.render_widget(keypad, area);
}

fn render_display(frame: &mut Frame, area: Rect, game: &ActiveGame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    let slots: Vec<Span> = game
        .buffer()
        .slots()
        .iter()
        .map(|slot| {
            Span::styled(
                format!(" [{}] ", slot.unwrap_or('_')),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    let guess = Paragraph::new(Line::from(slots))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your guess"));
    frame.render_widget(guess, rows[0]);

    let session = game.session();
    let (banner, banner_color) = match session.status() {
        GameStatus::Playing => (
            format!(
                "Attempts left: {}   Total score: {}",
                session.attempts_left(),
                session.total_score()
            ),
            Color::Green,
        ),
        GameStatus::Won => (
            format!(
                "You cracked the code! Total score: {}",
                session.total_score()
            ),
            Color::Green,
        ),
        GameStatus::Lost => (
            format!(
                "Out of attempts. Game over. Total score: {}",
                session.total_score()
            ),
            Color::Red,
        ),
    };
    let status = Paragraph::new(banner)
        .style(Style::default().fg(banner_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, rows[1]);

    let hint_text = game
        .hint()
        .clone()
        .unwrap_or_else(|| "Press h for a hint.".to_string());
    let hint = Paragraph::new(hint_text)
        .style(Style::default().fg(Color::Magenta))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Hint"));
    frame.render_widget(hint, rows[2]);

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Guess").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Positions").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Numbers").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Score").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let history: Vec<Row> = game
        .ledger()
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            let delta = match attempt.score_delta() {
                Some(delta) => format!("{:+}", delta),
                None => "-".to_string(),
            };
            let delta_color = match attempt.score_delta() {
                Some(delta) if *delta < 0 => Color::Red,
                Some(_) => Color::Green,
                None => Color::White,
            };
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(attempt.guess().as_str()),
                Cell::from(attempt.correct_positions().to_string()).style(Style::default().fg(Color::Green)),
                Cell::from(attempt.correct_numbers().to_string()).style(Style::default().fg(Color::Yellow)),
                Cell::from(delta).style(Style::default().fg(delta_color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Min(6),
    ];
    let table = Table::new(history, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Attempts"));
    frame.render_widget(table, rows[3]);
}
