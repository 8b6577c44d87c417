//! Login and registration forms.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::app::{AppEvent, AuthField, Coordinator, View};
use crate::tui::Screen;
use crate::tui::screens::chrome;

/// Username/password form, with an email field when registering.
#[derive(Debug, Clone, Copy)]
pub struct AuthScreen {
    /// Shows the registration form instead of the login form.
    pub registering: bool,
}

impl AuthScreen {
    fn fields(&self) -> &'static [AuthField] {
        if self.registering {
            &[AuthField::Username, AuthField::Email, AuthField::Password]
        } else {
            &[AuthField::Username, AuthField::Password]
        }
    }
}

impl Screen for AuthScreen {
    #[instrument(skip(self, frame, coordinator))]
    fn render(&self, frame: &mut Frame, coordinator: &Coordinator) {
        let (title, help) = if self.registering {
            (
                "Mastermind - Create Account",
                "Tab: Next field | Enter: Register | F2 / Esc: Back to login",
            )
        } else {
            (
                "Mastermind - Login",
                "Tab: Next field | Enter: Log in | F2: Create account | Esc: Quit",
            )
        };
        let body = chrome(frame, coordinator, title, help);

        let fields = self.fields();
        let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(body);

        let form = coordinator.form();
        for (field, area) in fields.iter().zip(rows.iter()) {
            let (label, value) = match field {
                AuthField::Username => ("Username", form.username().clone()),
                AuthField::Email => ("Email", form.email().clone()),
                AuthField::Password => ("Password", "*".repeat(form.password().chars().count())),
            };
            let focused = form.focus() == field;
            let style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let text = if focused { format!("{}_", value) } else { value };
            let input = Paragraph::new(text)
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(label));
            frame.render_widget(input, *area);
        }
    }

    #[instrument(skip(self, key, _coordinator))]
    fn handle_key(&self, key: KeyEvent, _coordinator: &Coordinator) -> Option<AppEvent> {
        match key.code {
            KeyCode::Enter => Some(AppEvent::SubmitForm),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => Some(AppEvent::NextField),
            KeyCode::Backspace => Some(AppEvent::Erase),
            KeyCode::F(2) if self.registering => Some(AppEvent::Navigate(View::Login)),
            KeyCode::F(2) => Some(AppEvent::Navigate(View::Register)),
            KeyCode::Esc if self.registering => Some(AppEvent::Navigate(View::Login)),
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char(c) => Some(AppEvent::TypeChar(c)),
            _ => None,
        }
    }
}
