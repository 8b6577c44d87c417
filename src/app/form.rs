//! Login and registration form state.

use derive_getters::Getters;

use crate::api::{Credentials, Registration};

/// Field of the authentication form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    /// Account name.
    #[default]
    Username,
    /// Contact address (registration only).
    Email,
    /// Password, rendered masked.
    Password,
}

/// Text typed into the login or registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct AuthForm {
    username: String,
    email: String,
    password: String,
    focus: AuthField,
}

impl AuthForm {
    /// Creates an empty form focused on the username.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the focused field.
    pub fn type_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Deletes the last character of the focused field.
    pub fn erase(&mut self) {
        self.focused_mut().pop();
    }

    /// Moves focus to the next field. The email field is skipped when logging in.
    pub fn next_field(&mut self, registering: bool) {
        self.focus = match (self.focus, registering) {
            (AuthField::Username, true) => AuthField::Email,
            (AuthField::Username, false) => AuthField::Password,
            (AuthField::Email, _) => AuthField::Password,
            (AuthField::Password, _) => AuthField::Username,
        };
    }

    /// Login body, if username and password are filled.
    pub fn credentials(&self) -> Option<Credentials> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(Credentials::new(username.to_string(), self.password.clone()))
    }

    /// Registration body, if every field is filled.
    pub fn registration(&self) -> Option<Registration> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() || self.password.is_empty() {
            return None;
        }
        Some(Registration::new(
            username.to_string(),
            email.to_string(),
            self.password.clone(),
        ))
    }

    /// Clears the password and returns focus to the username, keeping the name.
    pub fn clear_secret(&mut self) {
        self.password.clear();
        self.focus = AuthField::Username;
    }

    /// Clears every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_follows_focus() {
        let mut form = AuthForm::new();
        for c in "ada".chars() {
            form.type_char(c);
        }
        form.next_field(false);
        assert_eq!(*form.focus(), AuthField::Password);
        for c in "pw1".chars() {
            form.type_char(c);
        }
        form.erase();
        assert_eq!(
            form.credentials(),
            Some(Credentials::new("ada".to_string(), "pw".to_string()))
        );
    }

    #[test]
    fn test_registration_requires_email() {
        let mut form = AuthForm::new();
        form.type_char('a');
        form.next_field(true);
        assert_eq!(*form.focus(), AuthField::Email);
        form.next_field(true);
        form.type_char('p');
        assert_eq!(form.registration(), None);
        assert!(form.credentials().is_some());
    }
}
