//! Credential gate and login screen state

use taxguard_core::Credentials;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password!")]
    InvalidCredentials,
}

/// Decides whether a username/password pair may enter the application
pub trait CredentialPolicy: std::fmt::Debug + Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Placeholder policy: one fixed pair compared by exact equality.
///
/// Not a security boundary. There is no hashing, lockout or rate limiting.
#[derive(Debug, Clone)]
pub struct ConstantCredentialPolicy {
    expected: Credentials,
}

impl ConstantCredentialPolicy {
    pub const DEFAULT_USERNAME: &'static str = "admin";
    pub const DEFAULT_PASSWORD: &'static str = "admin123";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            expected: Credentials::new(username, password),
        }
    }
}

impl Default for ConstantCredentialPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USERNAME, Self::DEFAULT_PASSWORD)
    }
}

impl CredentialPolicy for ConstantCredentialPolicy {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.username == self.expected.username
            && credentials.password == self.expected.password
        {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Login Screen State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
}

/// Inputs and inline error of the login screen
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub credentials: Credentials,
    pub focus: LoginFocus,
    pub error: Option<String>,
}

impl LoginState {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Username,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginFocus::Username => &mut self.credentials.username,
            LoginFocus::Password => &mut self.credentials.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Name of the first empty input, if any
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.credentials.username.is_empty() {
            Some("Username")
        } else if self.credentials.password.is_empty() {
            Some("Password")
        } else {
            None
        }
    }

    /// Password rendered as bullets
    pub fn masked_password(&self) -> String {
        "•".repeat(self.credentials.password.chars().count())
    }
}
