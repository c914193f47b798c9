//! Screen navigation
//!
//! The four screens are a closed set and only the transitions listed in
//! [`navigate`] exist. Each screen owns its state, so leaving a screen drops
//! whatever it held: the detection form is rebuilt empty on every entry and
//! an in-flight request is cancelled when its form goes away.

use chrono::{DateTime, Local};
use taxguard_core::prelude::*;
use taxguard_core::{ModelType, PredictionOutcome};

use crate::auth::LoginState;
use crate::form::DetectionForm;

/// Data shown on the result screen
#[derive(Debug, Clone)]
pub struct ResultScreen {
    pub outcome: PredictionOutcome,
    pub model: ModelType,
    pub received_at: DateTime<Local>,
}

/// The active screen and the state it owns
#[derive(Debug)]
pub enum Screen {
    Login(LoginState),
    Welcome,
    Detection(DetectionForm),
    Result(ResultScreen),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login(LoginState::default())
    }
}

/// Discriminant of [`Screen`], for matching without borrowing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Login,
    Welcome,
    Detection,
    Result,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Login(_) => ScreenKind::Login,
            Screen::Welcome => ScreenKind::Welcome,
            Screen::Detection(_) => ScreenKind::Detection,
            Screen::Result(_) => ScreenKind::Result,
        }
    }
}

impl ScreenKind {
    pub fn title(&self) -> &'static str {
        match self {
            ScreenKind::Login => "Login",
            ScreenKind::Welcome => "Welcome",
            ScreenKind::Detection => "Fraud Detection",
            ScreenKind::Result => "Detection Result",
        }
    }
}

/// Input to the navigator
#[derive(Debug, Clone)]
pub enum NavEvent {
    LoginSucceeded,
    Enter,
    SubmitResolved {
        outcome: PredictionOutcome,
        model: ModelType,
        received_at: DateTime<Local>,
    },
    Retry,
    Home,
}

impl NavEvent {
    fn name(&self) -> &'static str {
        match self {
            NavEvent::LoginSucceeded => "LoginSucceeded",
            NavEvent::Enter => "Enter",
            NavEvent::SubmitResolved { .. } => "SubmitResolved",
            NavEvent::Retry => "Retry",
            NavEvent::Home => "Home",
        }
    }
}

/// Compute the next screen.
///
/// | from      | event          | to                 |
/// |-----------|----------------|--------------------|
/// | Login     | LoginSucceeded | Welcome            |
/// | Welcome   | Enter          | Detection (empty)  |
/// | Detection | SubmitResolved | Result             |
/// | Result    | Retry          | Detection (empty)  |
/// | Result    | Home           | Welcome            |
///
/// Every other pair returns `current` unchanged.
pub fn navigate(current: Screen, event: NavEvent) -> Screen {
    match (current, event) {
        (Screen::Login(_), NavEvent::LoginSucceeded) => Screen::Welcome,
        (Screen::Welcome, NavEvent::Enter) => Screen::Detection(DetectionForm::new()),
        (
            Screen::Detection(_),
            NavEvent::SubmitResolved {
                outcome,
                model,
                received_at,
            },
        ) => Screen::Result(ResultScreen {
            outcome,
            model,
            received_at,
        }),
        (Screen::Result(_), NavEvent::Retry) => Screen::Detection(DetectionForm::new()),
        (Screen::Result(_), NavEvent::Home) => Screen::Welcome,
        (current, event) => {
            debug!(
                "Ignoring navigation event {} on {} screen",
                event.name(),
                current.kind().title()
            );
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxguard_core::{FormField, PredictionError};

    fn resolved() -> NavEvent {
        NavEvent::SubmitResolved {
            outcome: Err(PredictionError::network("refused")),
            model: ModelType::DecisionTree,
            received_at: Local::now(),
        }
    }

    fn result_screen() -> Screen {
        navigate(Screen::Detection(DetectionForm::new()), resolved())
    }

    #[test]
    fn test_default_is_login() {
        assert_eq!(Screen::default().kind(), ScreenKind::Login);
    }

    #[test]
    fn test_happy_path() {
        let screen = navigate(Screen::default(), NavEvent::LoginSucceeded);
        assert_eq!(screen.kind(), ScreenKind::Welcome);

        let screen = navigate(screen, NavEvent::Enter);
        assert_eq!(screen.kind(), ScreenKind::Detection);

        let screen = navigate(screen, resolved());
        match &screen {
            Screen::Result(r) => {
                assert_eq!(r.model, ModelType::DecisionTree);
                assert!(r.outcome.is_err());
            }
            other => panic!("expected result screen, got {:?}", other.kind()),
        }

        let screen = navigate(screen, NavEvent::Home);
        assert_eq!(screen.kind(), ScreenKind::Welcome);
    }

    #[test]
    fn test_retry_gives_empty_form() {
        let screen = navigate(result_screen(), NavEvent::Retry);
        match screen {
            Screen::Detection(form) => {
                assert!(form.record.get(FormField::IncomeDeclared).is_empty());
                assert!(form.record.model_type.is_none());
                assert!(!form.is_loading());
            }
            other => panic!("expected detection screen, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_unlisted_pairs_are_noops() {
        let cases: Vec<(Screen, NavEvent, ScreenKind)> = vec![
            (Screen::default(), NavEvent::Enter, ScreenKind::Login),
            (Screen::default(), NavEvent::Home, ScreenKind::Login),
            (Screen::default(), resolved(), ScreenKind::Login),
            (Screen::Welcome, NavEvent::LoginSucceeded, ScreenKind::Welcome),
            (Screen::Welcome, NavEvent::Retry, ScreenKind::Welcome),
            (Screen::Welcome, resolved(), ScreenKind::Welcome),
            (
                Screen::Detection(DetectionForm::new()),
                NavEvent::Home,
                ScreenKind::Detection,
            ),
            (
                Screen::Detection(DetectionForm::new()),
                NavEvent::Enter,
                ScreenKind::Detection,
            ),
            (result_screen(), NavEvent::Enter, ScreenKind::Result),
            (result_screen(), resolved(), ScreenKind::Result),
        ];

        for (screen, event, expected) in cases {
            let label = format!("{:?} on {:?}", event.name(), screen.kind());
            assert_eq!(navigate(screen, event).kind(), expected, "{label}");
        }
    }

    #[test]
    fn test_noop_keeps_screen_state() {
        let mut form = DetectionForm::new();
        form.record.update_field(FormField::Expenses, "321");

        match navigate(Screen::Detection(form), NavEvent::Home) {
            Screen::Detection(form) => assert_eq!(form.record.expenses, "321"),
            other => panic!("expected detection screen, got {:?}", other.kind()),
        }
    }
}
