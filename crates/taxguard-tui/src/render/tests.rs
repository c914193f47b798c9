//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use chrono::Local;
use taxguard_app::navigator::{ResultScreen, Screen};
use taxguard_app::state::AppState;
use taxguard_app::DetectionForm;
use taxguard_core::{
    ContributingFactor, Direction, FeatureValues, ModelType, PredictionError, PredictionReport,
};

fn report(fraud: bool) -> PredictionReport {
    PredictionReport {
        fraud_detected: fraud,
        confidence: 0.87,
        threshold: 0.5,
        top_contributing_factors: vec![
            ContributingFactor {
                feature: "luxurySpending".into(),
                value: 12000.0,
                importance: 0.42,
                direction: Direction::High,
            },
            ContributingFactor {
                feature: "onlineSpending".into(),
                value: 800.0,
                importance: 0.17,
                direction: Direction::Low,
            },
        ],
        feature_values: FeatureValues {
            income_difference: 5000.0,
            spending_to_income_ratio: 0.91,
            income_to_expense_ratio: 0.8,
        },
    }
}

fn state_on(screen: Screen) -> AppState {
    let mut state = AppState::new();
    state.screen = screen;
    state
}

fn result_state(outcome: taxguard_core::PredictionOutcome) -> AppState {
    state_on(Screen::Result(ResultScreen {
        outcome,
        model: ModelType::RandomForest,
        received_at: Local::now(),
    }))
}

#[test]
fn test_login_screen() {
    let state = AppState::new();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Username"));
    assert!(term.buffer_contains("Password"));
    assert!(term.buffer_contains("Tax Fraud Detection System"));
}

#[test]
fn test_welcome_screen() {
    let state = state_on(Screen::Welcome);
    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Press Enter to start detection"));
}

#[test]
fn test_detection_screen() {
    let state = state_on(Screen::Detection(DetectionForm::new()));
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Income Declared"));
    assert!(term.buffer_contains("Employee Salary"));
    assert!(term.buffer_contains("Fraud Detection"));
}

#[test]
fn test_fraud_result_screen() {
    let state = result_state(Ok(report(true)));
    let mut term = TestTerminal::with_size(120, 32);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Model Used: Random Forest"));
    assert!(term.buffer_contains("FRAUD DETECTED!"));
    assert!(term.buffer_contains("Confidence Level: 87.00%"));
    assert!(term.buffer_contains("Threshold: 50.00%"));
    assert!(term.buffer_contains("luxurySpending"));
    assert!(term.buffer_contains("12000.00"));
    assert!(term.buffer_contains("42.00%"));
    assert!(term.buffer_contains("high"));
    assert!(term.buffer_contains("$5000.00"));
    assert!(term.buffer_contains("91.00%"));
    assert!(term.buffer_contains("0.80"));
    assert!(term.buffer_contains("suspicious"));
    assert!(!term.buffer_contains("normal"));
}

#[test]
fn test_clean_result_screen() {
    let state = result_state(Ok(report(false)));
    let mut term = TestTerminal::with_size(120, 32);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("NO FRAUD DETECTED"));
    assert!(!term.buffer_contains("FRAUD DETECTED!"));
}

#[test]
fn test_error_result_shows_only_message() {
    let state = result_state(Err(PredictionError::network("refused")));
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Error connecting to server"));
    assert!(!term.buffer_contains("Confidence Level"));
    assert!(!term.buffer_contains("FRAUD DETECTED"));
}

#[test]
fn test_service_error_message() {
    let state = result_state(Err(PredictionError::service(
        "Missing field: incomeDeclared",
    )));
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Error: Missing field: incomeDeclared"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let states = [
        AppState::new(),
        state_on(Screen::Welcome),
        state_on(Screen::Detection(DetectionForm::new())),
        result_state(Ok(report(true))),
        result_state(Err(PredictionError::malformed("missing field"))),
    ];
    for state in &states {
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, state));
    }
}
