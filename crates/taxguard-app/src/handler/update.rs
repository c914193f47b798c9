//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;
use taxguard_core::prelude::*;
use taxguard_core::{ModelType, PredictionOutcome};

use crate::form::{SubmissionId, SubmitBlocked};
use crate::message::Message;
use crate::navigator::{NavEvent, Screen, ScreenKind};
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Login Messages
        // ─────────────────────────────────────────────────────────
        Message::LoginInput(c) => {
            if let Screen::Login(login) = &mut state.screen {
                login.insert_char(c);
            }
            UpdateResult::none()
        }

        Message::LoginBackspace => {
            if let Screen::Login(login) = &mut state.screen {
                login.backspace();
            }
            UpdateResult::none()
        }

        Message::LoginToggleFocus => {
            if let Screen::Login(login) = &mut state.screen {
                login.toggle_focus();
            }
            UpdateResult::none()
        }

        Message::LoginSubmit => handle_login_submit(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::StartDetection => {
            state.navigate(NavEvent::Enter);
            UpdateResult::none()
        }

        Message::Retry => {
            state.navigate(NavEvent::Retry);
            UpdateResult::none()
        }

        Message::GoHome => {
            state.navigate(NavEvent::Home);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detection Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => {
            if let Screen::Detection(form) = &mut state.screen {
                form.insert_char(c);
            }
            UpdateResult::none()
        }

        Message::FormBackspace => {
            if let Screen::Detection(form) = &mut state.screen {
                form.backspace();
            }
            UpdateResult::none()
        }

        Message::FormClearField => {
            if let Screen::Detection(form) = &mut state.screen {
                form.clear_field();
            }
            UpdateResult::none()
        }

        Message::FormFocusNext => {
            if let Screen::Detection(form) = &mut state.screen {
                form.focus_next();
            }
            UpdateResult::none()
        }

        Message::FormFocusPrev => {
            if let Screen::Detection(form) = &mut state.screen {
                form.focus_prev();
            }
            UpdateResult::none()
        }

        Message::CycleModel { forward } => {
            if let Screen::Detection(form) = &mut state.screen {
                form.cycle_model(forward);
            }
            UpdateResult::none()
        }

        Message::SubmitForm => handle_submit(state),

        Message::CancelSubmission => {
            if let Screen::Detection(form) = &mut state.screen {
                if let Some(id) = form.cancel_pending() {
                    debug!("Submission {} cancelled", id);
                }
            }
            UpdateResult::none()
        }

        Message::PredictionCompleted {
            submission_id,
            model,
            outcome,
        } => handle_prediction_completed(state, submission_id, model, outcome),
    }
}

fn handle_login_submit(state: &mut AppState) -> UpdateResult {
    let Screen::Login(login) = &state.screen else {
        return UpdateResult::none();
    };

    let verdict = match login.first_missing() {
        Some(missing) => Err(format!("{missing} is required")),
        None => state
            .credential_policy()
            .authenticate(&login.credentials)
            .map_err(|e| e.to_string()),
    };

    match verdict {
        Ok(()) => {
            info!("Login succeeded for {:?}", login.credentials.username);
            state.navigate(NavEvent::LoginSucceeded);
        }
        Err(message) => {
            warn!("Login failed for {:?}", login.credentials.username);
            if let Screen::Login(login) = &mut state.screen {
                login.error = Some(message);
            }
        }
    }
    UpdateResult::none()
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.screen_kind() != ScreenKind::Detection {
        return UpdateResult::none();
    }

    let submission_id = state.allocate_submission_id();
    let Screen::Detection(form) = &mut state.screen else {
        return UpdateResult::none();
    };

    match form.begin_submit(submission_id) {
        Ok((record, model, cancel_rx)) => {
            info!("Submitting {} with model {}", submission_id, model);
            UpdateResult::action(UpdateAction::SubmitPrediction {
                submission_id,
                model,
                record,
                cancel_rx,
            })
        }
        Err(SubmitBlocked::InFlight) => {
            debug!("Submit ignored, a request is already pending");
            UpdateResult::none()
        }
        Err(SubmitBlocked::Missing(label)) => {
            debug!("Submit blocked, {} is empty", label);
            UpdateResult::none()
        }
    }
}

fn handle_prediction_completed(
    state: &mut AppState,
    submission_id: SubmissionId,
    model: ModelType,
    outcome: PredictionOutcome,
) -> UpdateResult {
    let applies = match &mut state.screen {
        Screen::Detection(form) => form.finish(submission_id),
        _ => false,
    };

    if !applies {
        debug!(
            "Dropping stale completion for submission {} on {} screen",
            submission_id,
            state.screen_kind().title()
        );
        return UpdateResult::none();
    }

    match &outcome {
        Ok(report) => info!(
            "Submission {} resolved: fraud_detected={} confidence={:.2}",
            submission_id, report.fraud_detected, report.confidence
        ),
        Err(e) => info!("Submission {} failed: {}", submission_id, e.detail()),
    }

    state.navigate(NavEvent::SubmitResolved {
        outcome,
        model,
        received_at: Local::now(),
    });
    UpdateResult::none()
}
