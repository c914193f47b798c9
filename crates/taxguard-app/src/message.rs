//! Message types for the application (TEA pattern)

use taxguard_core::{ModelType, PredictionOutcome};

use crate::form::SubmissionId;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Leave the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Login Messages
    // ─────────────────────────────────────────────────────────
    LoginInput(char),
    LoginBackspace,
    LoginToggleFocus,
    /// Check the entered credentials
    LoginSubmit,

    // ─────────────────────────────────────────────────────────
    // Welcome Messages
    // ─────────────────────────────────────────────────────────
    /// Open a fresh detection form
    StartDetection,

    // ─────────────────────────────────────────────────────────
    // Detection Form Messages
    // ─────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormClearField,
    FormFocusNext,
    FormFocusPrev,
    CycleModel {
        forward: bool,
    },
    SubmitForm,
    /// Abort the in-flight request (Esc while loading)
    CancelSubmission,

    /// Prediction task finished
    PredictionCompleted {
        submission_id: SubmissionId,
        model: ModelType,
        outcome: PredictionOutcome,
    },

    // ─────────────────────────────────────────────────────────
    // Result Messages
    // ─────────────────────────────────────────────────────────
    /// Back to an empty detection form
    Retry,
    /// Back to the welcome screen
    GoHome,
}
