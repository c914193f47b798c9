//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen

pub(crate) mod keys;
pub(crate) mod update;


use taxguard_core::{FormRecord, ModelType};
use tokio::sync::watch;

use crate::form::SubmissionId;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send the form to the prediction service in a background task
    SubmitPrediction {
        submission_id: SubmissionId,
        model: ModelType,
        record: FormRecord,
        /// Flips or closes when the request should be abandoned
        cancel_rx: watch::Receiver<bool>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
