//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Instant;

use taxguard_client::PredictionService;
use taxguard_core::prelude::*;
use taxguard_core::{FormRecord, ModelType};
use tokio::sync::{mpsc, watch};

use crate::form::SubmissionId;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: PredictionService + Sync + 'static,
{
    match action {
        UpdateAction::SubmitPrediction {
            submission_id,
            model,
            record,
            cancel_rx,
        } => {
            spawn_prediction(service, submission_id, model, record, cancel_rx, msg_tx);
        }
    }
}

/// Run one prediction request. Exits silently if cancelled first.
pub fn spawn_prediction<S>(
    service: Arc<S>,
    submission_id: SubmissionId,
    model: ModelType,
    record: FormRecord,
    cancel_rx: watch::Receiver<bool>,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()>
where
    S: PredictionService + Sync + 'static,
{
    tokio::spawn(async move {
        let started = Instant::now();

        let outcome = tokio::select! {
            outcome = service.predict(&record) => outcome,
            _ = cancelled(cancel_rx) => {
                debug!(
                    "Submission {} abandoned after {}ms",
                    submission_id,
                    started.elapsed().as_millis()
                );
                return;
            }
        };

        info!(
            "Submission {} ({}) finished in {}ms",
            submission_id,
            model,
            started.elapsed().as_millis()
        );

        if msg_tx
            .send(Message::PredictionCompleted {
                submission_id,
                model,
                outcome,
            })
            .await
            .is_err()
        {
            debug!("Event loop gone, dropping result of {}", submission_id);
        }
    })
}

/// Resolves once cancellation is requested or the sender is dropped
async fn cancelled(mut rx: watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}
