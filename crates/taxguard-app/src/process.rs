//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages and hands actions to the spawner.

use std::sync::Arc;

use taxguard_client::PredictionService;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) where
    S: PredictionService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(service));
        }

        msg = result.message;
    }
}
