//! In-memory prediction service for tests in dependent crates

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use taxguard_core::{FormRecord, PredictionError, PredictionOutcome};

use crate::service::PredictionService;

/// Returns a canned outcome and records every request it receives
#[derive(Debug, Clone)]
pub struct FakePredictionService {
    outcome: PredictionOutcome,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    records: Arc<Mutex<Vec<FormRecord>>>,
}

impl FakePredictionService {
    pub fn new(outcome: PredictionOutcome) -> Self {
        Self {
            outcome,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A service that always fails at the transport level
    pub fn unreachable() -> Self {
        Self::new(Err(PredictionError::network("connection refused")))
    }

    /// Hold every response for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<FormRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl PredictionService for FakePredictionService {
    async fn predict(&self, record: &FormRecord) -> PredictionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().push(record.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
