//! Prediction service abstraction
//!
//! The TUI only needs "send this form, get an outcome back". Keeping that
//! behind a trait lets the app crate drive its submit flow against an
//! in-memory fake in tests.

use taxguard_core::{FormRecord, PredictionOutcome};

/// Issue one classification request for a completed form.
///
/// Implementations never fail with a Rust error: every failure mode is
/// folded into the returned [`PredictionOutcome`].
#[trait_variant::make(PredictionService: Send)]
pub trait LocalPredictionService {
    async fn predict(&self, record: &FormRecord) -> PredictionOutcome;
}
