//! # taxguard-client - Prediction Service Access
//!
//! Talks to the remote classification service over HTTP.
//!
//! Depends on [`taxguard_core`] for the form and response types.
//!
//! ## Public API
//!
//! - [`PredictionService`] / [`LocalPredictionService`] - Async trait for
//!   "submit a form, get an outcome"
//! - [`PredictClient`] - reqwest implementation for `POST {base}/predict`
//! - [`endpoint_for()`] - Validate a base URL and resolve the predict endpoint
//! - [`DEFAULT_BASE_URL`], [`DEFAULT_TIMEOUT`] - Defaults when nothing is configured

pub mod client;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{endpoint_for, PredictClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use service::{LocalPredictionService, PredictionService};
