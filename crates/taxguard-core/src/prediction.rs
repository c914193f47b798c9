//! Prediction service response types and parsing
//!
//! The service answers `POST /predict` with one of two JSON shapes:
//!
//! ```json
//! { "error": "Missing field: incomeDeclared" }
//! ```
//!
//! ```json
//! {
//!   "fraud_detected": true,
//!   "confidence": 0.87,
//!   "threshold": 0.5,
//!   "top_contributing_factors": [
//!     { "feature": "luxurySpending", "value": 12000, "importance": 0.42, "direction": "high" }
//!   ],
//!   "feature_values": {
//!     "income_difference": 5000,
//!     "spending_to_income_ratio": 0.91,
//!     "income_to_expense_ratio": 0.8
//!   }
//! }
//! ```
//!
//! [`parse_prediction_body`] turns a raw body into a [`PredictionOutcome`] so the
//! rest of the application never inspects field presence itself.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// User-visible message for transport failures
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server";

/// Whether a factor pushed the verdict through a high or a low value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    High,
    Low,
    #[serde(other)]
    Unknown,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::High => "high",
            Direction::Low => "low",
            Direction::Unknown => "unknown",
        }
    }
}

/// One input feature with its weight in the verdict
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributingFactor {
    pub feature: String,
    pub value: f64,
    /// Fraction in [0, 1]
    pub importance: f64,
    pub direction: Direction,
}

/// Ratios the service derives from the submitted figures
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FeatureValues {
    pub income_difference: f64,
    pub spending_to_income_ratio: f64,
    pub income_to_expense_ratio: f64,
}

/// Successful classification result
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub fraud_detected: bool,
    pub confidence: f64,
    pub threshold: f64,
    pub top_contributing_factors: Vec<ContributingFactor>,
    pub feature_values: FeatureValues,
}

/// Failure of a prediction exchange, already classified.
///
/// `Display` yields the message shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// Transport error, timeout, or a body that is not JSON
    #[error("Error connecting to server")]
    NetworkFailure { reason: String },

    /// The service reported an error payload
    #[error("Error: {message}")]
    Service { message: String },

    /// JSON that is neither the error shape nor a complete success shape
    #[error("Unexpected response from server")]
    MalformedResponse { reason: String },
}

impl PredictionError {
    pub fn network(reason: impl Into<String>) -> Self {
        Self::NetworkFailure {
            reason: reason.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Diagnostic detail for logs; not shown to the user
    pub fn detail(&self) -> &str {
        match self {
            PredictionError::NetworkFailure { reason } => reason,
            PredictionError::Service { message } => message,
            PredictionError::MalformedResponse { reason } => reason,
        }
    }
}

/// Result of one submission, as handed to the result screen
pub type PredictionOutcome = std::result::Result<PredictionReport, PredictionError>;

/// Wire form of the success shape
#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    fraud_detected: Option<bool>,
    #[serde(default, rename = "Fraud_Detected")]
    legacy_fraud_detected: Option<bool>,
    confidence: f64,
    threshold: f64,
    #[serde(default)]
    top_contributing_factors: Vec<ContributingFactor>,
    feature_values: FeatureValues,
}

/// Classify a raw response body.
///
/// HTTP status is deliberately not consulted: the service sends its error
/// payloads with 4xx/5xx codes and the body alone decides the shape.
pub fn parse_prediction_body(body: &[u8]) -> PredictionOutcome {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| PredictionError::network(format!("response body is not JSON: {e}")))?;

    if let Some(message) = value.get("error").and_then(service_error_message) {
        return Err(PredictionError::service(message));
    }

    let raw: RawReport = serde_json::from_value(value)
        .map_err(|e| PredictionError::malformed(e.to_string()))?;

    let fraud_detected = raw
        .fraud_detected
        .or(raw.legacy_fraud_detected)
        .ok_or_else(|| PredictionError::malformed("missing field `fraud_detected`"))?;

    Ok(PredictionReport {
        fraud_detected,
        confidence: raw.confidence,
        threshold: raw.threshold,
        top_contributing_factors: raw.top_contributing_factors,
        feature_values: raw.feature_values,
    })
}

/// Message for a present `error` value. Null, `false`, zero and the empty
/// string mean "no error".
fn service_error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
