//! # taxguard-core - Core Domain Types
//!
//! Foundation crate for taxguard. Provides the detection form types, the
//! prediction service payloads, derived-metric rules, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ModelType`] - One of the four classifiers the service offers
//! - [`FormField`] - The nine financial inputs, with wire keys and labels
//! - [`FormRecord`] - In-progress form contents, serialized as the request body
//! - [`Credentials`] - Login screen username/password pair
//!
//! ### Prediction Payloads (`prediction`)
//! - [`PredictionReport`] - Parsed success shape
//! - [`PredictionError`] - Network, service and malformed-response failures
//! - [`PredictionOutcome`] - `Result` of one submission
//! - [`parse_prediction_body()`] - Classify a raw response body
//!
//! ### Result Metrics (`metrics`)
//! - [`derived_metrics()`] - The three suspicious/normal indicator rules
//! - [`format_percent()`], [`format_fixed()`] - Two-decimal display helpers
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use taxguard_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod metrics;
pub mod prediction;
pub mod types;

/// Prelude for common imports used throughout all taxguard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use metrics::{derived_metrics, format_fixed, format_percent, DerivedMetric, MetricStatus};
pub use prediction::{
    parse_prediction_body, ContributingFactor, Direction, FeatureValues, PredictionError,
    PredictionOutcome, PredictionReport, CONNECTION_ERROR_MESSAGE,
};
pub use types::{Credentials, FormField, FormRecord, ModelType, MODEL_LABEL};
