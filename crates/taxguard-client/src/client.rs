//! reqwest-backed client for `POST /predict`

use std::time::{Duration, Instant};

use taxguard_core::prelude::*;
use taxguard_core::{parse_prediction_body, FormRecord, PredictionError, PredictionOutcome};
use url::Url;

use crate::service::PredictionService;

/// Base address used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout (30 s)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const PREDICT_PATH: &str = "predict";

/// HTTP client bound to one prediction endpoint
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl PredictClient {
    /// Build a client for `{base_url}/predict` with a request timeout.
    ///
    /// The timeout covers connect, send and body read.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint_for(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        info!(
            "Prediction endpoint: {} (timeout {}s)",
            endpoint,
            timeout.as_secs_f32()
        );

        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    fn describe_transport_error(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {:.1}s", self.timeout.as_secs_f32())
        } else if err.is_connect() {
            format!("could not connect to {}: {}", self.endpoint, err)
        } else {
            err.to_string()
        }
    }
}

impl PredictionService for PredictClient {
    async fn predict(&self, record: &FormRecord) -> PredictionOutcome {
        let started = Instant::now();

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await
            .map_err(|e| {
                let reason = self.describe_transport_error(&e);
                warn!("Prediction request failed: {}", reason);
                PredictionError::network(reason)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            let reason = self.describe_transport_error(&e);
            warn!("Failed to read prediction response body: {}", reason);
            PredictionError::network(reason)
        })?;

        debug!(
            "Prediction response: status={} bytes={} elapsed={}ms",
            status,
            body.len(),
            started.elapsed().as_millis()
        );

        let outcome = parse_prediction_body(&body);
        if let Err(ref e) = outcome {
            warn!("Prediction failed (HTTP {}): {}", status, e.detail());
        }
        outcome
    }
}

/// Resolve and validate the `/predict` URL for a base address.
///
/// A base with a path prefix (`http://host/api`) keeps it: the result is
/// `http://host/api/predict`.
pub fn endpoint_for(base_url: &str) -> Result<Url> {
    let mut base =
        Url::parse(base_url).map_err(|e| Error::invalid_service_url(base_url, e.to_string()))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(Error::invalid_service_url(
            base_url,
            format!("unsupported scheme '{}'", base.scheme()),
        ));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(PREDICT_PATH)
        .map_err(|e| Error::invalid_service_url(base_url, e.to_string()))
}
