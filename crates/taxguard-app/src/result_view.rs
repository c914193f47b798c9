//! View model for the result screen
//!
//! Everything the result screen prints is computed here so labels and
//! thresholds can be checked without a terminal.

use taxguard_core::{
    derived_metrics, format_fixed, format_percent, DerivedMetric, ModelType, PredictionReport,
};

use crate::navigator::ResultScreen;

pub const FRAUD_VERDICT: &str = "FRAUD DETECTED!";
pub const CLEAN_VERDICT: &str = "NO FRAUD DETECTED";

/// One row of the contributing-factor list
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRow {
    pub feature: String,
    pub value: String,
    pub importance: String,
    pub direction: &'static str,
}

/// Rendered form of a successful report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub fraud_detected: bool,
    pub verdict: &'static str,
    pub confidence_ratio: f64,
    pub confidence_label: String,
    pub threshold_label: String,
    /// Colour strength for the meter, in [0.3, 1.0]
    pub meter_intensity: f64,
    pub chart_categories: Vec<String>,
    pub chart_values: Vec<f64>,
    pub factors: Vec<FactorRow>,
    pub metrics: [DerivedMetric; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody {
    Report(Box<ReportView>),
    /// Only the user message is shown for failures
    Failure(String),
}

/// Everything the result screen displays
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub model_heading: String,
    pub model_description: &'static str,
    pub received_at: String,
    pub body: ResultBody,
}

impl ResultView {
    pub fn build(screen: &ResultScreen) -> Self {
        let body = match &screen.outcome {
            Ok(report) => ResultBody::Report(Box::new(ReportView::from_report(report))),
            Err(e) => ResultBody::Failure(e.to_string()),
        };

        Self {
            model_heading: model_heading(screen.model),
            model_description: screen.model.description(),
            received_at: screen.received_at.format("%H:%M:%S").to_string(),
            body,
        }
    }
}

pub fn model_heading(model: ModelType) -> String {
    format!("Model Used: {}", model.display_name())
}

/// Meter colour strength: `0.3 + 0.7 * confidence`, clamped to [0.3, 1.0]
pub fn meter_intensity(confidence: f64) -> f64 {
    0.3 + 0.7 * confidence.clamp(0.0, 1.0)
}

impl ReportView {
    pub fn from_report(report: &PredictionReport) -> Self {
        let factors = &report.top_contributing_factors;

        Self {
            fraud_detected: report.fraud_detected,
            verdict: if report.fraud_detected {
                FRAUD_VERDICT
            } else {
                CLEAN_VERDICT
            },
            confidence_ratio: report.confidence.clamp(0.0, 1.0),
            confidence_label: format!(
                "Confidence Level: {}",
                format_percent(report.confidence)
            ),
            threshold_label: format!("Threshold: {}", format_percent(report.threshold)),
            meter_intensity: meter_intensity(report.confidence),
            chart_categories: factors.iter().map(|f| f.feature.clone()).collect(),
            chart_values: factors.iter().map(|f| f.importance * 100.0).collect(),
            factors: factors
                .iter()
                .map(|f| FactorRow {
                    feature: f.feature.clone(),
                    value: format_fixed(f.value),
                    importance: format_percent(f.importance),
                    direction: f.direction.label(),
                })
                .collect(),
            metrics: derived_metrics(&report.feature_values),
        }
    }
}
