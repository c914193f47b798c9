//! Derived-metric rules and number formatting for the result screen

use crate::prediction::FeatureValues;

/// Spending above this share of declared income is flagged
pub const SPENDING_RATIO_LIMIT: f64 = 0.8;

/// Income below this multiple of expenses is flagged
pub const INCOME_EXPENSE_FLOOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Suspicious,
    Normal,
}

impl MetricStatus {
    fn flag(suspicious: bool) -> Self {
        if suspicious {
            MetricStatus::Suspicious
        } else {
            MetricStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::Suspicious => "suspicious",
            MetricStatus::Normal => "normal",
        }
    }

    pub fn is_suspicious(&self) -> bool {
        matches!(self, MetricStatus::Suspicious)
    }
}

/// A metric card: title, formatted value and its flag
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetric {
    pub title: &'static str,
    pub display: String,
    pub status: MetricStatus,
}

/// Evaluate the three fixed threshold rules
pub fn derived_metrics(values: &FeatureValues) -> [DerivedMetric; 3] {
    [
        DerivedMetric {
            title: "Income Difference",
            display: format!("${}", format_fixed(values.income_difference)),
            status: MetricStatus::flag(values.income_difference > 0.0),
        },
        DerivedMetric {
            title: "Spending to Income Ratio",
            display: format_percent(values.spending_to_income_ratio),
            status: MetricStatus::flag(values.spending_to_income_ratio > SPENDING_RATIO_LIMIT),
        },
        DerivedMetric {
            title: "Income to Expense Ratio",
            display: format_fixed(values.income_to_expense_ratio),
            status: MetricStatus::flag(values.income_to_expense_ratio < INCOME_EXPENSE_FLOOR),
        },
    ]
}

/// Two decimal places: `12000` → `"12000.00"`
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

/// Fraction as a percentage with two decimals: `0.87` → `"87.00%"`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(diff: f64, spend: f64, income_exp: f64) -> FeatureValues {
        FeatureValues {
            income_difference: diff,
            spending_to_income_ratio: spend,
            income_to_expense_ratio: income_exp,
        }
    }

    #[test]
    fn test_all_suspicious() {
        let metrics = derived_metrics(&values(5000.0, 0.91, 0.8));
        assert!(metrics.iter().all(|m| m.status.is_suspicious()));
        assert_eq!(metrics[0].display, "$5000.00");
        assert_eq!(metrics[1].display, "91.00%");
        assert_eq!(metrics[2].display, "0.80");
    }

    #[test]
    fn test_all_normal() {
        let metrics = derived_metrics(&values(-2500.0, 0.4, 2.5));
        assert!(metrics.iter().all(|m| m.status == MetricStatus::Normal));
        assert_eq!(metrics[0].display, "$-2500.00");
    }

    #[test]
    fn test_boundaries_are_normal() {
        let metrics = derived_metrics(&values(0.0, 0.8, 1.0));
        assert_eq!(metrics[0].status, MetricStatus::Normal);
        assert_eq!(metrics[1].status, MetricStatus::Normal);
        assert_eq!(metrics[2].status, MetricStatus::Normal);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.87), "87.00%");
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.42), "42.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(12000.0), "12000.00");
        assert_eq!(format_fixed(0.126), "0.13");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MetricStatus::Suspicious.label(), "suspicious");
        assert_eq!(MetricStatus::Normal.label(), "normal");
    }
}
