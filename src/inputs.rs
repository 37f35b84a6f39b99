//! Input parameters and validation
//!
//! All inputs are supplied once per calculation request and never mutated.
//! Validation is two-tier: blocking errors abort the projection entirely,
//! warnings are surfaced alongside full results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Planning horizons offered by the calling UI (months)
pub const ALLOWED_HORIZONS: [u32; 5] = [12, 24, 36, 48, 60];

/// Business inputs for one LTV calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// Average purchase amount
    pub avg_check: f64,

    /// Purchase frequency per year
    pub purchases_per_year: f64,

    /// Margin as a percentage of revenue (0-100)
    pub margin_pct: f64,

    /// Customer acquisition cost
    pub cac: f64,

    /// Fraction of customers lost per month, as a percentage
    pub monthly_churn_pct: f64,

    /// Annual discount rate as a percentage
    pub discount_rate_pct: f64,

    /// Projection horizon in months
    pub horizon_months: u32,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            avg_check: 20_000.0,
            purchases_per_year: 2.5,
            margin_pct: 50.0,
            cac: 15_000.0,
            monthly_churn_pct: 8.0,
            discount_rate_pct: 12.0,
            horizon_months: 36,
        }
    }
}

/// Blocking validation error; the projection is not run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("average check must be positive")]
    NonPositiveAvgCheck,

    #[error("CAC must be positive")]
    NonPositiveCac,
}

/// Non-blocking validation warning; the projection still runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationWarning {
    #[error("very high monthly churn - check that the input data is correct")]
    SuspiciousChurn,

    #[error("low margin can depress LTV")]
    LowMargin,

    #[error("average check is below CAC - payback is questionable")]
    CheckBelowCac,
}

/// Outcome of validating one set of inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True when any blocking error is present
    pub fn is_blocking(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages for presentation
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Warning messages for presentation
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

impl InputParameters {
    /// Validate inputs, collecting blocking errors and advisory warnings
    ///
    /// Errors block the projection (invalid check or CAC would make the
    /// ratio metrics meaningless); warnings flag suspicious but computable
    /// inputs.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.avg_check <= 0.0 {
            report.errors.push(ValidationError::NonPositiveAvgCheck);
        }
        if self.cac <= 0.0 {
            report.errors.push(ValidationError::NonPositiveCac);
        }

        if self.monthly_churn_pct >= 50.0 {
            report.warnings.push(ValidationWarning::SuspiciousChurn);
        }
        if self.margin_pct < 20.0 {
            report.warnings.push(ValidationWarning::LowMargin);
        }
        if self.avg_check < self.cac {
            report.warnings.push(ValidationWarning::CheckBelowCac);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_clean() {
        let report = InputParameters::default().validate();
        assert!(!report.is_blocking());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_zero_avg_check_is_single_blocking_error() {
        let params = InputParameters {
            avg_check: 0.0,
            ..Default::default()
        };
        let report = params.validate();
        assert!(report.is_blocking());
        assert_eq!(report.errors, vec![ValidationError::NonPositiveAvgCheck]);
    }

    #[test]
    fn test_negative_cac_blocks() {
        let params = InputParameters {
            cac: -100.0,
            ..Default::default()
        };
        let report = params.validate();
        assert_eq!(report.errors, vec![ValidationError::NonPositiveCac]);
        // Check above CAC, so no payback warning
        assert!(!report.warnings.contains(&ValidationWarning::CheckBelowCac));
    }

    #[test]
    fn test_high_churn_warns_but_does_not_block() {
        let params = InputParameters {
            monthly_churn_pct: 60.0,
            ..Default::default()
        };
        let report = params.validate();
        assert!(!report.is_blocking());
        assert!(report.warnings.contains(&ValidationWarning::SuspiciousChurn));
    }

    #[test]
    fn test_low_margin_and_check_below_cac_warn() {
        let params = InputParameters {
            avg_check: 10_000.0,
            margin_pct: 15.0,
            cac: 15_000.0,
            ..Default::default()
        };
        let report = params.validate();
        assert!(!report.is_blocking());
        assert!(report.warnings.contains(&ValidationWarning::LowMargin));
        assert!(report.warnings.contains(&ValidationWarning::CheckBelowCac));
    }
}
