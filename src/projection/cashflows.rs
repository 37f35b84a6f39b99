//! Cash-flow output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    /// Projection month, 1-based
    pub month: u32,

    /// Fraction of the original cohort still active at this month
    pub survival: f64,

    /// Seasonal modulation factor for this month
    pub seasonality: f64,

    /// Present-value discount factor for this month
    pub discount_factor: f64,

    /// Discounted margin cash flow for this month
    pub monthly_cash_flow: f64,

    /// Running sum of monthly cash flows through this month
    pub cumulative_cash_flow: f64,
}

/// Scalar summary metrics derived from one projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Total discounted margin over the horizon
    pub ltv: f64,

    /// LTV divided by acquisition cost
    pub ltv_to_cac: f64,

    /// (LTV - CAC) / CAC
    pub roi: f64,

    /// First month where cumulative cash flow recovers CAC, if reached
    pub payback_month: Option<u32>,

    /// Expected customer lifetime in months (infinite at zero churn)
    pub customer_lifetime_months: f64,

    /// 100 - monthly churn
    pub monthly_retention_pct: f64,

    /// Cohort share retained after 12 months, as a percentage
    pub annual_retention_pct: f64,

    /// Model confidence heuristic on a 0-100 scale
    pub confidence_score: f64,
}

/// Complete projection result for one set of inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly detail rows (empty when detailed output is disabled)
    pub rows: Vec<MonthRow>,

    /// Scalar summary metrics
    pub summary: SummaryMetrics,
}
