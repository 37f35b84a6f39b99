//! Core projection engine for monthly LTV cash-flow projections

use log::debug;

use super::cashflows::{MonthRow, ProjectionResult, SummaryMetrics};
use crate::inputs::InputParameters;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Amplitude of the seasonal modulation term
    pub seasonality_amplitude: f64,

    /// Whether to keep per-month rows in the result
    pub detailed_output: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            seasonality_amplitude: 0.05,
            detailed_output: true,
        }
    }
}

/// Main projection engine
///
/// A pure function of its inputs: each call builds a fresh projection and
/// shares no state with any other call.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for one set of inputs
    ///
    /// Callers are expected to have validated the inputs first; in
    /// particular the ratio metrics assume a positive CAC.
    pub fn project(&self, params: &InputParameters) -> ProjectionResult {
        let monthly_revenue = params.avg_check * params.purchases_per_year / 12.0;
        let monthly_margin = monthly_revenue * params.margin_pct / 100.0;
        let survival_rate = 1.0 - params.monthly_churn_pct / 100.0;

        // Annual rate converted to a monthly compounding factor via the
        // 1/12 power. Business convention from the reference model; do not
        // replace with rate/12 simple division.
        let monthly_discount = (1.0 + params.discount_rate_pct / 100.0).powf(-1.0 / 12.0);

        let mut rows = Vec::with_capacity(params.horizon_months as usize);
        let mut cumulative = 0.0;
        let mut payback_month = None;

        for month in 1..=params.horizon_months {
            let survival = survival_rate.powi(month as i32 - 1);
            let discount_factor = monthly_discount.powi(month as i32);
            let seasonality = 1.0
                + self.config.seasonality_amplitude
                    * (2.0 * std::f64::consts::PI * month as f64 / 12.0).sin();

            let monthly_cash_flow = monthly_margin * seasonality * survival * discount_factor;
            cumulative += monthly_cash_flow;

            if payback_month.is_none() && cumulative >= params.cac {
                payback_month = Some(month);
            }

            rows.push(MonthRow {
                month,
                survival,
                seasonality,
                discount_factor,
                monthly_cash_flow,
                cumulative_cash_flow: cumulative,
            });
        }

        let ltv = cumulative;
        let ltv_to_cac = ltv / params.cac;
        let roi = (ltv - params.cac) / params.cac;

        // 1 / monthly churn rate; a cohort with zero churn never runs off
        let customer_lifetime_months = if params.monthly_churn_pct > 0.0 {
            100.0 / params.monthly_churn_pct
        } else {
            f64::INFINITY
        };

        debug!(
            "projection complete: horizon={} ltv={:.2} ltv_to_cac={:.4} payback={:?}",
            params.horizon_months, ltv, ltv_to_cac, payback_month
        );

        let summary = SummaryMetrics {
            ltv,
            ltv_to_cac,
            roi,
            payback_month,
            customer_lifetime_months,
            monthly_retention_pct: 100.0 - params.monthly_churn_pct,
            annual_retention_pct: survival_rate.powi(12) * 100.0,
            confidence_score: ((ltv_to_cac - 1.0) * 25.0).clamp(0.0, 100.0),
        };

        ProjectionResult {
            rows: if self.config.detailed_output { rows } else { Vec::new() },
            summary,
        }
    }
}
