//! Single-field sensitivity sweep on LTV/CAC
//!
//! Each perturbable field is scaled across a multiplier grid while every
//! other field stays at its base value, producing one LTV/CAC curve per
//! field. Purely exploratory output for the calling UI.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::inputs::InputParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine};

/// Fields the sweep perturbs one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepField {
    AvgCheck,
    MarginPct,
    MonthlyChurnPct,
    PurchasesPerYear,
}

impl SweepField {
    /// All perturbable fields in presentation order
    pub const ALL: [SweepField; 4] = [
        SweepField::AvgCheck,
        SweepField::MarginPct,
        SweepField::MonthlyChurnPct,
        SweepField::PurchasesPerYear,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SweepField::AvgCheck => "Average check",
            SweepField::MarginPct => "Margin %",
            SweepField::MonthlyChurnPct => "Churn %",
            SweepField::PurchasesPerYear => "Purchases/year",
        }
    }

    /// Scale this field on a copy of the base inputs
    fn apply(&self, base: &InputParameters, multiplier: f64) -> InputParameters {
        let mut params = base.clone();
        match self {
            SweepField::AvgCheck => params.avg_check *= multiplier,
            SweepField::MarginPct => params.margin_pct *= multiplier,
            SweepField::MonthlyChurnPct => params.monthly_churn_pct *= multiplier,
            SweepField::PurchasesPerYear => params.purchases_per_year *= multiplier,
        }
        params
    }
}

/// One (multiplier, LTV/CAC) sample on a sweep curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub multiplier: f64,
    pub ltv_to_cac: f64,
}

/// LTV/CAC response curve for one perturbed field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityCurve {
    pub field: SweepField,
    pub points: Vec<SensitivityPoint>,
}

/// One curve per perturbable field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityTable {
    pub curves: Vec<SensitivityCurve>,
}

/// Default multiplier grid: 0.5 to 1.5 in 11 equal steps
pub fn default_multipliers() -> Vec<f64> {
    (0..11).map(|i| 0.5 + i as f64 / 10.0).collect()
}

/// Sweep each perturbable field across the multiplier grid
///
/// Summary-only projections; fields run in parallel.
pub fn sweep(base: &InputParameters, multipliers: &[f64]) -> SensitivityTable {
    let engine = ProjectionEngine::new(ProjectionConfig {
        detailed_output: false,
        ..Default::default()
    });

    let curves = SweepField::ALL
        .par_iter()
        .map(|&field| SensitivityCurve {
            field,
            points: multipliers
                .iter()
                .map(|&multiplier| {
                    let params = field.apply(base, multiplier);
                    SensitivityPoint {
                        multiplier,
                        ltv_to_cac: engine.project(&params).summary.ltv_to_cac,
                    }
                })
                .collect(),
        })
        .collect();

    SensitivityTable { curves }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grid() {
        let grid = default_multipliers();
        assert_eq!(grid.len(), 11);
        assert_relative_eq!(grid[0], 0.5);
        assert_relative_eq!(grid[5], 1.0);
        assert_relative_eq!(grid[10], 1.5);
    }

    #[test]
    fn test_unit_multiplier_reproduces_base() {
        let base = InputParameters::default();
        let base_ratio = ProjectionEngine::default()
            .project(&base)
            .summary
            .ltv_to_cac;

        let table = sweep(&base, &default_multipliers());
        assert_eq!(table.curves.len(), 4);

        for curve in &table.curves {
            let unit = curve
                .points
                .iter()
                .find(|p| p.multiplier == 1.0)
                .expect("grid contains 1.0");
            assert_relative_eq!(unit.ltv_to_cac, base_ratio, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_curve_directions() {
        let base = InputParameters::default();
        let table = sweep(&base, &default_multipliers());

        for curve in &table.curves {
            let first = curve.points.first().unwrap().ltv_to_cac;
            let last = curve.points.last().unwrap().ltv_to_cac;
            match curve.field {
                // More churn hurts; everything else helps
                SweepField::MonthlyChurnPct => assert!(last < first),
                _ => assert!(last > first),
            }
        }
    }

    #[test]
    fn test_sweep_holds_other_fields_at_base() {
        let base = InputParameters::default();
        let scaled = SweepField::MarginPct.apply(&base, 1.3);

        assert_relative_eq!(scaled.margin_pct, base.margin_pct * 1.3);
        assert_relative_eq!(scaled.avg_check, base.avg_check);
        assert_relative_eq!(scaled.monthly_churn_pct, base.monthly_churn_pct);
        assert_relative_eq!(scaled.purchases_per_year, base.purchases_per_year);
    }
}
