//! Scenario engine for preset pessimistic/base/optimistic variants
//!
//! Each scenario scales churn, margin, and average check by fixed factors
//! before running the standard projection. Scenarios are independent; no
//! state crosses between them.

use serde::{Deserialize, Serialize};

use crate::inputs::InputParameters;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Named preset scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Pessimistic,
    Base,
    Optimistic,
}

/// Multipliers applied to the base inputs for one scenario
#[derive(Debug, Clone, Copy)]
pub struct ScenarioMultipliers {
    pub churn: f64,
    pub margin: f64,
    pub check: f64,
}

impl Scenario {
    /// All scenarios in presentation order
    pub const ALL: [Scenario; 3] = [Scenario::Pessimistic, Scenario::Base, Scenario::Optimistic];

    /// Fixed field multipliers for this scenario
    pub fn multipliers(&self) -> ScenarioMultipliers {
        match self {
            Scenario::Pessimistic => ScenarioMultipliers {
                churn: 1.5,
                margin: 0.8,
                check: 0.9,
            },
            Scenario::Base => ScenarioMultipliers {
                churn: 1.0,
                margin: 1.0,
                check: 1.0,
            },
            Scenario::Optimistic => ScenarioMultipliers {
                churn: 0.7,
                margin: 1.2,
                check: 1.1,
            },
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Pessimistic => "Pessimistic",
            Scenario::Base => "Base",
            Scenario::Optimistic => "Optimistic",
        }
    }

    /// Apply this scenario's multipliers to a copy of the base inputs
    pub fn apply(&self, base: &InputParameters) -> InputParameters {
        let mult = self.multipliers();
        let mut params = base.clone();
        params.monthly_churn_pct *= mult.churn;
        params.margin_pct *= mult.margin;
        params.avg_check *= mult.check;
        params
    }
}

/// Projection results for all three preset scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub pessimistic: ProjectionResult,
    pub base: ProjectionResult,
    pub optimistic: ProjectionResult,
}

impl ScenarioSet {
    /// Result for a single scenario
    pub fn get(&self, scenario: Scenario) -> &ProjectionResult {
        match scenario {
            Scenario::Pessimistic => &self.pessimistic,
            Scenario::Base => &self.base,
            Scenario::Optimistic => &self.optimistic,
        }
    }

    /// Iterate scenarios in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, &ProjectionResult)> {
        Scenario::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

/// Runs the preset scenario sweep against a shared engine
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create a runner around an already-configured engine
    pub fn new(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    /// Project all three preset scenarios from the same base inputs
    pub fn run(&self, base: &InputParameters) -> ScenarioSet {
        ScenarioSet {
            pessimistic: self.engine.project(&Scenario::Pessimistic.apply(base)),
            base: self.engine.project(&Scenario::Base.apply(base)),
            optimistic: self.engine.project(&Scenario::Optimistic.apply(base)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_scenario_matches_unscaled_projection() {
        let params = InputParameters::default();
        let engine = ProjectionEngine::default();

        let direct = engine.project(&params);
        let scenarios = ScenarioRunner::new(engine).run(&params);
        let base = scenarios.get(Scenario::Base);

        // Multiplying by 1.0 must reproduce the projection exactly
        assert_eq!(base.summary.ltv.to_bits(), direct.summary.ltv.to_bits());
        assert_eq!(base.summary.payback_month, direct.summary.payback_month);
        assert_eq!(base.rows.len(), direct.rows.len());
    }

    #[test]
    fn test_scenarios_are_ordered() {
        let params = InputParameters::default();
        let scenarios = ScenarioRunner::default().run(&params);

        // Lower churn, higher margin, higher check strictly dominate
        assert!(scenarios.optimistic.summary.ltv > scenarios.base.summary.ltv);
        assert!(scenarios.base.summary.ltv > scenarios.pessimistic.summary.ltv);
    }

    #[test]
    fn test_apply_scales_only_three_fields() {
        let base = InputParameters::default();
        let scaled = Scenario::Pessimistic.apply(&base);

        assert_relative_eq!(scaled.monthly_churn_pct, base.monthly_churn_pct * 1.5);
        assert_relative_eq!(scaled.margin_pct, base.margin_pct * 0.8);
        assert_relative_eq!(scaled.avg_check, base.avg_check * 0.9);

        assert_relative_eq!(scaled.cac, base.cac);
        assert_relative_eq!(scaled.purchases_per_year, base.purchases_per_year);
        assert_relative_eq!(scaled.discount_rate_pct, base.discount_rate_pct);
        assert_eq!(scaled.horizon_months, base.horizon_months);
    }

    #[test]
    fn test_iter_order() {
        let scenarios = ScenarioRunner::default().run(&InputParameters::default());
        let order: Vec<_> = scenarios.iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![Scenario::Pessimistic, Scenario::Base, Scenario::Optimistic]
        );
    }
}
