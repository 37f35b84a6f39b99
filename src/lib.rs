//! LTV Analytics - unit-economics engine for customer lifetime value projections
//!
//! This library provides:
//! - Monthly discounted cash-flow projections over a fixed horizon
//! - Survival-curve modeling from monthly churn
//! - Preset scenario variants (pessimistic, base, optimistic)
//! - Single-field sensitivity sweeps on LTV/CAC
//! - Benchmark-driven insights and recommendations

pub mod benchmarks;
pub mod inputs;
pub mod insights;
pub mod projection;
pub mod scenario;
pub mod sensitivity;

// Re-export commonly used types
pub use benchmarks::{BenchmarkTable, Industry, IndustryBenchmark};
pub use inputs::{InputParameters, ValidationReport, ALLOWED_HORIZONS};
pub use insights::{Insight, InsightKind};
pub use projection::{MonthRow, ProjectionConfig, ProjectionEngine, ProjectionResult, SummaryMetrics};
pub use scenario::{Scenario, ScenarioRunner, ScenarioSet};
pub use sensitivity::{SensitivityTable, SweepField};
