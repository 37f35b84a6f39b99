//! Monthly LTV projection: engine, configuration, and output structures

mod cashflows;
mod engine;

pub use cashflows::{MonthRow, ProjectionResult, SummaryMetrics};
pub use engine::{ProjectionConfig, ProjectionEngine};
