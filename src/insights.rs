//! Benchmark-driven insights and improvement recommendations
//!
//! Pure threshold comparisons against the industry benchmark: stateless and
//! deterministic for identical inputs.

use serde::{Deserialize, Serialize};

use crate::benchmarks::IndustryBenchmark;
use crate::inputs::InputParameters;
use crate::projection::SummaryMetrics;

/// Severity class of an advisory message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Success,
    Warning,
    Error,
    Info,
}

/// One advisory message derived from the projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Generate ordered advisory messages for a projection summary
pub fn generate_insights(
    summary: &SummaryMetrics,
    params: &InputParameters,
    benchmark: &IndustryBenchmark,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if summary.ltv_to_cac < benchmark.ltv_cac_min {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "LTV/CAC is below the industry minimum ({:.1}). Increase LTV or reduce CAC.",
                benchmark.ltv_cac_min
            ),
        ));
    } else {
        insights.push(Insight::new(
            InsightKind::Success,
            format!(
                "LTV/CAC meets the industry standard ({:.1}).",
                summary.ltv_to_cac
            ),
        ));
    }

    match summary.payback_month {
        Some(month) if month <= benchmark.payback_max => {
            insights.push(Insight::new(
                InsightKind::Success,
                format!(
                    "Strong payback period ({} months) with fast recovery of acquisition spend.",
                    month
                ),
            ));
        }
        Some(month) => {
            insights.push(Insight::new(
                InsightKind::Warning,
                format!(
                    "Payback period ({} months) exceeds the recommended maximum ({} months).",
                    month, benchmark.payback_max
                ),
            ));
        }
        None => {}
    }

    if params.monthly_churn_pct > benchmark.churn_typical * 1.5 {
        insights.push(Insight::new(
            InsightKind::Error,
            format!(
                "Critically high churn ({:.1}% per month). Retention work is urgent.",
                params.monthly_churn_pct
            ),
        ));
    }

    if summary.ltv_to_cac < 3.0 {
        if params.margin_pct < 30.0 {
            insights.push(Insight::new(
                InsightKind::Info,
                "Consider raising margins through upsell or cost reduction.".to_string(),
            ));
        }
        if params.monthly_churn_pct > 10.0 {
            insights.push(Insight::new(
                InsightKind::Info,
                "Consider investing in loyalty programs to reduce churn.".to_string(),
            ));
        }
    }

    insights
}

/// Generate improvement recommendations from the raw inputs
///
/// Independent of the projection: these look only at the input relationships.
pub fn generate_recommendations(params: &InputParameters) -> Vec<String> {
    let mut recs = Vec::new();

    if params.avg_check < params.cac {
        recs.push("Increase the average check: introduce upsell and cross-sell".to_string());
    }
    if params.margin_pct < 30.0 {
        recs.push("Improve margins: revisit pricing and cost structure".to_string());
    }
    if params.monthly_churn_pct > 10.0 {
        recs.push("Improve retention: loyalty programs and customer success".to_string());
    }
    if params.cac > params.avg_check * 0.8 {
        recs.push("Optimize marketing: better targeting and conversion".to_string());
    }

    if recs.is_empty() {
        recs.push("Metrics look healthy. Keep monitoring and A/B testing.".to_string());
    }

    recs
}
