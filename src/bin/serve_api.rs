//! Serverless JSON handler for LTV calculations
//!
//! Accepts input parameters via JSON and returns summary metrics, scenario
//! variants, a sensitivity table, and benchmark-driven insights.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::{DateTime, Utc};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use serde::{Deserialize, Serialize};

use ltv_analytics::insights::{generate_insights, generate_recommendations};
use ltv_analytics::{
    sensitivity, BenchmarkTable, Industry, InputParameters, Insight, MonthRow, ProjectionConfig,
    ProjectionEngine, Scenario, ScenarioRunner, SensitivityTable, SummaryMetrics,
};

/// Input for one LTV calculation
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    /// Average purchase amount
    #[serde(default = "default_avg_check")]
    pub avg_check: f64,

    /// Purchases per year
    #[serde(default = "default_purchases_per_year")]
    pub purchases_per_year: f64,

    /// Margin percentage (0-100)
    #[serde(default = "default_margin_pct")]
    pub margin_pct: f64,

    /// Customer acquisition cost
    #[serde(default = "default_cac")]
    pub cac: f64,

    /// Monthly churn percentage
    #[serde(default = "default_monthly_churn_pct")]
    pub monthly_churn_pct: f64,

    /// Annual discount rate percentage
    #[serde(default = "default_discount_rate_pct")]
    pub discount_rate_pct: f64,

    /// Projection horizon in months
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    /// Industry for benchmark comparison
    #[serde(default = "default_industry")]
    pub industry: Industry,

    /// Whether to include per-month rows in the response
    #[serde(default = "default_true")]
    pub include_monthly_detail: bool,
}

fn default_avg_check() -> f64 { 20_000.0 }
fn default_purchases_per_year() -> f64 { 2.5 }
fn default_margin_pct() -> f64 { 50.0 }
fn default_cac() -> f64 { 15_000.0 }
fn default_monthly_churn_pct() -> f64 { 8.0 }
fn default_discount_rate_pct() -> f64 { 12.0 }
fn default_horizon_months() -> u32 { 36 }
fn default_industry() -> Industry { Industry::Saas }
fn default_true() -> bool { true }

/// One scenario in the response
#[derive(Debug, Serialize)]
pub struct ScenarioOutput {
    pub scenario: Scenario,
    pub summary: SummaryMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<MonthRow>,
}

/// Output for one LTV calculation
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub warnings: Vec<String>,
    pub summary: SummaryMetrics,
    pub scenarios: Vec<ScenarioOutput>,
    pub sensitivity: SensitivityTable,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, errors: &[String]) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(
            serde_json::json!({ "errors": errors }).to_string(),
        ))
        .unwrap()
}

fn json_response(body: &CalculationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &[format!("Invalid JSON: {e}")]));
        }
    };

    let params = InputParameters {
        avg_check: request.avg_check,
        purchases_per_year: request.purchases_per_year,
        margin_pct: request.margin_pct,
        cac: request.cac,
        monthly_churn_pct: request.monthly_churn_pct,
        discount_rate_pct: request.discount_rate_pct,
        horizon_months: request.horizon_months,
    };

    // Blocking errors abort before any projection runs
    let report = params.validate();
    if report.is_blocking() {
        return Ok(error_response(422, &report.error_messages()));
    }

    let engine = ProjectionEngine::new(ProjectionConfig {
        detailed_output: request.include_monthly_detail,
        ..Default::default()
    });
    let scenarios = ScenarioRunner::new(engine).run(&params);
    let sensitivity = sensitivity::sweep(&params, &sensitivity::default_multipliers());

    let benchmark = BenchmarkTable::builtin().get(request.industry);
    let base_summary = scenarios.get(Scenario::Base).summary.clone();
    let insights = generate_insights(&base_summary, &params, &benchmark);
    let recommendations = generate_recommendations(&params);

    let scenario_outputs = scenarios
        .iter()
        .map(|(scenario, result)| ScenarioOutput {
            scenario,
            summary: result.summary.clone(),
            months: result.rows.clone(),
        })
        .collect();

    let execution_time_ms = start.elapsed().as_millis() as u64;
    info!(
        "calculation complete: horizon={} industry={:?} elapsed={}ms",
        params.horizon_months, request.industry, execution_time_ms
    );

    let response = CalculationResponse {
        warnings: report.warning_messages(),
        summary: base_summary,
        scenarios: scenario_outputs,
        sensitivity,
        insights,
        recommendations,
        generated_at: Utc::now(),
        execution_time_ms,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
