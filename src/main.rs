//! LTV Analytics CLI
//!
//! Command-line interface for running LTV projections

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ltv_analytics::insights::{generate_insights, generate_recommendations};
use ltv_analytics::{
    sensitivity, BenchmarkTable, Industry, InputParameters, ProjectionConfig, ProjectionEngine,
    Scenario, ScenarioRunner, ScenarioSet, ALLOWED_HORIZONS,
};

#[derive(Parser, Debug)]
#[command(
    name = "ltv-analytics",
    version,
    about = "Customer lifetime value projection and unit-economics analysis"
)]
struct Cli {
    /// Average purchase amount
    #[arg(long, default_value_t = 20_000.0)]
    avg_check: f64,

    /// Purchases per year
    #[arg(long, default_value_t = 2.5)]
    purchases_per_year: f64,

    /// Margin percentage (0-100)
    #[arg(long, default_value_t = 50.0)]
    margin_pct: f64,

    /// Customer acquisition cost
    #[arg(long, default_value_t = 15_000.0)]
    cac: f64,

    /// Monthly churn percentage
    #[arg(long, default_value_t = 8.0)]
    monthly_churn_pct: f64,

    /// Annual discount rate percentage
    #[arg(long, default_value_t = 12.0)]
    discount_rate_pct: f64,

    /// Planning horizon in months
    #[arg(long, default_value_t = 36, value_parser = parse_horizon)]
    horizon_months: u32,

    /// Industry for benchmark comparison
    #[arg(long, value_enum, default_value = "saas")]
    industry: Industry,

    /// CSV file overriding the built-in benchmarks
    #[arg(long)]
    benchmarks_csv: Option<PathBuf>,

    /// Output path for the per-scenario monthly detail CSV
    #[arg(long, default_value = "ltv_projection.csv")]
    output: PathBuf,
}

fn parse_horizon(s: &str) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("invalid horizon: {s}"))?;
    if ALLOWED_HORIZONS.contains(&value) {
        Ok(value)
    } else {
        Err(format!("horizon must be one of {ALLOWED_HORIZONS:?}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("LTV Analytics v0.1.0");
    println!("====================\n");

    let params = InputParameters {
        avg_check: cli.avg_check,
        purchases_per_year: cli.purchases_per_year,
        margin_pct: cli.margin_pct,
        cac: cli.cac,
        monthly_churn_pct: cli.monthly_churn_pct,
        discount_rate_pct: cli.discount_rate_pct,
        horizon_months: cli.horizon_months,
    };

    let report = params.validate();
    if report.is_blocking() {
        for error in &report.errors {
            eprintln!("error: {error}");
        }
        anyhow::bail!("input validation failed");
    }
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    if !report.warnings.is_empty() {
        println!();
    }

    let benchmarks = match &cli.benchmarks_csv {
        Some(path) => BenchmarkTable::from_csv_path(path).map_err(|e| {
            anyhow::anyhow!("failed to load benchmarks from {}: {e}", path.display())
        })?,
        None => BenchmarkTable::builtin(),
    };
    let benchmark = benchmarks.get(cli.industry);

    let engine = ProjectionEngine::new(ProjectionConfig::default());
    let scenarios = ScenarioRunner::new(engine).run(&params);
    let sensitivity_table = sensitivity::sweep(&params, &sensitivity::default_multipliers());

    let base = scenarios.get(Scenario::Base);

    // Summary block
    let summary = &base.summary;
    println!("Summary (Base scenario, {} industry):", cli.industry.label());
    println!("  LTV: {:.2}", summary.ltv);
    println!("  LTV/CAC: {:.2}", summary.ltv_to_cac);
    println!("  ROI: {:.1}%", summary.roi * 100.0);
    match summary.payback_month {
        Some(month) => println!("  Payback month: {month}"),
        None => println!("  Payback month: not reached within horizon"),
    }
    if summary.customer_lifetime_months.is_finite() {
        println!(
            "  Customer lifetime: {:.1} months",
            summary.customer_lifetime_months
        );
    } else {
        println!("  Customer lifetime: unbounded (zero churn)");
    }
    println!("  Monthly retention: {:.1}%", summary.monthly_retention_pct);
    println!("  Annual retention: {:.1}%", summary.annual_retention_pct);
    println!("  Confidence score: {:.0}", summary.confidence_score);

    // Scenario comparison
    println!("\nScenarios:");
    println!(
        "{:>12} {:>14} {:>10} {:>10} {:>10}",
        "Scenario", "LTV", "LTV/CAC", "ROI %", "Payback"
    );
    println!("{}", "-".repeat(60));
    for (scenario, result) in scenarios.iter() {
        let s = &result.summary;
        let payback = s
            .payback_month
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>12} {:>14.2} {:>10.2} {:>10.1} {:>10}",
            scenario.name(),
            s.ltv,
            s.ltv_to_cac,
            s.roi * 100.0,
            payback
        );
    }

    // Monthly detail (first 24 months to console)
    println!("\nBase scenario detail:");
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>14} {:>14}",
        "Month", "Survival %", "Seasonality", "Discount", "Monthly CF", "Cumulative CF"
    );
    println!("{}", "-".repeat(75));
    for row in base.rows.iter().take(24) {
        println!(
            "{:>5} {:>12.2} {:>12.4} {:>12.6} {:>14.2} {:>14.2}",
            row.month,
            row.survival * 100.0,
            row.seasonality,
            row.discount_factor,
            row.monthly_cash_flow,
            row.cumulative_cash_flow
        );
    }
    if base.rows.len() > 24 {
        println!("... ({} more months)", base.rows.len() - 24);
    }

    // Sensitivity extremes
    println!("\nSensitivity (LTV/CAC at 0.5x / 1.0x / 1.5x):");
    for curve in &sensitivity_table.curves {
        let at = |m: f64| {
            curve
                .points
                .iter()
                .find(|p| (p.multiplier - m).abs() < 1e-9)
                .map(|p| p.ltv_to_cac)
                .unwrap_or(f64::NAN)
        };
        println!(
            "  {:<16} {:>8.2} {:>8.2} {:>8.2}",
            curve.field.label(),
            at(0.5),
            at(1.0),
            at(1.5)
        );
    }

    // Insights and recommendations
    println!("\nInsights:");
    for insight in generate_insights(summary, &params, &benchmark) {
        println!("  [{:?}] {}", insight.kind, insight.text);
    }

    println!("\nRecommendations:");
    for rec in generate_recommendations(&params) {
        println!("  - {rec}");
    }

    write_detail_csv(&cli.output, &scenarios)
        .with_context(|| format!("unable to write {}", cli.output.display()))?;
    println!("\nFull results written to: {}", cli.output.display());

    Ok(())
}

/// Write all months for all scenarios to CSV
fn write_detail_csv(path: &PathBuf, scenarios: &ScenarioSet) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Scenario,Month,SurvivalPct,Seasonality,DiscountFactor,MonthlyCF,CumulativeCF"
    )?;

    for (scenario, result) in scenarios.iter() {
        for row in &result.rows {
            writeln!(
                file,
                "{},{},{:.4},{:.6},{:.8},{:.2},{:.2}",
                scenario.name(),
                row.month,
                row.survival * 100.0,
                row.seasonality,
                row.discount_factor,
                row.monthly_cash_flow,
                row.cumulative_cash_flow
            )?;
        }
    }

    Ok(())
}
