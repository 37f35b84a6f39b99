//! Industry benchmark table used for insight generation
//!
//! Built-in constants cover the supported verticals; a CSV loader allows
//! deployments to re-tune thresholds without a rebuild.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported industry verticals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Saas,
    Ecommerce,
    Marketplace,
    Fintech,
    /// Salons, fitness, education and similar service businesses
    ConsumerServices,
}

impl Industry {
    /// All verticals in presentation order
    pub const ALL: [Industry; 5] = [
        Industry::Saas,
        Industry::Ecommerce,
        Industry::Marketplace,
        Industry::Fintech,
        Industry::ConsumerServices,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Saas => "SaaS",
            Industry::Ecommerce => "E-commerce",
            Industry::Marketplace => "Marketplace",
            Industry::Fintech => "Fintech",
            Industry::ConsumerServices => "Consumer services",
        }
    }

    /// Parse a CSV cell into an industry
    fn parse(s: &str) -> Option<Industry> {
        match s.trim().to_lowercase().as_str() {
            "saas" => Some(Industry::Saas),
            "e-commerce" | "ecommerce" => Some(Industry::Ecommerce),
            "marketplace" => Some(Industry::Marketplace),
            "fintech" => Some(Industry::Fintech),
            "consumer services" | "consumer_services" | "services" => {
                Some(Industry::ConsumerServices)
            }
            _ => None,
        }
    }
}

/// Benchmark thresholds for one industry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    /// Minimum healthy LTV/CAC ratio
    pub ltv_cac_min: f64,

    /// Maximum recommended payback period (months)
    pub payback_max: u32,

    /// Typical monthly churn percentage
    pub churn_typical: f64,
}

/// Fallback when an industry has no entry in a loaded table
const SAAS_BENCHMARK: IndustryBenchmark = IndustryBenchmark {
    ltv_cac_min: 3.0,
    payback_max: 12,
    churn_typical: 5.0,
};

/// Read-only lookup table of benchmarks by industry
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    entries: HashMap<Industry, IndustryBenchmark>,
}

impl BenchmarkTable {
    /// Built-in benchmark constants
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(Industry::Saas, SAAS_BENCHMARK);
        entries.insert(
            Industry::Ecommerce,
            IndustryBenchmark {
                ltv_cac_min: 2.5,
                payback_max: 6,
                churn_typical: 15.0,
            },
        );
        entries.insert(
            Industry::Marketplace,
            IndustryBenchmark {
                ltv_cac_min: 2.0,
                payback_max: 8,
                churn_typical: 12.0,
            },
        );
        entries.insert(
            Industry::Fintech,
            IndustryBenchmark {
                ltv_cac_min: 4.0,
                payback_max: 18,
                churn_typical: 8.0,
            },
        );
        entries.insert(
            Industry::ConsumerServices,
            IndustryBenchmark {
                ltv_cac_min: 2.0,
                payback_max: 9,
                churn_typical: 20.0,
            },
        );
        Self { entries }
    }

    /// Benchmark for an industry, falling back to the SaaS thresholds
    pub fn get(&self, industry: Industry) -> IndustryBenchmark {
        self.entries.get(&industry).copied().unwrap_or(SAAS_BENCHMARK)
    }

    /// Load a benchmark table from a CSV file
    ///
    /// Expected columns: industry,ltv_cac_min,payback_max,churn_typical
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut entries = HashMap::new();

        for result in reader.records() {
            let record = result?;
            let industry = Industry::parse(&record[0])
                .ok_or_else(|| format!("unknown industry: {}", &record[0]))?;
            let ltv_cac_min: f64 = record[1].parse()?;
            let payback_max: u32 = record[2].parse()?;
            let churn_typical: f64 = record[3].parse()?;

            entries.insert(
                industry,
                IndustryBenchmark {
                    ltv_cac_min,
                    payback_max,
                    churn_typical,
                },
            );
        }

        Ok(Self { entries })
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_covers_all_industries() {
        let table = BenchmarkTable::builtin();
        for industry in Industry::ALL {
            let benchmark = table.get(industry);
            assert!(benchmark.ltv_cac_min > 0.0);
            assert!(benchmark.payback_max > 0);
        }
    }

    #[test]
    fn test_builtin_saas_thresholds() {
        let benchmark = BenchmarkTable::builtin().get(Industry::Saas);
        assert_relative_eq!(benchmark.ltv_cac_min, 3.0);
        assert_eq!(benchmark.payback_max, 12);
        assert_relative_eq!(benchmark.churn_typical, 5.0);
    }

    #[test]
    fn test_missing_entry_falls_back_to_saas() {
        let table = BenchmarkTable {
            entries: HashMap::new(),
        };
        let benchmark = table.get(Industry::Fintech);
        assert_relative_eq!(benchmark.ltv_cac_min, SAAS_BENCHMARK.ltv_cac_min);
    }

    #[test]
    fn test_csv_loader_round_trip() {
        let path = std::env::temp_dir().join("ltv_benchmarks_test.csv");
        std::fs::write(
            &path,
            "industry,ltv_cac_min,payback_max,churn_typical\n\
             saas,3.5,10,4\n\
             e-commerce,2.0,5,18\n",
        )
        .unwrap();

        let table = BenchmarkTable::from_csv_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let saas = table.get(Industry::Saas);
        assert_relative_eq!(saas.ltv_cac_min, 3.5);
        assert_eq!(saas.payback_max, 10);

        let ecommerce = table.get(Industry::Ecommerce);
        assert_relative_eq!(ecommerce.churn_typical, 18.0);
    }

    #[test]
    fn test_csv_loader_rejects_unknown_industry() {
        let path = std::env::temp_dir().join("ltv_benchmarks_bad.csv");
        std::fs::write(
            &path,
            "industry,ltv_cac_min,payback_max,churn_typical\nairlines,1.0,12,5\n",
        )
        .unwrap();

        let result = BenchmarkTable::from_csv_path(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
