//! Synthetic indicator datasets with sparse year coverage.
//!
//! Used for benchmarks, property tests and the `generate` command. Values
//! grow roughly geometrically from plausible starting levels; each year is
//! kept with probability `coverage`, leaving gaps for the resolver to fall
//! back over.

use crate::core::indicator::Indicator;
use crate::core::record::{Dataset, DatasetCatalog, DatasetName, YearlyRecord};
use crate::core::year::Year;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Configuration for generating a synthetic catalog.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// First year that may carry a record.
    pub start_year: Year,
    /// Last year that may carry a record.
    pub end_year: Year,
    /// Probability in `[0, 1]` that a given year has a record.
    pub coverage: f64,
    /// Average annual growth rate applied to every indicator.
    pub annual_growth: f64,
    /// Fixed seed for reproducible output; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            start_year: 1950,
            end_year: 2024,
            coverage: 0.6,
            annual_growth: 0.045,
            seed: None,
        }
    }
}

/// Starting level of each indicator at `start_year`.
fn base_value(indicator: Indicator) -> f64 {
    match indicator {
        Indicator::MinWage => 0.75,
        Indicator::MedianIncome => 2_100.0,
        Indicator::AverageSalary => 2_900.0,
        Indicator::AverageHomePrice => 8_500.0,
        Indicator::PublicTuition => 280.0,
        Indicator::PrivateTuition => 1_200.0,
    }
}

fn to_decimal(value: f64, decimals: u32) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(decimals)
}

/// Generate one dataset.
pub fn generate_dataset(name: DatasetName, config: &SyntheticConfig, rng: &mut impl Rng) -> Dataset {
    let indicators: Vec<Indicator> = Indicator::ALL
        .into_iter()
        .filter(|i| i.dataset() == name)
        .collect();
    let coverage = config.coverage.clamp(0.0, 1.0);
    let mut records = Vec::new();

    for year in config.start_year..=config.end_year {
        if !rng.gen_bool(coverage) {
            continue;
        }
        let elapsed = (year - config.start_year) as f64;
        let trend = (1.0 + config.annual_growth).powf(elapsed);
        let mut record = YearlyRecord::new(year);
        for indicator in &indicators {
            let jitter = rng.gen_range(0.95..1.05);
            let value = base_value(*indicator) * trend * jitter;
            record = record.with_value(indicator.field(), to_decimal(value, indicator.format().decimals()));
        }
        records.push(record);
    }

    Dataset::new(name, records)
}

/// Generate all five datasets.
pub fn generate_catalog(config: &SyntheticConfig) -> DatasetCatalog {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    DatasetName::ALL
        .into_iter()
        .map(|name| generate_dataset(name, config, &mut rng))
        .collect()
}
