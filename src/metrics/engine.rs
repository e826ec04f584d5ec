use crate::core::format::{round_to, NumberFormat, Rendered};
use crate::core::indicator::{DerivedKey, IncomeSource, Indicator};
use crate::core::record::{DatasetCatalog, DatasetName};
use crate::core::year::{EngineConfig, Year, DEFAULT_HOURS_PER_YEAR};
use crate::metrics::snapshot::Snapshot;
use crate::resolution::resolver::{FieldQuery, YearResolver};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours of work at one income source needed to pay for one expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetric {
    pub key: DerivedKey,
    /// Whole hours, or `None` when either side is "no data".
    pub hours: Option<Decimal>,
}

impl DerivedMetric {
    pub fn metric_name(&self) -> String {
        self.key.metric_name()
    }

    pub fn rendered(&self) -> Rendered {
        Rendered::new(self.hours, NumberFormat::Count)
    }
}

/// Resolves a year's indicators and derives the hours-of-work metrics.
///
/// Stateless apart from its configuration: the same inputs always produce
/// the same outputs.
///
/// # Examples
///
/// ```
/// use work_value::core::indicator::{DerivedKey, Expense, IncomeSource, Indicator};
/// use work_value::metrics::engine::MetricsEngine;
/// use work_value::metrics::snapshot::Snapshot;
/// use rust_decimal_macros::dec;
///
/// let snapshot = Snapshot::from_numbers(
///     2024,
///     [
///         (Indicator::MinWage, Some(dec!(15.00))),
///         (Indicator::AverageHomePrice, Some(dec!(300000))),
///     ],
/// );
///
/// let engine = MetricsEngine::default();
/// let metrics = engine.compute_derived_metrics(&snapshot);
/// let home = metrics
///     .iter()
///     .find(|m| m.key == DerivedKey::new(IncomeSource::MinWage, Expense::AverageHome))
///     .unwrap();
/// assert_eq!(home.hours, Some(dec!(20000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsEngine {
    resolver: YearResolver,
    hours_per_year: Decimal,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(YearResolver::default(), DEFAULT_HOURS_PER_YEAR)
    }
}

impl MetricsEngine {
    pub fn new(resolver: YearResolver, hours_per_year: u32) -> Self {
        Self {
            resolver,
            hours_per_year: Decimal::from(hours_per_year),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(YearResolver::from_config(config), config.hours_per_year)
    }

    /// Resolve all six indicators for `year`.
    ///
    /// Indicators sharing a dataset (the tuition pair) are resolved with one
    /// multi-field query so they always come from the same record.
    pub fn compute_snapshot(&self, catalog: &DatasetCatalog, year: Year) -> Snapshot {
        let mut resolved = Vec::with_capacity(Indicator::ALL.len());
        for name in DatasetName::ALL {
            let indicators: Vec<Indicator> = Indicator::ALL
                .into_iter()
                .filter(|i| i.dataset() == name)
                .collect();
            let query = match indicators.as_slice() {
                [single] => FieldQuery::from(single.field()),
                many => FieldQuery::Multiple(many.iter().map(|i| i.field().to_string()).collect()),
            };
            let values = self.resolver.resolve_all(catalog.get(name), year, &query);
            resolved.extend(indicators.into_iter().zip(values));
        }
        Snapshot::new(year, resolved)
    }

    /// Hourly-equivalent income for a source.
    ///
    /// Minimum wage is used as-is; annual figures are divided by the
    /// configured hours per year.
    pub fn hourly_income(&self, snapshot: &Snapshot, source: IncomeSource) -> Option<Decimal> {
        let income = snapshot.income(source)?;
        if source.is_hourly() {
            Some(income)
        } else {
            income.checked_div(self.hours_per_year)
        }
    }

    /// `round(expense / hourly)`, or `None` if the division is undefined.
    pub fn hours_needed(expense: Option<Decimal>, hourly: Option<Decimal>) -> Option<Decimal> {
        let hours = expense?.checked_div(hourly?)?;
        Some(round_to(hours, 0))
    }

    /// All nine income × expense hours-of-work metrics, grouped by income source.
    pub fn compute_derived_metrics(&self, snapshot: &Snapshot) -> Vec<DerivedMetric> {
        DerivedKey::all()
            .map(|key| {
                let hourly = self.hourly_income(snapshot, key.income);
                let hours = Self::hours_needed(snapshot.expense(key.expense), hourly);
                if hours.is_none() {
                    log::debug!("{}: no data for {}", snapshot.year(), key);
                }
                DerivedMetric { key, hours }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::NO_DATA;
    use crate::core::indicator::Expense;
    use crate::core::record::{Dataset, YearlyRecord};
    use rust_decimal_macros::dec;

    fn full_snapshot() -> Snapshot {
        Snapshot::from_numbers(
            2020,
            [
                (Indicator::MinWage, Some(dec!(7.25))),
                (Indicator::MedianIncome, Some(dec!(35977))),
                (Indicator::AverageSalary, Some(dec!(55628))),
                (Indicator::AverageHomePrice, Some(dec!(389400))),
                (Indicator::PublicTuition, Some(dec!(9349))),
                (Indicator::PrivateTuition, Some(dec!(37650))),
            ],
        )
    }

    fn hours(metrics: &[DerivedMetric], income: IncomeSource, expense: Expense) -> Option<Decimal> {
        metrics
            .iter()
            .find(|m| m.key == DerivedKey::new(income, expense))
            .and_then(|m| m.hours)
    }

    #[test]
    fn test_hours_needed_rounds() {
        assert_eq!(
            MetricsEngine::hours_needed(Some(dec!(300000)), Some(dec!(15))),
            Some(dec!(20000))
        );
        assert_eq!(
            MetricsEngine::hours_needed(Some(dec!(10)), Some(dec!(4))),
            Some(dec!(3))
        );
    }

    #[test]
    fn test_zero_income_is_no_data() {
        assert_eq!(MetricsEngine::hours_needed(Some(dec!(100)), Some(Decimal::ZERO)), None);
    }

    #[test]
    fn test_negative_result_not_clamped() {
        assert_eq!(
            MetricsEngine::hours_needed(Some(dec!(-100)), Some(dec!(10))),
            Some(dec!(-10))
        );
    }

    #[test]
    fn test_annual_income_divided_by_hours_per_year() {
        let engine = MetricsEngine::default();
        let snapshot = full_snapshot();
        assert_eq!(
            engine.hourly_income(&snapshot, IncomeSource::MinWage),
            Some(dec!(7.25))
        );
        let hourly = engine
            .hourly_income(&snapshot, IncomeSource::MedianIncome)
            .unwrap();
        assert_eq!(hourly, dec!(35977) / dec!(2080));
    }

    #[test]
    fn test_nine_metrics() {
        let engine = MetricsEngine::default();
        let metrics = engine.compute_derived_metrics(&full_snapshot());
        assert_eq!(metrics.len(), 9);
        assert!(metrics.iter().all(|m| m.hours.is_some()));

        // 389400 / 7.25 = 53710.34...
        assert_eq!(
            hours(&metrics, IncomeSource::MinWage, Expense::AverageHome),
            Some(dec!(53710))
        );
        // 9349 / (55628 / 2080) = 349.57...
        assert_eq!(
            hours(&metrics, IncomeSource::AverageSalary, Expense::PublicTuition),
            Some(dec!(350))
        );
    }

    #[test]
    fn test_no_data_propagates() {
        let engine = MetricsEngine::default();
        let snapshot = Snapshot::from_numbers(
            2020,
            [
                (Indicator::MinWage, Some(dec!(7.25))),
                (Indicator::AverageHomePrice, Some(dec!(389400))),
            ],
        );
        let metrics = engine.compute_derived_metrics(&snapshot);
        assert!(hours(&metrics, IncomeSource::MinWage, Expense::AverageHome).is_some());
        assert!(hours(&metrics, IncomeSource::MinWage, Expense::PublicTuition).is_none());
        assert!(hours(&metrics, IncomeSource::MedianIncome, Expense::AverageHome).is_none());

        let rendered = metrics
            .iter()
            .find(|m| m.key == DerivedKey::new(IncomeSource::MedianIncome, Expense::AverageHome))
            .unwrap()
            .rendered();
        assert_eq!(rendered.text, NO_DATA);
    }

    #[test]
    fn test_custom_hours_per_year() {
        let engine = MetricsEngine::new(YearResolver::default(), 2000);
        let snapshot = Snapshot::from_numbers(
            2020,
            [
                (Indicator::MedianIncome, Some(dec!(40000))),
                (Indicator::AverageHomePrice, Some(dec!(200000))),
            ],
        );
        let metrics = engine.compute_derived_metrics(&snapshot);
        assert_eq!(
            hours(&metrics, IncomeSource::MedianIncome, Expense::AverageHome),
            Some(dec!(10000))
        );
    }

    #[test]
    fn test_compute_snapshot_tuition_from_same_record() {
        let mut catalog = DatasetCatalog::new();
        catalog.insert(Dataset::new(
            DatasetName::AverageTuitionPrice,
            vec![
                YearlyRecord::new(1990)
                    .with_value("public_4yr", dec!(1908))
                    .with_value("private_nonprofit_4yr", dec!(9340)),
                YearlyRecord::new(1995).with_value("public_4yr", dec!(2811)),
            ],
        ));
        catalog.insert(Dataset::new(
            DatasetName::MinimumWage,
            vec![YearlyRecord::new(1991).with_value("min_wage", dec!(4.25))],
        ));

        let engine = MetricsEngine::default();
        let snapshot = engine.compute_snapshot(&catalog, 1998);
        assert_eq!(snapshot.value(Indicator::PublicTuition), Some(dec!(2811)));
        assert_eq!(snapshot.value(Indicator::PrivateTuition), None);
        assert_eq!(
            snapshot.resolved(Indicator::PrivateTuition).unwrap().source_year,
            Some(1995)
        );
        assert_eq!(snapshot.value(Indicator::MinWage), Some(dec!(4.25)));
        assert!(snapshot
            .resolved(Indicator::AverageHomePrice)
            .unwrap()
            .is_not_found());
    }
}
