use crate::core::format::Rendered;
use crate::core::indicator::{Expense, IncomeSource, Indicator};
use crate::core::year::Year;
use crate::resolution::resolver::ResolvedValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every indicator resolved for one selected year.
///
/// Always holds an entry per [`Indicator`]; indicators that could not be
/// resolved carry "no data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    year: Year,
    values: BTreeMap<Indicator, ResolvedValue>,
}

impl Snapshot {
    /// Build from resolved values; indicators not supplied become "no data".
    pub fn new(year: Year, resolved: impl IntoIterator<Item = (Indicator, ResolvedValue)>) -> Self {
        let mut values: BTreeMap<Indicator, ResolvedValue> = resolved.into_iter().collect();
        for indicator in Indicator::ALL {
            values
                .entry(indicator)
                .or_insert_with(|| ResolvedValue::not_found(indicator.field()));
        }
        Self { year, values }
    }

    /// Convenience constructor from plain numbers, all sourced from `year`.
    pub fn from_numbers(
        year: Year,
        numbers: impl IntoIterator<Item = (Indicator, Option<Decimal>)>,
    ) -> Self {
        Self::new(
            year,
            numbers.into_iter().map(|(indicator, value)| {
                (
                    indicator,
                    ResolvedValue {
                        field: indicator.field().to_string(),
                        source_year: Some(year),
                        value,
                    },
                )
            }),
        )
    }

    /// The year that was requested (individual values may come from earlier years).
    pub fn year(&self) -> Year {
        self.year
    }

    pub fn resolved(&self, indicator: Indicator) -> Option<&ResolvedValue> {
        self.values.get(&indicator)
    }

    pub fn value(&self, indicator: Indicator) -> Option<Decimal> {
        self.values.get(&indicator).and_then(|v| v.value)
    }

    pub fn income(&self, source: IncomeSource) -> Option<Decimal> {
        self.value(source.indicator())
    }

    pub fn expense(&self, expense: Expense) -> Option<Decimal> {
        self.value(expense.indicator())
    }

    /// Display form of an indicator in its own number format.
    pub fn rendered(&self, indicator: Indicator) -> Rendered {
        Rendered::new(self.value(indicator), indicator.format())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Indicator, &ResolvedValue)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::NO_DATA;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_indicators_filled_with_no_data() {
        let snapshot = Snapshot::from_numbers(2020, [(Indicator::MinWage, Some(dec!(7.25)))]);
        assert_eq!(snapshot.iter().count(), Indicator::ALL.len());
        assert_eq!(snapshot.value(Indicator::MinWage), Some(dec!(7.25)));
        assert!(snapshot
            .resolved(Indicator::AverageSalary)
            .unwrap()
            .is_not_found());
    }

    #[test]
    fn test_rendered_uses_indicator_format() {
        let snapshot = Snapshot::from_numbers(
            2020,
            [
                (Indicator::MinWage, Some(dec!(7.25))),
                (Indicator::AverageHomePrice, Some(dec!(389400))),
            ],
        );
        assert_eq!(snapshot.rendered(Indicator::MinWage).text, "$7.25");
        assert_eq!(snapshot.rendered(Indicator::AverageHomePrice).text, "$389,400");
        assert_eq!(snapshot.rendered(Indicator::PublicTuition).text, NO_DATA);
    }
}
