use crate::core::record::{Dataset, YearlyRecord};
use crate::core::year::{EngineConfig, Year, DEFAULT_FLOOR_YEAR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The field(s) to read from a dataset.
///
/// A multi-field query is answered from a single record, so every value
/// comes from the same year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldQuery {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldQuery {
    pub fn fields(&self) -> &[String] {
        match self {
            FieldQuery::Single(field) => std::slice::from_ref(field),
            FieldQuery::Multiple(fields) => fields,
        }
    }
}

impl From<&str> for FieldQuery {
    fn from(field: &str) -> Self {
        FieldQuery::Single(field.to_string())
    }
}

impl From<&[&str]> for FieldQuery {
    fn from(fields: &[&str]) -> Self {
        FieldQuery::Multiple(fields.iter().map(|f| f.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldQuery {
    fn from(fields: [&str; N]) -> Self {
        FieldQuery::Multiple(fields.iter().map(|f| f.to_string()).collect())
    }
}

/// A resolved number for one field, or "no data".
///
/// `source_year` is the year of the record that answered, or `None` when no
/// record exists in `[floor, target]`. A record that exists but lacks a
/// numeric value for the field has a `source_year` and no `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValue {
    pub field: String,
    pub source_year: Option<Year>,
    pub value: Option<Decimal>,
}

impl ResolvedValue {
    pub fn not_found(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            source_year: None,
            value: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.source_year.is_none()
    }

    pub fn is_no_data(&self) -> bool {
        self.value.is_none()
    }
}

/// All requested fields, read from the single record at `year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub year: Year,
    pub values: Vec<ResolvedValue>,
}

impl ResolvedRecord {
    pub fn get(&self, field: &str) -> Option<&ResolvedValue> {
        self.values.iter().find(|v| v.field == field)
    }

    pub fn value(&self, field: &str) -> Option<Decimal> {
        self.get(field).and_then(|v| v.value)
    }
}

/// Finds the most recent record at or before a target year.
///
/// Lookups never look past the target year and never below the configured
/// floor year.
///
/// # Examples
///
/// ```
/// use work_value::core::record::{Dataset, DatasetName, YearlyRecord};
/// use work_value::resolution::resolver::YearResolver;
/// use rust_decimal_macros::dec;
///
/// let wages = Dataset::new(
///     DatasetName::MinimumWage,
///     vec![
///         YearlyRecord::new(1965).with_value("min_wage", dec!(1.25)),
///         YearlyRecord::new(1970).with_value("min_wage", dec!(1.45)),
///     ],
/// );
///
/// let resolver = YearResolver::default();
/// let resolved = resolver.resolve_field(Some(&wages), 1968, "min_wage");
/// assert_eq!(resolved.value, Some(dec!(1.25)));
/// assert_eq!(resolved.source_year, Some(1965));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearResolver {
    floor_year: Year,
}

impl Default for YearResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FLOOR_YEAR)
    }
}

impl YearResolver {
    pub fn new(floor_year: Year) -> Self {
        Self { floor_year }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.floor_year)
    }

    pub fn floor_year(&self) -> Year {
        self.floor_year
    }

    /// The record answering queries for `target`, if any.
    ///
    /// Binary search for the largest year `<= target`. An exact year match
    /// always wins, and among records sharing that year the first in source
    /// order is used.
    pub fn find_record<'a>(&self, dataset: &'a Dataset, target: Year) -> Option<&'a YearlyRecord> {
        if target < self.floor_year {
            return None;
        }
        let records = dataset.records();
        let end = records.partition_point(|r| r.year <= target);
        let year = records[..end].last()?.year;
        if year < self.floor_year {
            return None;
        }
        let first = records[..end].partition_point(|r| r.year < year);
        let record = &records[first];
        if record.year != target {
            log::debug!(
                "{}: no record for {}, falling back to {}",
                dataset.name(),
                target,
                record.year
            );
        }
        Some(record)
    }

    /// Resolve every field of `query` from one record.
    ///
    /// Returns `None` (not found) when the dataset is absent or has no record
    /// in `[floor, target]`.
    pub fn resolve(
        &self,
        dataset: Option<&Dataset>,
        target: Year,
        query: &FieldQuery,
    ) -> Option<ResolvedRecord> {
        let record = self.find_record(dataset?, target)?;
        let values = query
            .fields()
            .iter()
            .map(|field| {
                let value = record.number(field);
                if value.is_none() {
                    log::debug!("record {} has no numeric '{}'", record.year, field);
                }
                ResolvedValue {
                    field: field.clone(),
                    source_year: Some(record.year),
                    value,
                }
            })
            .collect();
        Some(ResolvedRecord {
            year: record.year,
            values,
        })
    }

    /// Resolve a multi-field query, yielding one value per field even when
    /// nothing was found.
    pub fn resolve_all(
        &self,
        dataset: Option<&Dataset>,
        target: Year,
        query: &FieldQuery,
    ) -> Vec<ResolvedValue> {
        match self.resolve(dataset, target, query) {
            Some(record) => record.values,
            None => query
                .fields()
                .iter()
                .map(|field| ResolvedValue::not_found(field.as_str()))
                .collect(),
        }
    }

    /// Single-field lookup; shares [`YearResolver::resolve`] exactly.
    pub fn resolve_field(&self, dataset: Option<&Dataset>, target: Year, field: &str) -> ResolvedValue {
        self.resolve_all(dataset, target, &FieldQuery::from(field))
            .pop()
            .unwrap_or_else(|| ResolvedValue::not_found(field))
    }
}
