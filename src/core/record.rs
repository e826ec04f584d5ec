use crate::core::year::Year;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed indicator datasets.
///
/// Each dataset is shipped as a JSON array of yearly records in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatasetName {
    MinimumWage,
    MedianPersonalIncome,
    AverageSalary,
    AverageHomePrice,
    AverageTuitionPrice,
}

impl DatasetName {
    pub const ALL: [DatasetName; 5] = [
        DatasetName::MinimumWage,
        DatasetName::MedianPersonalIncome,
        DatasetName::AverageSalary,
        DatasetName::AverageHomePrice,
        DatasetName::AverageTuitionPrice,
    ];

    /// Stable short name, e.g. `minimumWage`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetName::MinimumWage => "minimumWage",
            DatasetName::MedianPersonalIncome => "medianPersonalIncome",
            DatasetName::AverageSalary => "averageSalary",
            DatasetName::AverageHomePrice => "averageHomePrice",
            DatasetName::AverageTuitionPrice => "averageTuitionPrice",
        }
    }

    /// File the dataset is stored in inside a data directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasetName {
    type Err = String;

    /// Accepts the short name with or without the `.json` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix(".json").unwrap_or(s);
        DatasetName::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("unknown dataset: {s}"))
    }
}

/// A single `{ "year": ..., <field>: <number>, ... }` entry of a dataset.
///
/// Non-year fields are kept as raw JSON so that a field holding `null` or a
/// non-numeric value can be told apart from a field that is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: Year,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl YearlyRecord {
    pub fn new(year: Year) -> Self {
        Self {
            year,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style helper used mostly by tests and the synthetic generator.
    pub fn with_value(mut self, field: impl Into<String>, value: Decimal) -> Self {
        self.fields.insert(field.into(), decimal_to_json(value));
        self
    }

    pub fn with_null(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into(), serde_json::Value::Null);
        self
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Numeric value of `field`, or `None` when it is missing, null, or not a number.
    pub fn number(&self, field: &str) -> Option<Decimal> {
        self.fields.get(field).and_then(json_to_decimal)
    }
}

/// Exact conversion from a JSON number, going through its textual form.
pub fn json_to_decimal(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        _ => None,
    }
}

fn decimal_to_json(value: Decimal) -> serde_json::Value {
    serde_json::from_str(&value.normalize().to_string()).unwrap_or(serde_json::Value::Null)
}

/// The records of one dataset, sorted by year.
///
/// Source order is preserved between records sharing a year, so the first
/// one listed in the file is the one that answers lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: DatasetName,
    records: Vec<YearlyRecord>,
}

impl Dataset {
    pub fn new(name: DatasetName, mut records: Vec<YearlyRecord>) -> Self {
        records.sort_by_key(|r| r.year);
        Self { name, records }
    }

    /// Parse a dataset from its JSON array representation.
    pub fn from_json(name: DatasetName, json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<YearlyRecord> = serde_json::from_str(json)?;
        Ok(Self::new(name, records))
    }

    pub fn name(&self) -> DatasetName {
        self.name
    }

    pub fn records(&self) -> &[YearlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Years covered, ascending, without duplicates.
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.records.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }
}

/// All datasets that were loaded successfully, keyed by name.
///
/// An absent entry is a normal state: every query against it resolves to
/// "no data".
#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    datasets: HashMap<DatasetName, Dataset>,
}

impl DatasetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dataset: Dataset) {
        self.datasets.insert(dataset.name(), dataset);
    }

    pub fn get(&self, name: DatasetName) -> Option<&Dataset> {
        self.datasets.get(&name)
    }

    pub fn contains(&self, name: DatasetName) -> bool {
        self.datasets.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Dataset names with no loaded data, in canonical order.
    pub fn missing(&self) -> Vec<DatasetName> {
        DatasetName::ALL
            .iter()
            .copied()
            .filter(|name| !self.contains(*name))
            .collect()
    }
}

impl FromIterator<Dataset> for DatasetCatalog {
    fn from_iter<T: IntoIterator<Item = Dataset>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for dataset in iter {
            catalog.insert(dataset);
        }
        catalog
    }
}
