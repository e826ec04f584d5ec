use crate::core::format::NumberFormat;
use crate::core::record::DatasetName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directly resolved economic indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    MinWage,
    MedianIncome,
    AverageSalary,
    AverageHomePrice,
    PublicTuition,
    PrivateTuition,
}

impl Indicator {
    pub const ALL: [Indicator; 6] = [
        Indicator::MinWage,
        Indicator::MedianIncome,
        Indicator::AverageSalary,
        Indicator::AverageHomePrice,
        Indicator::PublicTuition,
        Indicator::PrivateTuition,
    ];

    /// Name used in cell identifiers, e.g. `yearAMinWage`.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Indicator::MinWage => "MinWage",
            Indicator::MedianIncome => "MedianIncome",
            Indicator::AverageSalary => "AverageSalary",
            Indicator::AverageHomePrice => "AverageHomePrice",
            Indicator::PublicTuition => "PublicTuition",
            Indicator::PrivateTuition => "PrivateTuition",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::MinWage => "Minimum wage (hourly)",
            Indicator::MedianIncome => "Median personal income",
            Indicator::AverageSalary => "Average salary",
            Indicator::AverageHomePrice => "Average home price",
            Indicator::PublicTuition => "Public 4-year tuition",
            Indicator::PrivateTuition => "Private nonprofit 4-year tuition",
        }
    }

    pub fn dataset(&self) -> DatasetName {
        match self {
            Indicator::MinWage => DatasetName::MinimumWage,
            Indicator::MedianIncome => DatasetName::MedianPersonalIncome,
            Indicator::AverageSalary => DatasetName::AverageSalary,
            Indicator::AverageHomePrice => DatasetName::AverageHomePrice,
            Indicator::PublicTuition | Indicator::PrivateTuition => {
                DatasetName::AverageTuitionPrice
            }
        }
    }

    /// Field holding this indicator inside its dataset's records.
    pub fn field(&self) -> &'static str {
        match self {
            Indicator::MinWage => "min_wage",
            Indicator::MedianIncome => "median_personal_income",
            Indicator::AverageSalary => "avg_salary",
            Indicator::AverageHomePrice => "avg_home_price",
            Indicator::PublicTuition => "public_4yr",
            Indicator::PrivateTuition => "private_nonprofit_4yr",
        }
    }

    /// Only the hourly minimum wage is shown with cents.
    pub fn format(&self) -> NumberFormat {
        match self {
            Indicator::MinWage => NumberFormat::Cents,
            _ => NumberFormat::Dollars,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.metric_name())
    }
}

/// An income figure that can be turned into an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeSource {
    MinWage,
    MedianIncome,
    AverageSalary,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 3] = [
        IncomeSource::MinWage,
        IncomeSource::MedianIncome,
        IncomeSource::AverageSalary,
    ];

    pub fn indicator(&self) -> Indicator {
        match self {
            IncomeSource::MinWage => Indicator::MinWage,
            IncomeSource::MedianIncome => Indicator::MedianIncome,
            IncomeSource::AverageSalary => Indicator::AverageSalary,
        }
    }

    /// Minimum wage is already hourly; the others are annual.
    pub fn is_hourly(&self) -> bool {
        matches!(self, IncomeSource::MinWage)
    }

    pub fn metric_name(&self) -> &'static str {
        self.indicator().metric_name()
    }
}

/// A purchase measured in hours of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Expense {
    AverageHome,
    PublicTuition,
    PrivateTuition,
}

impl Expense {
    pub const ALL: [Expense; 3] = [
        Expense::AverageHome,
        Expense::PublicTuition,
        Expense::PrivateTuition,
    ];

    pub fn indicator(&self) -> Indicator {
        match self {
            Expense::AverageHome => Indicator::AverageHomePrice,
            Expense::PublicTuition => Indicator::PublicTuition,
            Expense::PrivateTuition => Indicator::PrivateTuition,
        }
    }

    pub fn metric_name(&self) -> &'static str {
        match self {
            Expense::AverageHome => "AverageHome",
            Expense::PublicTuition => "PublicTuition",
            Expense::PrivateTuition => "PrivateTuition",
        }
    }
}

/// Identifies one of the nine hours-of-work metrics.
///
/// # Examples
///
/// ```
/// use work_value::core::indicator::{DerivedKey, Expense, IncomeSource};
///
/// let key = DerivedKey::new(IncomeSource::MinWage, Expense::AverageHome);
/// assert_eq!(key.metric_name(), "MinWageHoursForAverageHome");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DerivedKey {
    pub income: IncomeSource,
    pub expense: Expense,
}

impl DerivedKey {
    pub fn new(income: IncomeSource, expense: Expense) -> Self {
        Self { income, expense }
    }

    /// All nine pairs, grouped by income source.
    pub fn all() -> impl Iterator<Item = DerivedKey> {
        IncomeSource::ALL.into_iter().flat_map(|income| {
            Expense::ALL
                .into_iter()
                .map(move |expense| DerivedKey::new(income, expense))
        })
    }

    pub fn metric_name(&self) -> String {
        format!(
            "{}HoursFor{}",
            self.income.metric_name(),
            self.expense.metric_name()
        )
    }

    pub fn label(&self) -> String {
        format!(
            "Hours at {} for {}",
            self.income.indicator().label().to_lowercase(),
            self.expense.indicator().label().to_lowercase()
        )
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.metric_name())
    }
}
