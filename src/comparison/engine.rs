use crate::core::format::{fixed_digits, format_number, NumberFormat, Rendered, NO_DATA};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of change from year A to year B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Neutral,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Increase => write!(f, "increase"),
            Direction::Decrease => write!(f, "decrease"),
            Direction::Neutral => write!(f, "neutral"),
        }
    }
}

/// Change between two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    /// `B - A`.
    pub absolute: Decimal,
    /// `(B - A) / A × 100`, unrounded.
    pub percent: Decimal,
}

impl Delta {
    /// Compute the change from `a` to `b`.
    ///
    /// `None` if either side is missing or `a` is zero (percentage undefined).
    pub fn between(a: Option<Decimal>, b: Option<Decimal>) -> Option<Delta> {
        let (a, b) = (a?, b?);
        if a.is_zero() {
            return None;
        }
        let absolute = b.checked_sub(a)?;
        let percent = absolute.checked_div(a)?.checked_mul(Decimal::ONE_HUNDRED)?;
        Some(Delta { absolute, percent })
    }

    /// Zero counts as non-negative.
    pub fn is_non_negative(&self) -> bool {
        self.absolute >= Decimal::ZERO
    }

    pub fn direction(&self) -> Direction {
        if self.absolute.is_zero() {
            Direction::Neutral
        } else if self.absolute > Decimal::ZERO {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }

    /// `{+?}{$?}{amount} ({+?}{percent}%)` with the amount in `format`'s
    /// precision and the percentage to one decimal.
    ///
    /// Non-negative changes get an explicit `+`. Negative numbers carry their
    /// own minus, which lands after the currency symbol: `$-1,000 (-10.0%)`.
    pub fn render(&self, format: NumberFormat) -> String {
        let (plus, minus) = if self.is_non_negative() {
            ("+", "")
        } else {
            ("", "-")
        };
        let currency = if format.is_monetary() { "$" } else { "" };
        let amount = format_number(self.absolute.abs(), format.decimals());
        let percent = fixed_digits(self.percent.abs(), 1);
        format!("{plus}{currency}{minus}{amount} ({plus}{minus}{percent}%)")
    }
}

/// Outcome of comparing one metric across the two selected years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// `None` means "no data".
    pub delta: Option<Delta>,
    pub text: String,
    /// Set only for derived (hours) metrics that have data.
    pub classification: Option<Direction>,
}

impl ComparisonResult {
    pub fn no_data() -> Self {
        Self {
            delta: None,
            text: NO_DATA.to_string(),
            classification: None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.delta.is_none()
    }
}

/// Diffs the rendered values of the two selected years.
///
/// Works on [`Rendered`] values whose `raw` number already matches the
/// displayed precision, so no text has to be parsed back.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Compare a raw indicator. Minimum wage uses `cents` precision for the
    /// amount; everything else uses whole dollars.
    ///
    /// # Examples
    ///
    /// ```
    /// use work_value::comparison::engine::ComparisonEngine;
    /// use work_value::core::format::{NumberFormat, Rendered};
    /// use rust_decimal_macros::dec;
    ///
    /// let a = Rendered::new(Some(dec!(7.25)), NumberFormat::Cents);
    /// let b = Rendered::new(Some(dec!(15.00)), NumberFormat::Cents);
    /// let result = ComparisonEngine::compare_direct(&a, &b, true);
    /// assert_eq!(result.text, "+$7.75 (+106.9%)");
    /// ```
    pub fn compare_direct(a: &Rendered, b: &Rendered, cents: bool) -> ComparisonResult {
        let format = if cents {
            NumberFormat::Cents
        } else {
            NumberFormat::Dollars
        };
        Self::compare(a, b, format)
    }

    /// Compare an hours-of-work metric and classify the direction of change.
    pub fn compare_derived(a: &Rendered, b: &Rendered) -> ComparisonResult {
        let mut result = Self::compare(a, b, NumberFormat::Count);
        result.classification = result.delta.map(|d| d.direction());
        result
    }

    fn compare(a: &Rendered, b: &Rendered, format: NumberFormat) -> ComparisonResult {
        match Delta::between(a.raw, b.raw) {
            Some(delta) => ComparisonResult {
                delta: Some(delta),
                text: delta.render(format),
                classification: None,
            },
            None => ComparisonResult::no_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cents(v: Decimal) -> Rendered {
        Rendered::new(Some(v), NumberFormat::Cents)
    }

    fn dollars(v: Decimal) -> Rendered {
        Rendered::new(Some(v), NumberFormat::Dollars)
    }

    fn hours(v: Decimal) -> Rendered {
        Rendered::new(Some(v), NumberFormat::Count)
    }

    #[test]
    fn test_min_wage_increase() {
        let result = ComparisonEngine::compare_direct(&cents(dec!(7.25)), &cents(dec!(15.00)), true);
        assert_eq!(result.text, "+$7.75 (+106.9%)");
        assert_eq!(result.classification, None);
    }

    #[test]
    fn test_direct_whole_dollars() {
        let result =
            ComparisonEngine::compare_direct(&dollars(dec!(47200)), &dollars(dec!(389400)), false);
        assert_eq!(result.text, "+$342,200 (+725.0%)");
    }

    #[test]
    fn test_direct_decrease_minus_after_currency() {
        let result =
            ComparisonEngine::compare_direct(&dollars(dec!(10000)), &dollars(dec!(9000)), false);
        assert_eq!(result.text, "$-1,000 (-10.0%)");
        assert_eq!(result.classification, None);
    }

    #[test]
    fn test_direct_cents_decrease() {
        // 2.10 / 7.25 = 28.97%
        let result = ComparisonEngine::compare_direct(&cents(dec!(7.25)), &cents(dec!(5.15)), true);
        assert_eq!(result.text, "$-2.10 (-29.0%)");
    }

    #[test]
    fn test_derived_decrease() {
        let result = ComparisonEngine::compare_derived(&hours(dec!(15000)), &hours(dec!(12000)));
        assert_eq!(result.text, "-3,000 (-20.0%)");
        assert_eq!(result.classification, Some(Direction::Decrease));
    }

    #[test]
    fn test_derived_increase() {
        let result = ComparisonEngine::compare_derived(&hours(dec!(1200)), &hours(dec!(1500)));
        assert_eq!(result.text, "+300 (+25.0%)");
        assert_eq!(result.classification, Some(Direction::Increase));
    }

    #[test]
    fn test_zero_diff_is_neutral_and_positive() {
        let result = ComparisonEngine::compare_derived(&hours(dec!(500)), &hours(dec!(500)));
        assert_eq!(result.text, "+0 (+0.0%)");
        assert_eq!(result.classification, Some(Direction::Neutral));
    }

    #[test]
    fn test_zero_base_is_no_data() {
        let result = ComparisonEngine::compare_derived(&hours(dec!(0)), &hours(dec!(10)));
        assert!(result.is_no_data());
        assert_eq!(result.text, NO_DATA);
        assert_eq!(result.classification, None);

        let direct = ComparisonEngine::compare_direct(&cents(dec!(0)), &cents(dec!(7.25)), true);
        assert!(direct.is_no_data());
    }

    #[test]
    fn test_no_data_either_side() {
        let missing = Rendered::no_data();
        assert!(ComparisonEngine::compare_direct(&missing, &cents(dec!(7.25)), true).is_no_data());
        assert!(ComparisonEngine::compare_direct(&cents(dec!(7.25)), &missing, true).is_no_data());
        let derived = ComparisonEngine::compare_derived(&missing, &hours(dec!(10)));
        assert_eq!(derived.text, NO_DATA);
        assert_eq!(derived.classification, None);
    }

    #[test]
    fn test_compares_displayed_precision() {
        // $31,133.40 and $31,133.60 display as $31,133 and $31,134.
        let result = ComparisonEngine::compare_direct(
            &dollars(dec!(31133.40)),
            &dollars(dec!(31133.60)),
            false,
        );
        assert_eq!(result.delta.unwrap().absolute, dec!(1));
    }

    #[test]
    fn test_percent_rounding() {
        // 1 / 3 = 33.333...%
        let result = ComparisonEngine::compare_derived(&hours(dec!(3)), &hours(dec!(4)));
        assert_eq!(result.text, "+1 (+33.3%)");
        // 1 / 8 = 12.5%, -1 / 16 = -6.25% -> -6.3%
        let result = ComparisonEngine::compare_derived(&hours(dec!(16)), &hours(dec!(15)));
        assert_eq!(result.text, "-1 (-6.3%)");
    }
}
