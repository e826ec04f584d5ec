use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Marker shown wherever a value could not be resolved or computed.
pub const NO_DATA: &str = "No Data";

/// How a number is rendered for display.
///
/// # Examples
///
/// ```
/// use work_value::core::format::NumberFormat;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(NumberFormat::Cents.render(dec!(7.25)), "$7.25");
/// assert_eq!(NumberFormat::Dollars.render(dec!(389400.6)), "$389,401");
/// assert_eq!(NumberFormat::Count.render(dec!(20000)), "20,000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Money with two decimals, e.g. an hourly wage.
    Cents,
    /// Money rounded to whole dollars.
    Dollars,
    /// Plain whole number, e.g. an hour count.
    Count,
}

impl NumberFormat {
    pub fn decimals(&self) -> u32 {
        match self {
            NumberFormat::Cents => 2,
            NumberFormat::Dollars | NumberFormat::Count => 0,
        }
    }

    pub fn is_monetary(&self) -> bool {
        !matches!(self, NumberFormat::Count)
    }

    /// Round to the precision this format displays.
    pub fn round(&self, value: Decimal) -> Decimal {
        round_to(value, self.decimals())
    }

    /// Render with thousands separators and, for money, a leading `$`.
    pub fn render(&self, value: Decimal) -> String {
        let number = format_number(value, self.decimals());
        if self.is_monetary() {
            format!("${number}")
        } else {
            number
        }
    }
}

/// A display string together with the number it shows.
///
/// `raw` is the value rounded to its display precision, so comparing two
/// rendered values gives the same answer as reading the numbers back out
/// of their text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub raw: Option<Decimal>,
    pub text: String,
}

impl Rendered {
    pub fn new(value: Option<Decimal>, format: NumberFormat) -> Self {
        match value {
            Some(v) => Self {
                raw: Some(format.round(v)),
                text: format.render(v),
            },
            None => Self::no_data(),
        }
    }

    pub fn no_data() -> Self {
        Self {
            raw: None,
            text: NO_DATA.to_string(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.raw.is_none()
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly `decimals` fractional digits and `,` thousands separators.
///
/// A value that rounds to zero keeps its minus sign, matching en-US locale output.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = fixed_digits(value.abs(), decimals);
    let (integer, fraction) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Unsigned fixed-point text with exactly `decimals` fractional digits.
pub(crate) fn fixed_digits(value: Decimal, decimals: u32) -> String {
    let mut rounded = round_to(value, decimals);
    rounded.rescale(decimals);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_number(dec!(0), 0), "0");
        assert_eq!(format_number(dec!(999), 0), "999");
        assert_eq!(format_number(dec!(1000), 0), "1,000");
        assert_eq!(format_number(dec!(1234567.891), 2), "1,234,567.89");
        assert_eq!(format_number(dec!(100000), 0), "100,000");
    }

    #[test]
    fn test_pads_fraction() {
        assert_eq!(format_number(dec!(7), 2), "7.00");
        assert_eq!(format_number(dec!(7.5), 2), "7.50");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_number(dec!(2.5), 0), "3");
        assert_eq!(format_number(dec!(-2.5), 0), "-3");
        assert_eq!(format_number(dec!(1.005), 2), "1.01");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_number(dec!(-3000), 0), "-3,000");
        assert_eq!(format_number(dec!(-0.001), 2), "-0.00");
    }

    #[test]
    fn test_render_formats() {
        assert_eq!(NumberFormat::Cents.render(dec!(15)), "$15.00");
        assert_eq!(NumberFormat::Dollars.render(dec!(31133.4)), "$31,133");
        assert_eq!(NumberFormat::Count.render(dec!(20000)), "20,000");
    }

    #[test]
    fn test_rendered_carries_display_value() {
        let rendered = Rendered::new(Some(dec!(31133.5)), NumberFormat::Dollars);
        assert_eq!(rendered.text, "$31,134");
        assert_eq!(rendered.raw, Some(dec!(31134)));

        let missing = Rendered::new(None, NumberFormat::Cents);
        assert_eq!(missing.text, NO_DATA);
        assert!(missing.is_no_data());
    }

    #[test]
    fn test_round_matches_display() {
        assert_eq!(NumberFormat::Dollars.round(dec!(31133.5)), dec!(31134));
        assert_eq!(NumberFormat::Cents.round(dec!(7.254)), dec!(7.25));
    }
}
