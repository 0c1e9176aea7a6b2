//! Formatting amounts as uppercase numerals
//!
//! This module writes an amount out in the financial uppercase form
//! (`壹佰壹拾万元整`), rounded to li (thousandth) precision, with redundant
//! zeros elided.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::amount::{Amount, AmountError, AmountResult};
use crate::glyphs::{digit_glyph, Unit, FRACTION_UNITS, INTEGER_UNITS};
use crate::normalize::normalize;

/// Fractional digits written out: jiao, fen, li
pub const FRACTION_DIGITS: u32 = 3;

/// Largest number of integer digits the unit ladder can label
pub const MAX_INTEGER_DIGITS: usize = INTEGER_UNITS.len();

/// How values beyond li precision are rounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Ties go to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Ties go away from zero
    HalfUp,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl FromStr for Rounding {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" | "half_even" | "bankers" => Ok(Rounding::HalfEven),
            "half-up" | "half_up" => Ok(Rounding::HalfUp),
            other => Err(AmountError::ParseError(format!("unknown rounding mode {other:?}"))),
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::HalfEven => write!(f, "half-even"),
            Rounding::HalfUp => write!(f, "half-up"),
        }
    }
}

/// Format configuration for uppercase output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub rounding: Rounding,

    /// Glyph appended when the amount has no jiao/fen/li (整 or 正)
    pub terminal: char,

    /// Prefix written in front of negative amounts
    pub negative_prefix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { rounding: Rounding::HalfEven, terminal: '整', negative_prefix: "负".to_string() }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the terminal glyph. Only the 整/正 synonyms are accepted.
    pub fn with_terminal(mut self, terminal: char) -> AmountResult<Self> {
        if Unit::from_glyph(terminal) != Some(Unit::Zheng) {
            return Err(AmountError::ParseError(format!(
                "terminal glyph must be 整 or 正, got {terminal:?}"
            )));
        }
        self.terminal = terminal;
        Ok(self)
    }

    pub fn with_negative_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.negative_prefix = prefix.into();
        self
    }
}

/// Format an amount with the default configuration
pub fn format_amount(amount: &Amount) -> AmountResult<String> {
    format_with(amount, &FormatConfig::default())
}

/// Format an amount as uppercase numerals
///
/// Fails with [`AmountError::OutOfRange`] when the integer part needs more
/// positions than the unit ladder provides (10^13 and above).
pub fn format_with(amount: &Amount, config: &FormatConfig) -> AmountResult<String> {
    let magnitude = amount
        .to_decimal()
        .abs()
        .round_dp_with_strategy(FRACTION_DIGITS, config.rounding.strategy());

    if magnitude.is_zero() {
        return Ok(format!("零{}{}", Unit::Yuan.glyph(), config.terminal));
    }

    let fixed = format!("{:.3}", magnitude);
    let (integer_digits, fraction_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    if integer_digits.len() > MAX_INTEGER_DIGITS {
        return Err(AmountError::OutOfRange(format!(
            "{} has {} integer digits, at most {} are supported",
            amount,
            integer_digits.len(),
            MAX_INTEGER_DIGITS
        )));
    }

    let mut expanded = String::new();
    expand_integer(integer_digits, &mut expanded);
    expand_fraction(fraction_digits, &mut expanded);

    let mut text = normalize(&expanded);
    if text.ends_with(Unit::Yuan.glyph()) {
        text.push(config.terminal);
    }

    if amount.sign() < 0 {
        text.insert_str(0, &config.negative_prefix);
    }

    Ok(text)
}

/// Write each integer digit followed by the unit of its position.
/// An integer part of zero writes nothing, so `0.5` comes out as `伍角`.
fn expand_integer(digits: &str, out: &mut String) {
    if digits.bytes().all(|b| b == b'0') {
        return;
    }

    let len = digits.len();
    for (i, digit) in digits.chars().enumerate() {
        push_digit(digit, out);
        out.push(INTEGER_UNITS[len - i - 1].glyph());
    }
}

fn expand_fraction(digits: &str, out: &mut String) {
    for (digit, unit) in digits.chars().zip(FRACTION_UNITS) {
        push_digit(digit, out);
        out.push(unit.glyph());
    }
}

fn push_digit(digit: char, out: &mut String) {
    if let Some(glyph) = digit.to_digit(10).and_then(digit_glyph) {
        out.push(glyph);
    }
}

/// Extension for writing any decimal straight to uppercase
pub trait ToUppercaseAmount {
    fn to_uppercase_amount(&self) -> AmountResult<String>;
}

impl ToUppercaseAmount for Amount {
    fn to_uppercase_amount(&self) -> AmountResult<String> {
        format_amount(self)
    }
}

impl ToUppercaseAmount for Decimal {
    fn to_uppercase_amount(&self) -> AmountResult<String> {
        format_amount(&Amount::new(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(s: &str) -> String {
        format_amount(&Amount::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(fmt("0"), "零元整");
        assert_eq!(fmt("0.00"), "零元整");
        assert_eq!(fmt("-0.0001"), "零元整");
    }

    #[test]
    fn test_whole_amounts() {
        assert_eq!(fmt("10000"), "壹万元整");
        assert_eq!(fmt("86410"), "捌万陆仟肆佰壹拾元整");
        assert_eq!(fmt("1105000.00"), "壹佰壹拾万伍仟元整");
        assert_eq!(fmt("10000.0"), "壹万元整");
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(fmt("10000.2"), "壹万元贰角");
        assert_eq!(fmt("0.5"), "伍角");
        assert_eq!(fmt("0.05"), "伍分");
        assert_eq!(fmt("12.345"), "壹拾贰元叁角肆分伍厘");
    }

    #[test]
    fn test_rounding_to_li() {
        assert_eq!(fmt("10001.1034"), "壹万零壹元壹角叁厘");
        assert_eq!(fmt("10000.2345"), "壹万元贰角叁分肆厘");
        let config = FormatConfig::new().with_rounding(Rounding::HalfUp);
        let amount = Amount::parse("10000.2345").unwrap();
        assert_eq!(format_with(&amount, &config).unwrap(), "壹万元贰角叁分伍厘");
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(fmt("100000000001.1"), "壹仟亿零壹元壹角");
        assert_eq!(fmt("100000005"), "壹亿零伍元整");
        assert_eq!(fmt("1110005410.284"), "壹拾壹亿壹仟万伍仟肆佰壹拾元贰角捌分肆厘");
    }

    #[test]
    fn test_negative() {
        assert_eq!(fmt("-10000"), "负壹万元整");
        let config = FormatConfig::new().with_negative_prefix("(负)");
        let amount = Amount::from_i64(-3);
        assert_eq!(format_with(&amount, &config).unwrap(), "(负)叁元整");
    }

    #[test]
    fn test_terminal_glyph() {
        let config = FormatConfig::new().with_terminal('正').unwrap();
        assert_eq!(format_with(&Amount::from_i64(5), &config).unwrap(), "伍元正");
        assert!(FormatConfig::new().with_terminal('完').is_err());
    }

    #[test]
    fn test_out_of_range() {
        let amount = Amount::parse("9999999999999.999").unwrap();
        assert!(format_amount(&amount).is_ok());

        let amount = Amount::parse("10000000000000").unwrap();
        assert!(matches!(format_amount(&amount), Err(AmountError::OutOfRange(_))));
    }

    #[test]
    fn test_rounding_parse() {
        assert_eq!("half-up".parse::<Rounding>().unwrap(), Rounding::HalfUp);
        assert_eq!("Bankers".parse::<Rounding>().unwrap(), Rounding::HalfEven);
        assert!("ceiling".parse::<Rounding>().is_err());
        assert_eq!(Rounding::HalfUp.to_string(), "half-up");
    }

    #[test]
    fn test_rounding_serde_names() {
        assert_eq!(serde_json::to_string(&Rounding::HalfEven).unwrap(), "\"half-even\"");
        let rounding: Rounding = serde_json::from_str("\"half-up\"").unwrap();
        assert_eq!(rounding, Rounding::HalfUp);
    }

    #[test]
    fn test_extension_trait() {
        assert_eq!(Decimal::new(15, 1).to_uppercase_amount().unwrap(), "壹元伍角");
    }
}
