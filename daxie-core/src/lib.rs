//! Extraction, parsing and formatting of Chinese uppercase currency amounts
//!
//! Financial documents write amounts in "uppercase" numerals (大写) such as
//! `壹佰壹拾万元整` so they cannot be altered with a stroke of the pen. This
//! crate finds an amount in free text, digits or uppercase, reads it into an
//! exact [`Amount`], and writes amounts back out in the canonical uppercase
//! form.
//!
//! ```
//! use daxie_core::{amount_to_chinese, get_amount};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(get_amount("我有1万元哈哈"), Decimal::from(10000));
//! assert_eq!(amount_to_chinese(Decimal::from(10000)).unwrap(), "壹万元整");
//! ```

#![warn(clippy::all)]

pub mod amount;
pub mod extract;
pub mod formatting;
pub mod glyphs;
pub mod normalize;
pub mod parse;
pub mod resolver;

// Re-export main types
pub use amount::{Amount, AmountError, AmountResult};
pub use extract::{extract, strip_whitespace, AmountMatch, MatchKind};
pub use formatting::{
    format_amount, format_with, FormatConfig, Rounding, ToUppercaseAmount, FRACTION_DIGITS,
    MAX_INTEGER_DIGITS,
};
pub use glyphs::{digit_glyph, digit_value, is_amount_glyph, Unit, DIGIT_GLYPHS};
pub use normalize::normalize;
pub use parse::{parse_chinese, parse_digits, parse_match};
pub use resolver::{amount_to_chinese, get_amount, get_amount_opt, resolve};

// Re-export for convenience
pub use rust_decimal::Decimal;
