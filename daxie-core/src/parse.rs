//! Turning a matched amount substring into an exact value
//!
//! Both parsers fail soft. Anything they cannot make sense of contributes
//! zero and is reported through `log::debug!`; neither ever returns an error.

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;

use crate::amount::Amount;
use crate::extract::{AmountMatch, MatchKind};
use crate::glyphs::{digit_value, Unit};

/// Parse a match with the parser its kind calls for
pub fn parse_match(found: &AmountMatch) -> Amount {
    match found.kind {
        MatchKind::Digits => parse_digits(found.as_str()),
        MatchKind::Chinese => parse_chinese(found.as_str()),
    }
}

/// Parse an Arabic-digit amount such as `1,500.25元` or `3.5万元`
pub fn parse_digits(text: &str) -> Amount {
    let cleaned: String = text.chars().filter(|c| !matches!(c, ',' | '，')).collect();
    let (numeral, in_wan) = strip_unit_suffix(&cleaned);
    let numeral = numeral.strip_suffix('.').unwrap_or(numeral);

    let value = match Decimal::from_str(numeral) {
        Ok(value) => value,
        Err(e) => {
            debug!("unparseable digit amount {:?}: {}", text, e);
            return Amount::ZERO;
        }
    };

    if !in_wan {
        return Amount::new(value);
    }
    match value.checked_mul(Unit::Wan.value()) {
        Some(scaled) => Amount::new(scaled),
        None => {
            debug!("digit amount {:?} overflows when scaled by 万", text);
            Amount::ZERO
        }
    }
}

/// Split off a 万元/万/元 suffix, longest first. The flag is set for 万 suffixes.
fn strip_unit_suffix(text: &str) -> (&str, bool) {
    if let Some(rest) = text.strip_suffix("万元") {
        (rest, true)
    } else if let Some(rest) = text.strip_suffix('万') {
        (rest, true)
    } else if let Some(rest) = text.strip_suffix('元') {
        (rest, false)
    } else {
        (text, false)
    }
}

/// Parse uppercase numerals such as `壹万伍仟肆佰壹拾圆叁角伍分肆厘`
///
/// Every unit multiplies the digit in front of it. A unit that sits inside a
/// 万 or 亿 group (i.e. a larger unit still follows it) is further scaled by
/// the largest unit to its right, which is how `壹仟万` becomes ten million.
/// A unit with no digit before it at the start of the text counts once
/// (`拾伍万` is 150 000). A digit with no unit after it contributes nothing.
pub fn parse_chinese(text: &str) -> Amount {
    let glyphs: Vec<char> = text.chars().collect();
    let scopes = widest_units_from(&glyphs);

    let mut result = Decimal::ZERO;
    let mut digit: u32 = 1;
    let mut pending = false;

    for (i, &glyph) in glyphs.iter().enumerate() {
        if let Some(value) = digit_value(glyph) {
            digit = value;
            pending = true;
            continue;
        }

        let Some(unit) = Unit::from_glyph(glyph) else {
            debug!("ignoring unknown glyph {:?} in {:?}", glyph, text);
            continue;
        };

        let mut contribution = Decimal::from(digit) * unit.value();
        if let Some(scope) = scopes[i] {
            if scope.rank() != unit.rank() {
                contribution *= scope.value();
            }
        }

        result = match result.checked_add(contribution) {
            Some(sum) => sum,
            None => {
                debug!("uppercase amount {:?} overflows, keeping partial sum", text);
                break;
            }
        };
        digit = 0;
        pending = false;
    }

    if pending && digit != 0 {
        debug!("trailing digit without unit in {:?} ignored", text);
    }

    Amount::new(result)
}

/// For each position, the highest-ranked unit at or after it
fn widest_units_from(glyphs: &[char]) -> Vec<Option<Unit>> {
    let mut scopes = vec![None; glyphs.len()];
    let mut widest: Option<Unit> = None;

    for (i, &glyph) in glyphs.iter().enumerate().rev() {
        if let Some(unit) = Unit::from_glyph(glyph) {
            if widest.map_or(true, |w| unit > w) {
                widest = Some(unit);
            }
        }
        scopes[i] = widest;
    }

    scopes
}
