//! The two public entry points: text to amount, amount to uppercase

use log::debug;
use rust_decimal::Decimal;

use crate::amount::{Amount, AmountResult};
use crate::extract::extract;
use crate::formatting::format_amount;
use crate::parse::parse_match;

/// Resolve the amount in `text`, in yuan
///
/// Digit amounts are preferred over uppercase numerals. Empty text, or text
/// without any recognizable amount, resolves to zero.
pub fn get_amount(text: &str) -> Decimal {
    resolve(text).to_decimal()
}

/// [`get_amount`] for text that may be absent; `None` resolves to zero
pub fn get_amount_opt(text: Option<&str>) -> Decimal {
    text.map_or(Decimal::ZERO, get_amount)
}

/// Like [`get_amount`], keeping the result as an [`Amount`]
pub fn resolve(text: &str) -> Amount {
    if text.is_empty() {
        return Amount::ZERO;
    }

    match extract(text) {
        Some(found) => {
            let amount = parse_match(&found);
            debug!("resolved {:?} from {:?} to {}", found.as_str(), text, amount);
            amount
        }
        None => Amount::ZERO,
    }
}

/// Write `amount` in uppercase financial numerals, e.g. `壹万元整`
pub fn amount_to_chinese(amount: Decimal) -> AmountResult<String> {
    format_amount(&Amount::new(amount))
}
