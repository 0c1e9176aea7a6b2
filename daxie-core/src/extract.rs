//! Locating an amount inside free-form text
//!
//! Digit amounts (`10000元`, `1.5万`) take priority over uppercase numerals
//! (`壹万元整`). Whitespace is removed before matching, so spans refer to the
//! stripped text, not the caller's original string.

use std::fmt;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Whole text is a bare decimal number, or a number glued to a yuan/wan suffix
static DIGIT_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+)?$|(?:[1-9][0-9]*[0-9,，]*\.?[0-9]*|0\.[0-9]+)(?:元|万元|万)")
        .unwrap()
});

/// Uppercase run opening with a non-zero digit or 拾
static CHINESE_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[壹贰叁肆伍陆柒捌玖拾][壹贰叁肆伍陆柒捌玖拾佰仟万亿元圆角分厘零整正]*").unwrap()
});

/// Which pattern produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Arabic digits, optionally with separators and a 元/万/万元 suffix
    Digits,
    /// Uppercase financial numerals
    Chinese,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Digits => write!(f, "digits"),
            MatchKind::Chinese => write!(f, "chinese"),
        }
    }
}

/// The amount substring picked out of a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountMatch {
    pub kind: MatchKind,
    /// Byte offset of the first matched character in the stripped text
    pub start: usize,
    /// Byte offset one past the last matched character in the stripped text
    pub end: usize,
    pub text: String,
}

impl AmountMatch {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Remove every whitespace character, ideographic space included
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Find the amount in `text`, digits first, uppercase numerals second
pub fn extract(text: &str) -> Option<AmountMatch> {
    let stripped = strip_whitespace(text);

    let (kind, found) = if let Some(m) = DIGIT_AMOUNT.find(&stripped) {
        (MatchKind::Digits, m)
    } else if let Some(m) = CHINESE_AMOUNT.find(&stripped) {
        (MatchKind::Chinese, m)
    } else {
        trace!("no amount found in {:?}", stripped);
        return None;
    };

    trace!("{:?} amount {:?} at {}..{}", kind, found.as_str(), found.start(), found.end());
    Some(AmountMatch {
        kind,
        start: found.start(),
        end: found.end(),
        text: found.as_str().to_string(),
    })
}
