//! Digit and unit glyph tables for uppercase (大写) amounts
//!
//! Both tables are fixed at compile time. Digit lookups go through a ten
//! element array in one direction and a `match` in the other; unit ranks are
//! the enum discriminants, so every lookup here is O(1).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Uppercase digit glyphs indexed by their value
pub const DIGIT_GLYPHS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// Unit assigned to each integer digit, counted from the rightmost position
pub const INTEGER_UNITS: [Unit; 13] = [
    // 元 to 万
    Unit::Yuan,
    Unit::Shi,
    Unit::Bai,
    Unit::Qian,
    Unit::Wan,
    // 拾万 to 仟万
    Unit::Shi,
    Unit::Bai,
    Unit::Qian,
    // 亿 to 万亿
    Unit::Yi,
    Unit::Shi,
    Unit::Bai,
    Unit::Qian,
    Unit::Wan,
];

/// Unit assigned to each of the three fractional digits, left to right
pub const FRACTION_UNITS: [Unit; 3] = [Unit::Jiao, Unit::Fen, Unit::Li];

/// Glyph for a digit value, `None` when `value > 9`
pub fn digit_glyph(value: u32) -> Option<char> {
    DIGIT_GLYPHS.get(value as usize).copied()
}

/// Value of an uppercase digit glyph
pub fn digit_value(glyph: char) -> Option<u32> {
    let value = match glyph {
        '零' => 0,
        '壹' => 1,
        '贰' => 2,
        '叁' => 3,
        '肆' => 4,
        '伍' => 5,
        '陆' => 6,
        '柒' => 7,
        '捌' => 8,
        '玖' => 9,
        _ => return None,
    };
    Some(value)
}

/// A unit glyph of the yuan/jiao/fen/li ladder
///
/// Variants are declared from the smallest rank to the largest and the
/// discriminant is the rank, so the derived ordering compares magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// 整/正, terminal marker for an exact amount. Multiplies by zero.
    Zheng = 0,
    /// 厘, one thousandth
    Li = 1,
    /// 分, one hundredth
    Fen = 2,
    /// 角, one tenth
    Jiao = 3,
    /// 元/圆
    Yuan = 4,
    /// 拾
    Shi = 5,
    /// 佰
    Bai = 6,
    /// 仟
    Qian = 7,
    /// 万, ten thousand group
    Wan = 8,
    /// 亿, hundred million group
    Yi = 9,
}

impl Unit {
    /// Every unit, lowest rank first
    pub const ALL: [Unit; 10] = [
        Unit::Zheng,
        Unit::Li,
        Unit::Fen,
        Unit::Jiao,
        Unit::Yuan,
        Unit::Shi,
        Unit::Bai,
        Unit::Qian,
        Unit::Wan,
        Unit::Yi,
    ];

    /// Look up a unit glyph. The synonyms 元/圆 and 整/正 fold to the same unit.
    pub fn from_glyph(glyph: char) -> Option<Unit> {
        let unit = match glyph {
            '整' | '正' => Unit::Zheng,
            '厘' => Unit::Li,
            '分' => Unit::Fen,
            '角' => Unit::Jiao,
            '元' | '圆' => Unit::Yuan,
            '拾' => Unit::Shi,
            '佰' => Unit::Bai,
            '仟' => Unit::Qian,
            '万' => Unit::Wan,
            '亿' => Unit::Yi,
            _ => return None,
        };
        Some(unit)
    }

    /// Canonical glyph written by the formatter
    pub fn glyph(self) -> char {
        match self {
            Unit::Zheng => '整',
            Unit::Li => '厘',
            Unit::Fen => '分',
            Unit::Jiao => '角',
            Unit::Yuan => '元',
            Unit::Shi => '拾',
            Unit::Bai => '佰',
            Unit::Qian => '仟',
            Unit::Wan => '万',
            Unit::Yi => '亿',
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Multiplier applied to the digit in front of this unit
    pub fn value(self) -> Decimal {
        match self {
            Unit::Zheng => Decimal::ZERO,
            Unit::Li => Decimal::new(1, 3),
            Unit::Fen => Decimal::new(1, 2),
            Unit::Jiao => Decimal::new(1, 1),
            Unit::Yuan => Decimal::ONE,
            Unit::Shi => Decimal::TEN,
            Unit::Bai => Decimal::ONE_HUNDRED,
            Unit::Qian => Decimal::ONE_THOUSAND,
            Unit::Wan => Decimal::new(10_000, 0),
            Unit::Yi => Decimal::new(100_000_000, 0),
        }
    }
}

/// True for every glyph that may appear inside an uppercase amount
pub fn is_amount_glyph(glyph: char) -> bool {
    digit_value(glyph).is_some() || Unit::from_glyph(glyph).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table_is_bijective() {
        for value in 0..10 {
            let glyph = digit_glyph(value).unwrap();
            assert_eq!(digit_value(glyph), Some(value));
        }
        assert_eq!(digit_glyph(10), None);
        assert_eq!(digit_value('一'), None);
    }

    #[test]
    fn test_ranks_increase_with_value() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_synonyms_fold() {
        assert_eq!(Unit::from_glyph('元'), Some(Unit::Yuan));
        assert_eq!(Unit::from_glyph('圆'), Some(Unit::Yuan));
        assert_eq!(Unit::from_glyph('正'), Some(Unit::Zheng));
        assert_eq!(Unit::from_glyph('整'), Some(Unit::Zheng));
        assert_eq!(Unit::from_glyph('十'), None);
    }

    #[test]
    fn test_glyph_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_glyph(unit.glyph()), Some(unit));
        }
    }

    #[test]
    fn test_amount_glyphs() {
        for glyph in "壹贰叁肆伍陆柒捌玖拾佰仟万亿元圆角分厘零整正".chars() {
            assert!(is_amount_glyph(glyph), "{glyph} should be an amount glyph");
        }
        assert!(!is_amount_glyph('负'));
        assert!(!is_amount_glyph('1'));
    }
}
