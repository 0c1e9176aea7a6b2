//! Amount module providing an exact decimal currency value
//!
//! Amounts are backed by `rust_decimal::Decimal`, so every digit read from a
//! text survives untouched until it is formatted again. Binary floating point
//! is never involved.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during amount operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount out of supported range: {0}")]
    OutOfRange(String),
    #[error("Cannot parse amount from string: {0}")]
    ParseError(String),
}

/// Result type for amount operations
pub type AmountResult<T> = Result<T, AmountError>;

/// An exact currency value in yuan
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    quantity: Decimal,
}

impl Amount {
    /// The zero amount, returned whenever nothing could be extracted
    pub const ZERO: Amount = Amount { quantity: Decimal::ZERO };

    /// Create a new amount from a Decimal value
    pub fn new(value: Decimal) -> Self {
        Self { quantity: value }
    }

    /// Create an amount from an integer number of yuan
    pub fn from_i64(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }

    pub fn from_decimal(decimal: Decimal) -> Self {
        Self::new(decimal)
    }

    /// Parse a plain decimal string such as `"-1105000.00"`
    pub fn parse(value_str: &str) -> AmountResult<Self> {
        let trimmed = value_str.trim();
        let decimal = Decimal::from_str(trimmed)
            .map_err(|e| AmountError::ParseError(format!("{trimmed:?}: {e}")))?;
        Ok(Self::new(decimal))
    }

    /// Get the sign of this amount
    /// Returns -1, 0, or 1
    pub fn sign(&self) -> i32 {
        if self.quantity.is_zero() {
            0
        } else if self.quantity.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(&self) -> bool {
        self.quantity.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.quantity.abs())
    }

    /// Number of fractional digits currently carried
    pub fn precision(&self) -> u32 {
        self.quantity.scale()
    }

    pub fn to_decimal(&self) -> Decimal {
        self.quantity
    }

    /// Same value with trailing fractional zeros removed
    pub fn normalized(&self) -> Self {
        Self::new(self.quantity.normalize())
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quantity.cmp(&other.quantity)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.quantity.normalize(), f)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AMOUNT({})", self)?;
        if f.alternate() {
            write!(f, " [prec:{}, raw:{}]", self.precision(), self.quantity)?;
        }
        Ok(())
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.quantity
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Amount {
    type Error = AmountError;

    fn try_from(value: &str) -> AmountResult<Self> {
        Self::parse(value)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount::new(self.quantity + other.quantity)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount::new(-self.quantity)
    }
}
