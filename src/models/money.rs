//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues when summing. Arithmetic is checked and formatting is fixed at two
//! decimals.

use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5", ".5". More than two
    /// decimal places is an error, so no typed digit is ever dropped.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let parts = AmountParts::split(s)?;
        if parts.fraction.len() > 2 {
            return Err(MoneyParseError::TooManyDecimals(parts.text.to_string()));
        }
        parts.to_money(false)
    }

    /// Parse a money amount, rounding to the nearest cent
    ///
    /// Halves round away from zero, so "1.005" is 1.01 and "1.999" is 2.00.
    pub fn parse_rounded(s: &str) -> Result<Self, MoneyParseError> {
        let parts = AmountParts::split(s)?;
        let round_up = parts.fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5');
        parts.to_money(round_up)
    }

    /// Format with a currency symbol, e.g. `₹1100.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

/// A decimal amount split into sign, whole digits and fraction digits
struct AmountParts<'a> {
    text: &'a str,
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> AmountParts<'a> {
    fn split(s: &'a str) -> Result<Self, MoneyParseError> {
        let text = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(text.to_string());

        let (negative, digits) = match text.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|c| c.is_ascii_digit())
            || !fraction.bytes().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        Ok(Self {
            text,
            negative,
            whole,
            fraction,
        })
    }

    /// Convert to cents using the first two fraction digits, plus one cent
    /// when `round_up` is set
    fn to_money(&self, round_up: bool) -> Result<Money, MoneyParseError> {
        let too_large = || MoneyParseError::TooLarge(self.text.to_string());

        let units: i64 = if self.whole.is_empty() {
            0
        } else {
            self.whole.parse().map_err(|_| too_large())?
        };

        let cents = self
            .fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0'));

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .and_then(|c| c.checked_add(i64::from(round_up)))
            .ok_or_else(too_large)?;

        Ok(Money(if self.negative { -total } else { total }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooManyDecimals(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            MoneyParseError::TooManyDecimals(s) => {
                write!(f, "Amount has more than two decimal places: '{}'", s)
            }
            MoneyParseError::TooLarge(s) => write!(f, "Amount is too large: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
