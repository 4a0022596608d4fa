use std::fmt;

use thiserror::Error;

use serde::{Serialize, Serializer};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Non-negative fixed-point amount, stored as ten-thousandths of a shilling
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

const SCALE: i64 = 10_000;

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    /// Parses a captured amount such as `1,234.50` or `299,500.00.`
    ///
    /// Grouping separators and whitespace are removed and a single trailing decimal
    /// point is dropped. An empty (or separator-only) string is zero. Anything other
    /// than digits with at most one decimal point left after cleaning is rejected.
    pub fn parse(raw: &str) -> Result<Self, MoneyError> {
        let mut cleaned: String = raw
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        if cleaned.ends_with('.') {
            cleaned.pop();
        }

        if cleaned.is_empty() {
            return Ok(Money::ZERO);
        }

        if !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
            Err(MoneyError::Parse("Unexpected characters", raw.to_string()))?
        }

        let mut parts = cleaned.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", raw.to_string()))?
        }

        let units = match parts.next() {
            None | Some("") => 0,
            Some(units) => units
                .parse::<i64>()
                .map_err(|_| MoneyError::Parse("Amount too large", raw.to_string()))?,
        };

        // digits past the fourth decimal place are truncated
        let fraction = match parts.next() {
            None | Some("") => 0,
            Some(fraction) => format!("{:0<4}", fraction)[..4]
                .parse::<i64>()
                .map_err(|_| MoneyError::Parse("Invalid fraction", raw.to_string()))?,
        };

        let value = units
            .checked_mul(SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount too large", raw.to_string()))?;

        return Ok(Money(value));
    }

    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        let a = self.0;
        let b = other.0;

        match a.checked_add(b) {
            Some(sum) => self.0 = sum,
            None => {
                *self = Money::MAX;
                Err(MoneyError::Overflow("add", Money(a), *other))?
            }
        }

        return Ok(());
    }

    /// Integer division of the amount, used for averages
    pub fn divide(&self, count: usize) -> Money {
        if count == 0 {
            return Money::ZERO;
        }

        return Money(self.0 / count as i64);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let value = self.0.unsigned_abs();
        let units = value / SCALE as u64;

        let mut fraction = format!("{:04}", value % SCALE as u64);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }

        return write!(f, "{sign}{units}.{fraction}");
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
