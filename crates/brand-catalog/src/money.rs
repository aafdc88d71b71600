//! Money type for catalog prices.
//!
//! Prices live in the module as currency-prefixed strings (`'$88'`) and the
//! brand summary carries a bare decimal (`averagePrice: 88.53`). Both are
//! parsed into and rendered from a cents-based integer representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Supported currencies.
///
/// The brand module only carries dollar prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Split a currency-prefixed literal into its currency and amount text.
    fn strip_symbol(text: &str) -> Option<(Currency, &str)> {
        text.strip_prefix(Currency::USD.symbol())
            .map(|rest| (Currency::USD, rest))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a whole amount (e.g., dollars).
    pub fn whole(amount: i64, currency: Currency) -> Self {
        Self::new(amount * 100, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a currency-prefixed price literal such as `$88` or `$49.99`.
    pub fn parse_price(text: &str) -> Result<Self, CatalogError> {
        let trimmed = text.trim();
        let (currency, amount) = Currency::strip_symbol(trimmed)
            .ok_or_else(|| CatalogError::InvalidPrice(text.to_string()))?;
        Self::parse_amount(amount, currency)
    }

    /// Parse a bare decimal amount such as `144.67`.
    pub fn parse_amount(text: &str, currency: Currency) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidPrice(text.to_string());

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };
        if whole.is_empty()
            || frac.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;
        Ok(Self::new(cents, currency))
    }

    /// Check if this is a whole amount (no cents).
    pub fn is_whole(&self) -> bool {
        self.amount_cents % 100 == 0
    }

    /// Format as a price literal: `$88` for whole amounts, `$49.99` otherwise.
    pub fn display(&self) -> String {
        if self.is_whole() {
            format!("{}{}", self.currency.symbol(), self.amount_cents / 100)
        } else {
            format!("{}{}", self.currency.symbol(), self.display_amount())
        }
    }

    /// Format the amount with two decimals and no symbol (e.g., "88.53").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None if any value is in a different currency.
    pub fn sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Arithmetic mean, rounded half up to the cent.
    pub fn mean<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        let items: Vec<&Money> = iter.collect();
        if items.is_empty() {
            return None;
        }
        let total = Self::sum(items.iter().copied(), currency)?;
        let n = items.len() as i64;
        let cents = (total.amount_cents * 2 + n) / (2 * n);
        Some(Money::new(cents, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_price() {
        let m = Money::parse_price("$88").unwrap();
        assert_eq!(m.amount_cents, 8800);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_parse_fractional_price() {
        assert_eq!(Money::parse_price("$49.99").unwrap().amount_cents, 4999);
        assert_eq!(Money::parse_price("$49.9").unwrap().amount_cents, 4990);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse_price("88").is_err());
        assert!(Money::parse_price("$").is_err());
        assert!(Money::parse_price("$8.888").is_err());
        assert!(Money::parse_price("$1,000").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::whole(128, Currency::USD).display(), "$128");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(8853, Currency::USD).display_amount(), "88.53");
        assert_eq!(Money::new(14467, Currency::USD).display_amount(), "144.67");
    }

    #[test]
    fn test_mean_rounds_to_cent() {
        let prices = [
            Money::whole(128, Currency::USD),
            Money::whole(158, Currency::USD),
            Money::whole(148, Currency::USD),
        ];
        let mean = Money::mean(prices.iter(), Currency::USD).unwrap();
        assert_eq!(mean.display_amount(), "144.67");
    }

    #[test]
    fn test_sum() {
        let prices = [Money::whole(88, Currency::USD), Money::new(4550, Currency::USD)];
        assert_eq!(Money::sum(prices.iter(), Currency::USD).unwrap().display(), "$133.50");
    }

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(Money::mean(Vec::<Money>::new().iter(), Currency::USD), None);
    }
}
