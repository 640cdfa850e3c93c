use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct CurrencyValue {
    pub amount: i64,
    pub currency: Currency,
}

impl CurrencyValue {
    pub fn new(amount: i64, currency: Currency) -> Self {
        CurrencyValue { amount, currency }
    }

    pub fn eur(amount: i64) -> Self {
        CurrencyValue::new(amount, Currency::Eur)
    }

    pub fn zero() -> Self {
        CurrencyValue::eur(0)
    }

    /// Rounds a raw monetary figure to the nearest thousand, never below zero.
    pub fn from_raw(amount: f64) -> Self {
        let rounded = (amount.max(0.0) / 1000.0).round() * 1000.0;

        CurrencyValue::eur(rounded as i64)
    }

    pub fn scale(&self, factor: f64) -> Self {
        CurrencyValue::from_raw(self.amount as f64 * factor)
    }

    pub fn saturating_sub(&self, other: CurrencyValue) -> Self {
        CurrencyValue::new((self.amount - other.amount).max(0), self.currency)
    }
}

impl Add for CurrencyValue {
    type Output = CurrencyValue;

    fn add(self, rhs: CurrencyValue) -> CurrencyValue {
        CurrencyValue::new(self.amount + rhs.amount, self.currency)
    }
}

impl Sub for CurrencyValue {
    type Output = CurrencyValue;

    fn sub(self, rhs: CurrencyValue) -> CurrencyValue {
        CurrencyValue::new(self.amount - rhs.amount, self.currency)
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", crate::utils::FormattingUtils::format_money(self.amount))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum Currency {
    #[default]
    Eur,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rounds_to_thousands() {
        assert_eq!(CurrencyValue::from_raw(1_234_567.0).amount, 1_235_000);
        assert_eq!(CurrencyValue::from_raw(-50.0).amount, 0);
    }

    #[test]
    fn test_saturating_sub() {
        let value = CurrencyValue::eur(1_000);
        assert_eq!(value.saturating_sub(CurrencyValue::eur(5_000)).amount, 0);
        assert_eq!(value.saturating_sub(CurrencyValue::eur(400)).amount, 600);
    }
}
