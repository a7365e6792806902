use paysign_core::{Error, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

const DEFAULT_CURRENCY: &str = "DEFAULT";

/// Number of decimal places each currency is shifted by to get its minor unit.
///
/// Currencies without an entry use the `DEFAULT` shift, which is 2 unless
/// overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    shifts: HashMap<String, u32>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            shifts: HashMap::from([(DEFAULT_CURRENCY.to_string(), 2), ("EUR".to_string(), 2)]),
        }
    }
}

impl CurrencyTable {
    /// Set the shift for a currency code. Codes are case insensitive.
    pub fn with_currency(mut self, code: &str, shift: u32) -> Self {
        self.shifts.insert(code.to_uppercase(), shift);
        self
    }

    /// Shift used for `currency`.
    pub fn shift(&self, currency: Option<&str>) -> u32 {
        currency
            .and_then(|c| self.shifts.get(&c.to_uppercase()))
            .or_else(|| self.shifts.get(DEFAULT_CURRENCY))
            .copied()
            .unwrap_or(2)
    }

    /// Convert an amount into minor units, truncating toward zero.
    pub fn to_minor_units(&self, currency: Option<&str>, amount: Decimal) -> Result<i64> {
        let shift = self.shift(currency);
        let overflow = || Error::request_invalid(format!("amount {amount} is out of range"));

        let factor = 10_i64.checked_pow(shift).ok_or_else(overflow)?;
        amount
            .checked_mul(Decimal::from(factor))
            .ok_or_else(overflow)?
            .trunc()
            .to_i64()
            .ok_or_else(overflow)
    }
}
