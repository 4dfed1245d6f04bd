//! Rate tables fetched from the remote provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::CurrencyCode;
use crate::error::DomainError;

/// A full conversion-rate table relative to a single base currency.
///
/// Each rate is the value of 1 unit of the base expressed in that currency,
/// so the base's own rate is always 1.0. The fetch timestamp is carried for
/// staleness diagnostics; tables have no expiry within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
    fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Builds a table, enforcing the rate invariants.
    ///
    /// All rates must be positive and finite. A missing base entry is filled
    /// in as 1.0; a present base entry must already be 1.0.
    pub fn new(
        base: CurrencyCode,
        mut rates: HashMap<CurrencyCode, f64>,
    ) -> Result<Self, DomainError> {
        for (code, rate) in &rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(DomainError::NonPositiveRate {
                    code: code.clone(),
                    rate: *rate,
                });
            }
        }
        match rates.get(&base) {
            None => {
                rates.insert(base.clone(), 1.0);
            }
            Some(&rate) if (rate - 1.0).abs() > 1e-9 => {
                return Err(DomainError::BaseRateNotUnit {
                    base: base.clone(),
                    rate,
                });
            }
            Some(_) => {}
        }
        Ok(Self {
            base,
            rates,
            fetched_at: Utc::now(),
        })
    }

    /// Returns the base currency of this table.
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Returns when this table was fetched.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Looks up the rate for a currency, if present.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Returns true if the table carries a rate for `code`.
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Returns the sorted list of currency codes in this table.
    ///
    /// This is the list the selectors are populated from.
    pub fn codes(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self.rates.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Number of currencies in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table carries no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn usd_rates() -> HashMap<CurrencyCode, f64> {
        HashMap::from([(code("INR"), 83.0), (code("EUR"), 0.92)])
    }

    #[test]
    fn base_rate_is_filled_in() {
        let table = RateTable::new(code("USD"), usd_rates()).unwrap();
        assert_eq!(table.rate(&code("USD")), Some(1.0));
        assert_eq!(table.rate(&code("INR")), Some(83.0));
    }

    #[test]
    fn rejects_non_positive_rates() {
        let mut rates = usd_rates();
        rates.insert(code("GBP"), 0.0);
        assert!(RateTable::new(code("USD"), rates).is_err());

        let mut rates = usd_rates();
        rates.insert(code("GBP"), -1.2);
        assert!(RateTable::new(code("USD"), rates).is_err());
    }

    #[test]
    fn rejects_base_rate_other_than_one() {
        let mut rates = usd_rates();
        rates.insert(code("USD"), 2.0);
        assert!(matches!(
            RateTable::new(code("USD"), rates),
            Err(DomainError::BaseRateNotUnit { .. })
        ));
    }

    #[test]
    fn codes_are_sorted() {
        let table = RateTable::new(code("USD"), usd_rates()).unwrap();
        assert_eq!(table.codes(), vec![code("EUR"), code("INR"), code("USD")]);
    }

    #[test]
    fn missing_currency_yields_none() {
        let table = RateTable::new(code("USD"), usd_rates()).unwrap();
        assert_eq!(table.rate(&code("JPY")), None);
    }
}
