//! Persisted user preferences.

use serde::{Deserialize, Serialize};

use crate::domain::CurrencyCode;
use crate::error::StoreError;
use crate::ports::PreferenceStore;

/// Storage key for the selected source currency.
pub const FROM_CURRENCY_KEY: &str = "fromCurrency";
/// Storage key for the selected target currency.
pub const TO_CURRENCY_KEY: &str = "toCurrency";
/// Storage key for the last-entered amount.
pub const AMOUNT_KEY: &str = "amountVal";

/// The user's remembered selections, read once at startup and written on
/// every change. Absent or unparseable values fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub last_amount: Option<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            from: CurrencyCode::usd(),
            to: CurrencyCode::inr(),
            last_amount: None,
        }
    }
}

impl UserPreferences {
    /// Loads preferences from the store, falling back per field.
    pub async fn load<S: PreferenceStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        let from = store
            .get(FROM_CURRENCY_KEY)
            .await?
            .and_then(|v| CurrencyCode::new(&v).ok())
            .unwrap_or_else(CurrencyCode::usd);
        let to = store
            .get(TO_CURRENCY_KEY)
            .await?
            .and_then(|v| CurrencyCode::new(&v).ok())
            .unwrap_or_else(CurrencyCode::inr);
        let last_amount = store.get(AMOUNT_KEY).await?;
        Ok(Self {
            from,
            to,
            last_amount,
        })
    }

    /// Replaces saved currencies that are no longer offered by the provider
    /// with the defaults.
    pub fn reconcile(mut self, available: &[CurrencyCode]) -> Self {
        if !available.contains(&self.from) {
            self.from = CurrencyCode::usd();
        }
        if !available.contains(&self.to) {
            self.to = CurrencyCode::inr();
        }
        self
    }

    /// Persists the source currency selection.
    pub async fn save_from<S: PreferenceStore + ?Sized>(
        store: &S,
        code: &CurrencyCode,
    ) -> Result<(), StoreError> {
        store.set(FROM_CURRENCY_KEY, code.as_str()).await
    }

    /// Persists the target currency selection.
    pub async fn save_to<S: PreferenceStore + ?Sized>(
        store: &S,
        code: &CurrencyCode,
    ) -> Result<(), StoreError> {
        store.set(TO_CURRENCY_KEY, code.as_str()).await
    }

    /// Persists the last-entered amount, exactly as typed.
    pub async fn save_amount<S: PreferenceStore + ?Sized>(
        store: &S,
        raw: &str,
    ) -> Result<(), StoreError> {
        store.set(AMOUNT_KEY, raw).await
    }
}
