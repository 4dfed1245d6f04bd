//! Error types for the conversion service.

use crate::domain::CurrencyCode;

/// Domain-level errors (invariant violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Non-positive rate for {code}: {rate}")]
    NonPositiveRate { code: CurrencyCode, rate: f64 },

    #[error("Rate of base {base} to itself must be 1.0, got {rate}")]
    BaseRateNotUnit { base: CurrencyCode, rate: f64 },
}

/// Rate-provider errors (remote fetch failures).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate API returned result {0:?}")]
    Api(String),

    #[error("Malformed rate table: {0}")]
    Malformed(String),
}

/// Preference-store errors (persistence failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Preference store error: {0}")]
    Backend(String),
}

/// Engine-level errors surfaced to the presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The amount was not a valid non-negative number. Raised before any
    /// network activity.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// No rate table covers the requested currency: the first fetch for the
    /// session failed, or the currency is absent from the cached table.
    #[error("No exchange rate available for {0}")]
    RatesUnavailable(CurrencyCode),

    /// Fetch failure with no fallback: the startup fetch, or an explicit
    /// refresh for a specific base.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
