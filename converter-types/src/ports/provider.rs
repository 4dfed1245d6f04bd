//! Rate provider port.
//!
//! This trait defines the interface for remote rate-table sources.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::{CurrencyCode, RateTable};
use crate::error::ProviderError;

/// Port trait for rate-table providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the full rate table relative to `base`.
    ///
    /// Either a complete table is returned or the call fails; callers must
    /// never observe a partial table.
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError>;
}
