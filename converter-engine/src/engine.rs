//! Conversion orchestration over the rate cache and provider port.

use converter_types::{CurrencyCode, EngineError, RateProvider, RateTable};

use crate::cache::RateCache;
use crate::format::format_amount;

/// The outcome of a single conversion. Derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub rate: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl Conversion {
    /// The converted value, formatted with its currency code.
    pub fn converted_amount(&self) -> String {
        format!("{} {}", format_amount(self.value), self.to)
    }

    /// The "1 X = Y Z" rate line.
    pub fn rate_line(&self) -> String {
        format!("1 {} = {} {}", self.from, format_amount(self.rate), self.to)
    }
}

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// Owns the rate cache, so the interleaving of fetches and conversions is
/// explicit and testable rather than hidden in shared globals.
pub struct ConversionEngine<P: RateProvider> {
    provider: P,
    cache: RateCache,
}

impl<P: RateProvider> ConversionEngine<P> {
    /// Creates a new engine with an empty cache.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: RateCache::new(),
        }
    }

    /// Returns the current cache state.
    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Startup fetch: loads the table for the fixed default base (USD)
    /// unconditionally and returns the sorted list of supported currencies.
    ///
    /// A failure here is fatal for the session; there is no retry.
    pub async fn initialize(&mut self) -> Result<Vec<CurrencyCode>, EngineError> {
        let table = self.provider.fetch_rates(&CurrencyCode::usd()).await?;
        tracing::debug!(currencies = table.len(), "loaded initial rate table");
        let codes = table.codes();
        self.cache.put(table);
        Ok(codes)
    }

    /// Converts `amount` units of `from` into `to`.
    ///
    /// Invalid amounts are rejected before any network activity. A cache
    /// miss triggers a fetch for the new base; if that fetch fails and a
    /// previous table exists, the conversion proceeds on the stale table.
    /// With no table at all the conversion fails as `RatesUnavailable`.
    pub async fn convert(
        &mut self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Conversion, EngineError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(EngineError::InvalidAmount);
        }

        self.ensure_base(from).await?;

        let table = self
            .cache
            .latest()
            .ok_or_else(|| EngineError::RatesUnavailable(from.clone()))?;
        let rate = table
            .rate(to)
            .ok_or_else(|| EngineError::RatesUnavailable(to.clone()))?;

        Ok(Conversion {
            value: amount * rate,
            rate,
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// String-amount front door for UI input. Parse failures are
    /// `InvalidAmount` and never touch the network.
    pub async fn convert_input(
        &mut self,
        raw: &str,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Conversion, EngineError> {
        let amount: f64 = raw
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidAmount)?;
        self.convert(amount, from, to).await
    }

    /// Returns the table for `base`, fetching it if not cached.
    ///
    /// Unlike [`convert`](Self::convert), this has no stale-table fallback:
    /// callers asking for a specific base get that base or an error.
    pub async fn refresh(&mut self, base: &CurrencyCode) -> Result<&RateTable, EngineError> {
        if self.cache.get(base).is_none() {
            let table = self.provider.fetch_rates(base).await?;
            self.cache.put(table);
        }
        self.cache
            .get(base)
            .ok_or_else(|| EngineError::RatesUnavailable(base.clone()))
    }

    /// Ensures the cache is based on `base`, fetching on a miss.
    ///
    /// On fetch failure the previous cache is left untouched: with a prior
    /// table present the caller proceeds on stale rates, otherwise the
    /// failure surfaces as `RatesUnavailable`.
    async fn ensure_base(&mut self, base: &CurrencyCode) -> Result<(), EngineError> {
        if self.cache.get(base).is_some() {
            return Ok(());
        }

        match self.provider.fetch_rates(base).await {
            Ok(table) => {
                tracing::debug!(%base, currencies = table.len(), "refreshed rate table");
                self.cache.put(table);
                Ok(())
            }
            Err(err) if !self.cache.is_empty() => {
                tracing::warn!(%base, error = %err, "rate refresh failed, using previous table");
                Ok(())
            }
            Err(err) => {
                tracing::error!(%base, error = %err, "rate fetch failed with no cached table");
                Err(EngineError::RatesUnavailable(base.clone()))
            }
        }
    }
}
