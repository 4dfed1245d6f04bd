//! Capacity-1 rate cache.

use converter_types::{CurrencyCode, RateTable};

/// Holds the most recently fetched rate table.
///
/// Only one base is ever cached at a time and entries never expire within a
/// session. A successful fetch replaces the contents wholesale; a failed
/// fetch must leave the cache untouched.
#[derive(Debug, Default)]
pub struct RateCache {
    table: Option<RateTable>,
}

impl RateCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table only if its base matches `base` exactly.
    pub fn get(&self, base: &CurrencyCode) -> Option<&RateTable> {
        self.table.as_ref().filter(|t| t.base() == base)
    }

    /// Returns the most recent table regardless of base.
    ///
    /// Used for the stale-table fallback when a refresh for a new base fails.
    pub fn latest(&self) -> Option<&RateTable> {
        self.table.as_ref()
    }

    /// Unconditionally replaces the cache contents.
    pub fn put(&mut self, table: RateTable) {
        self.table = Some(table);
    }

    /// Returns true if nothing has been fetched yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn table(base: &str) -> RateTable {
        RateTable::new(code(base), HashMap::from([(code("INR"), 83.0)])).unwrap()
    }

    #[test]
    fn empty_cache_misses() {
        let cache = RateCache::new();
        assert!(cache.get(&code("USD")).is_none());
        assert!(cache.latest().is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn hit_requires_exact_base_match() {
        let mut cache = RateCache::new();
        cache.put(table("USD"));
        assert!(cache.get(&code("USD")).is_some());
        assert!(cache.get(&code("EUR")).is_none());
    }

    #[test]
    fn put_replaces_wholesale() {
        let mut cache = RateCache::new();
        cache.put(table("USD"));
        cache.put(table("EUR"));
        assert!(cache.get(&code("USD")).is_none());
        assert_eq!(cache.get(&code("EUR")).unwrap().base(), &code("EUR"));
    }

    #[test]
    fn latest_survives_base_mismatch() {
        let mut cache = RateCache::new();
        cache.put(table("USD"));
        assert_eq!(cache.latest().unwrap().base(), &code("USD"));
    }
}
