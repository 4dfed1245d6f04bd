//! In-memory preference store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use converter_types::{PreferenceStore, StoreError};

/// Ephemeral store for tests and throwaway sessions. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("poisoned lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("poisoned lock".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_a_value() {
        let store = MemoryStore::new();
        store.set("fromCurrency", "EUR").await.unwrap();
        assert_eq!(
            store.get("fromCurrency").await.unwrap(),
            Some("EUR".to_string())
        );
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("toCurrency").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("amountVal", "1").await.unwrap();
        store.set("amountVal", "2.5").await.unwrap();
        assert_eq!(
            store.get("amountVal").await.unwrap(),
            Some("2.5".to_string())
        );
    }
}
