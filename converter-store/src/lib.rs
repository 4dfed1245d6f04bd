//! # Converter Store
//!
//! Concrete preference-store implementations (adapters) for the conversion
//! service. This crate provides persistence adapters that implement the
//! `PreferenceStore` port.

use async_trait::async_trait;
use converter_types::{PreferenceStore, StoreError};

pub mod memory;
pub mod sqlite;

#[cfg(test)]
mod sqlite_tests;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Unified store wrapper selected by URL scheme.
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

/// Build and initialize a preference store from a URL.
///
/// - `memory:` - ephemeral in-process store
/// - `sqlite:...` - SQLite file (created and migrated on first use)
///
/// # Examples
///
/// ```ignore
/// let store = build_store("sqlite://converter-prefs.db?mode=rwc").await?;
/// let throwaway = build_store("memory:").await?;
/// ```
pub async fn build_store(url: &str) -> anyhow::Result<Store> {
    if url == "memory:" || url.starts_with("memory://") {
        Ok(Store::Memory(MemoryStore::new()))
    } else if url.starts_with("sqlite:") {
        Ok(Store::Sqlite(SqliteStore::new(url).await?))
    } else {
        anyhow::bail!("unsupported preference store url: {url}")
    }
}

#[async_trait]
impl PreferenceStore for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Store::Memory(store) => store.get(key).await,
            Store::Sqlite(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Store::Memory(store) => store.set(key, value).await,
            Store::Sqlite(store) => store.set(key, value).await,
        }
    }
}
