//! Preference store port.
//!
//! A generic string key-value persistence interface. No schema versioning;
//! values are plain strings and absent keys are simply `None`.

use crate::error::StoreError;

/// Port trait for preference persistence.
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
