//! # Converter Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateTable, UserPreferences)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain, provider, store and engine error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AMOUNT_KEY, CurrencyCode, FLAG_IMAGE_BASE, FROM_CURRENCY_KEY, RateTable, TO_CURRENCY_KEY,
    UserPreferences,
};
pub use error::{DomainError, EngineError, ProviderError, StoreError};
pub use ports::{PreferenceStore, RateProvider};
