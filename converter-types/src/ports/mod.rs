//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The engine and presentation layers depend on these traits, not on
//! concrete implementations.

mod provider;
mod store;

pub use provider::RateProvider;
pub use store::PreferenceStore;
