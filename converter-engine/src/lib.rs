//! # Converter Engine
//!
//! Application layer for the currency conversion service.
//!
//! ## Architecture
//!
//! - `cache` - capacity-1 rate cache keyed by base currency
//! - `engine` - conversion orchestration over the `RateProvider` port
//! - `dispatcher` - typed user intents reduced to (state, side effects)
//! - `debounce` - replaceable scheduled-task handle for amount typing
//!
//! The engine is generic over `P: RateProvider`, allowing different
//! provider implementations to be injected.

pub mod cache;
pub mod debounce;
pub mod dispatcher;
pub mod engine;
pub mod format;


pub use cache::RateCache;
pub use debounce::{DEBOUNCE_INTERVAL, Debouncer};
pub use dispatcher::{Effect, Intent, SessionState, apply};
pub use engine::{Conversion, ConversionEngine};
pub use format::format_amount;
