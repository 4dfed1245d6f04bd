//! Pure domain types.

mod currency;
mod preferences;
mod rates;

pub use currency::{CurrencyCode, FLAG_IMAGE_BASE};
pub use preferences::{AMOUNT_KEY, FROM_CURRENCY_KEY, TO_CURRENCY_KEY, UserPreferences};
pub use rates::RateTable;
