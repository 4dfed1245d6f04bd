//! Typed user intents and the pure state transition.
//!
//! The presentation layer maps raw input events to [`Intent`]s; [`apply`]
//! reduces an intent against the session state and returns the side effects
//! to run. Persisting and display refresh are independent and
//! order-insensitive; conversion is always the last effect.

use converter_types::CurrencyCode;

/// A user intention, decoupled from any UI framework.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// The amount field changed; carries the raw text as typed.
    AmountChanged(String),
    FromCurrencyChanged(CurrencyCode),
    ToCurrencyChanged(CurrencyCode),
    /// The two selections exchange places atomically.
    Swapped,
}

/// Side effects produced by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SaveFrom(CurrencyCode),
    SaveTo(CurrencyCode),
    SaveAmount(String),
    /// Recompute flags and the currency symbol.
    RefreshDisplay,
    /// Run a conversion; amount typing is debounced, selector changes and
    /// swap fire immediately.
    Convert { debounced: bool },
}

/// The session's visible selections.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount_input: String,
}

impl SessionState {
    pub fn new(from: CurrencyCode, to: CurrencyCode, amount_input: impl Into<String>) -> Self {
        Self {
            from,
            to,
            amount_input: amount_input.into(),
        }
    }
}

/// Pure transition: applies an intent and returns the new state plus the
/// side effects to run.
pub fn apply(mut state: SessionState, intent: Intent) -> (SessionState, Vec<Effect>) {
    let effects = match intent {
        Intent::AmountChanged(raw) => {
            state.amount_input = raw.clone();
            vec![Effect::SaveAmount(raw), Effect::Convert { debounced: true }]
        }
        Intent::FromCurrencyChanged(code) => {
            state.from = code.clone();
            vec![
                Effect::SaveFrom(code),
                Effect::RefreshDisplay,
                Effect::Convert { debounced: false },
            ]
        }
        Intent::ToCurrencyChanged(code) => {
            state.to = code.clone();
            vec![
                Effect::SaveTo(code),
                Effect::RefreshDisplay,
                Effect::Convert { debounced: false },
            ]
        }
        Intent::Swapped => {
            std::mem::swap(&mut state.from, &mut state.to);
            vec![
                Effect::SaveFrom(state.from.clone()),
                Effect::SaveTo(state.to.clone()),
                Effect::RefreshDisplay,
                Effect::Convert { debounced: false },
            ]
        }
    };
    (state, effects)
}
