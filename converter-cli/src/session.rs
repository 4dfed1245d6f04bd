//! Interactive conversion session - the presentation adapter.
//!
//! Startup mirrors the widget's initialization: fetch the USD table
//! unconditionally, reconcile saved preferences against the offered
//! currency list, pre-fill the amount, and run an initial conversion.
//! Afterwards each input line maps to a typed intent; amount edits convert
//! after a quiet period, selector changes and swap convert immediately.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use converter_engine::{
    ConversionEngine, Debouncer, Effect, Intent, SessionState, apply,
};
use converter_types::{CurrencyCode, PreferenceStore, RateProvider, UserPreferences};

use crate::view;

#[derive(Debug, PartialEq)]
enum Command {
    Intent(Intent),
    Quit,
    Help,
    Empty,
    Unknown(String),
}

pub(crate) async fn run<P, S>(mut engine: ConversionEngine<P>, store: S) -> Result<()>
where
    P: RateProvider + 'static,
    S: PreferenceStore + 'static,
{
    println!("Loading rates...");
    let available = match engine.initialize().await {
        Ok(codes) => codes,
        Err(err) => {
            tracing::error!(error = %err, "startup rate fetch failed");
            println!("Error loading live rates. Please try again later.");
            println!("Error");
            // Terminal error state: the fixed message is the whole output,
            // and re-running the binary is the reload.
            std::process::exit(1);
        }
    };

    let prefs = match UserPreferences::load(&store).await {
        Ok(prefs) => prefs,
        Err(err) => {
            tracing::warn!(error = %err, "could not load preferences, using defaults");
            UserPreferences::default()
        }
    }
    .reconcile(&available);

    let amount = prefs.last_amount.unwrap_or_else(|| "1".to_string());
    let state = SessionState::new(prefs.from, prefs.to, amount);

    view::print_help(&available);
    view::print_selection(&state);

    let engine = Arc::new(Mutex::new(engine));
    let state = Arc::new(Mutex::new(state));
    let store = Arc::new(store);
    let mut debouncer = Debouncer::default();

    run_conversion(&engine, &state).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line, &available) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => view::print_help(&available),
            Command::Unknown(message) => println!("{message}"),
            Command::Intent(intent) => {
                let current = state.lock().await.clone();
                let (next, effects) = apply(current, intent);
                *state.lock().await = next;
                for effect in effects {
                    run_effect(effect, &engine, &state, &store, &mut debouncer).await;
                }
            }
        }
        prompt();
    }

    Ok(())
}

/// Runs one side effect from the dispatcher.
///
/// Persistence failures are logged, never surfaced: losing a preference
/// write must not break the conversion flow.
async fn run_effect<P, S>(
    effect: Effect,
    engine: &Arc<Mutex<ConversionEngine<P>>>,
    state: &Arc<Mutex<SessionState>>,
    store: &Arc<S>,
    debouncer: &mut Debouncer,
) where
    P: RateProvider + 'static,
    S: PreferenceStore + 'static,
{
    match effect {
        Effect::SaveFrom(code) => {
            if let Err(err) = UserPreferences::save_from(store.as_ref(), &code).await {
                tracing::warn!(error = %err, "failed to persist source currency");
            }
        }
        Effect::SaveTo(code) => {
            if let Err(err) = UserPreferences::save_to(store.as_ref(), &code).await {
                tracing::warn!(error = %err, "failed to persist target currency");
            }
        }
        Effect::SaveAmount(raw) => {
            if let Err(err) = UserPreferences::save_amount(store.as_ref(), &raw).await {
                tracing::warn!(error = %err, "failed to persist amount");
            }
        }
        Effect::RefreshDisplay => {
            let snapshot = state.lock().await.clone();
            view::print_selection(&snapshot);
        }
        Effect::Convert { debounced: false } => run_conversion(engine, state).await,
        Effect::Convert { debounced: true } => {
            let engine = Arc::clone(engine);
            let state = Arc::clone(state);
            debouncer.schedule(async move {
                run_conversion(&engine, &state).await;
            });
        }
    }
}

/// Converts with the state as it exists when the conversion runs, so a
/// debounced task picks up edits made during the quiet period.
async fn run_conversion<P: RateProvider>(
    engine: &Arc<Mutex<ConversionEngine<P>>>,
    state: &Arc<Mutex<SessionState>>,
) {
    let (raw, from, to) = {
        let snapshot = state.lock().await;
        (
            snapshot.amount_input.clone(),
            snapshot.from.clone(),
            snapshot.to.clone(),
        )
    };
    let result = engine.lock().await.convert_input(&raw, &from, &to).await;
    view::print_outcome(&result);
}

fn parse_command(line: &str, available: &[CurrencyCode]) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or("").to_ascii_lowercase();
    match head.as_str() {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "swap" => Command::Intent(Intent::Swapped),
        "from" | "to" => {
            let Some(raw) = parts.next() else {
                return Command::Unknown(format!("usage: {head} <CODE>"));
            };
            match CurrencyCode::new(raw) {
                Ok(code) if available.contains(&code) => {
                    if head == "from" {
                        Command::Intent(Intent::FromCurrencyChanged(code))
                    } else {
                        Command::Intent(Intent::ToCurrencyChanged(code))
                    }
                }
                Ok(code) => Command::Unknown(format!(
                    "Currency {code} is not offered by the rate provider"
                )),
                Err(_) => Command::Unknown(format!("Invalid currency code: {raw}")),
            }
        }
        // Everything else is treated as an amount; the engine rejects
        // invalid numbers without touching the network.
        _ => Command::Intent(Intent::AmountChanged(line.to_string())),
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes() -> Vec<CurrencyCode> {
        ["EUR", "INR", "USD"]
            .iter()
            .map(|c| CurrencyCode::new(c).unwrap())
            .collect()
    }

    #[test]
    fn amounts_map_to_amount_changed() {
        assert_eq!(
            parse_command("25.5", &codes()),
            Command::Intent(Intent::AmountChanged("25.5".to_string()))
        );
        // Invalid numbers still flow to the engine as amount input.
        assert_eq!(
            parse_command("abc", &codes()),
            Command::Intent(Intent::AmountChanged("abc".to_string()))
        );
    }

    #[test]
    fn selector_commands_validate_against_offered_list() {
        assert_eq!(
            parse_command("from eur", &codes()),
            Command::Intent(Intent::FromCurrencyChanged(
                CurrencyCode::new("EUR").unwrap()
            ))
        );
        assert!(matches!(
            parse_command("to JPY", &codes()),
            Command::Unknown(_)
        ));
        assert!(matches!(
            parse_command("from 123", &codes()),
            Command::Unknown(_)
        ));
    }

    #[test]
    fn swap_and_quit_parse() {
        assert_eq!(parse_command("swap", &codes()), Command::Intent(Intent::Swapped));
        assert_eq!(parse_command("quit", &codes()), Command::Quit);
        assert_eq!(parse_command("  ", &codes()), Command::Empty);
    }
}
