//! Terminal rendering: flags, symbols, conversion output.

use converter_engine::{Conversion, SessionState};
use converter_types::{CurrencyCode, EngineError, FLAG_IMAGE_BASE};

/// Shown when no flag can be derived for a country code.
const PLACEHOLDER_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Maps a 2-letter country code to its regional-indicator emoji, falling
/// back to a placeholder glyph when the code is not derivable.
pub(crate) fn flag_emoji(country_code: &str) -> String {
    let mut flag = String::new();
    for ch in country_code.chars() {
        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() {
            return PLACEHOLDER_FLAG.to_string();
        }
        match char::from_u32(0x1F1E6 + (ch as u32 - 'a' as u32)) {
            Some(indicator) => flag.push(indicator),
            None => return PLACEHOLDER_FLAG.to_string(),
        }
    }
    if flag.is_empty() {
        PLACEHOLDER_FLAG.to_string()
    } else {
        flag
    }
}

/// Redraws the flag/symbol header for the current selections.
pub(crate) fn print_selection(state: &SessionState) {
    let from_flag = flag_emoji(&state.from.country_code());
    let to_flag = flag_emoji(&state.to.country_code());
    println!(
        "{from_flag} {} ({}) -> {to_flag} {}",
        state.from,
        state.from.symbol(),
        state.to
    );
    println!(
        "flags: {} | {}",
        state.from.flag_url(FLAG_IMAGE_BASE),
        state.to.flag_url(FLAG_IMAGE_BASE)
    );
}

/// Prints a conversion outcome the way the widget displays it.
pub(crate) fn print_outcome(result: &Result<Conversion, EngineError>) {
    match result {
        Ok(conversion) => {
            println!("{}", conversion.converted_amount());
            println!("{}", conversion.rate_line());
        }
        Err(EngineError::InvalidAmount) => {
            println!("0.00");
            println!("Please enter a valid amount.");
        }
        Err(err) => {
            println!("Error");
            println!("{err}");
        }
    }
}

pub(crate) fn print_help(available: &[CurrencyCode]) {
    println!("Commands:");
    println!("  <amount>      convert the amount (e.g. 25.50)");
    println!("  from <CODE>   change the source currency");
    println!("  to <CODE>     change the target currency");
    println!("  swap          exchange source and target");
    println!("  help          show this help");
    println!("  quit          exit");
    println!("{} currencies available.", available.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_codes_become_flags() {
        assert_eq!(flag_emoji("us"), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(flag_emoji("in"), "\u{1F1EE}\u{1F1F3}");
    }

    #[test]
    fn euro_zone_code_has_a_flag() {
        let eur = CurrencyCode::new("EUR").unwrap();
        assert_eq!(flag_emoji(&eur.country_code()), "\u{1F1EA}\u{1F1FA}");
    }

    #[test]
    fn underivable_codes_fall_back_to_placeholder() {
        assert_eq!(flag_emoji("x1"), PLACEHOLDER_FLAG);
        assert_eq!(flag_emoji(""), PLACEHOLDER_FLAG);
    }
}
