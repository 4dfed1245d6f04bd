//! Currency codes with display metadata (symbol, flag reference).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Base URL of the externally hosted flag images, keyed by lower-case
/// 2-letter country code.
pub const FLAG_IMAGE_BASE: &str = "https://flagcdn.com/w40";

/// An ISO-4217-like currency code.
///
/// Parses case-insensitively and is stored upper-case, so equality and
/// hashing are case-insensitive from the caller's point of view. The set of
/// valid codes is open: any 3-letter ASCII code is accepted, because the
/// supported set is whatever the rate provider returns at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code, normalizing to upper case.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Default source currency.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Default target currency.
    pub fn inr() -> Self {
        Self("INR".to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display symbol for this currency.
    ///
    /// Falls back to the code itself when no symbol is known.
    pub fn symbol(&self) -> &str {
        match self.0.as_str() {
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "INR" => "₹",
            "JPY" => "¥",
            "CNY" => "¥",
            "AUD" => "A$",
            "CAD" => "C$",
            "CHF" => "CHF",
            "HKD" => "HK$",
            _ => self.as_str(),
        }
    }

    /// Resolves the lower-case 2-letter country code used for flag lookup.
    ///
    /// EUR maps to the dedicated euro-zone identifier. Codes absent from the
    /// static table fall back to a best-effort guess: the first two letters
    /// of the currency code, lowered.
    pub fn country_code(&self) -> String {
        let known = match self.0.as_str() {
            // Euro zone has its own flag identifier, not a country.
            "EUR" => Some("eu"),
            "USD" => Some("us"),
            "GBP" => Some("gb"),
            "INR" => Some("in"),
            "AUD" => Some("au"),
            "CAD" => Some("ca"),
            "SGD" => Some("sg"),
            "CHF" => Some("ch"),
            "MYR" => Some("my"),
            "JPY" => Some("jp"),
            "CNY" => Some("cn"),
            "NZD" => Some("nz"),
            "ZAR" => Some("za"),
            "BRL" => Some("br"),
            "RUB" => Some("ru"),
            "KRW" => Some("kr"),
            "MXN" => Some("mx"),
            "IDR" => Some("id"),
            "TRY" => Some("tr"),
            "SAR" => Some("sa"),
            "AED" => Some("ae"),
            "HKD" => Some("hk"),
            "THB" => Some("th"),
            "NOK" => Some("no"),
            "SEK" => Some("se"),
            "DKK" => Some("dk"),
            "PLN" => Some("pl"),
            "HUF" => Some("hu"),
            "CZK" => Some("cz"),
            "ILS" => Some("il"),
            "PHP" => Some("ph"),
            "TWD" => Some("tw"),
            "CLP" => Some("cl"),
            "COP" => Some("co"),
            "ARS" => Some("ar"),
            "EGP" => Some("eg"),
            "VND" => Some("vn"),
            "KWD" => Some("kw"),
            "QAR" => Some("qa"),
            "OMR" => Some("om"),
            "BHD" => Some("bh"),
            _ => None,
        };
        match known {
            Some(cc) => cc.to_string(),
            None => self.0[..2].to_ascii_lowercase(),
        }
    }

    /// Renders the flag image reference for this currency.
    pub fn flag_url(&self, image_base: &str) -> String {
        format!(
            "{}/{}.png",
            image_base.trim_end_matches('/'),
            self.country_code()
        )
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(CurrencyCode::new("usd").unwrap().as_str(), "USD");
        assert_eq!(" eur ".parse::<CurrencyCode>().unwrap().as_str(), "EUR");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(CurrencyCode::new("").is_err());
        assert!(CurrencyCode::new("US").is_err());
        assert!(CurrencyCode::new("DOLLAR").is_err());
        assert!(CurrencyCode::new("U$D").is_err());
    }

    #[test]
    fn eur_resolves_to_euro_zone_flag() {
        let eur = CurrencyCode::new("EUR").unwrap();
        assert_eq!(eur.country_code(), "eu");
        assert_eq!(eur.flag_url(FLAG_IMAGE_BASE), "https://flagcdn.com/w40/eu.png");
    }

    #[test]
    fn unknown_code_falls_back_to_prefix_guess() {
        let xcd = CurrencyCode::new("XCD").unwrap();
        assert_eq!(xcd.country_code(), "xc");
    }

    #[test]
    fn symbol_falls_back_to_code() {
        assert_eq!(CurrencyCode::new("USD").unwrap().symbol(), "$");
        assert_eq!(CurrencyCode::new("XCD").unwrap().symbol(), "XCD");
    }

    #[test]
    fn serde_round_trip_normalizes() {
        let code: CurrencyCode = serde_json::from_str("\"inr\"").unwrap();
        assert_eq!(code, CurrencyCode::inr());
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"INR\"");
    }
}
