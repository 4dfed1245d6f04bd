//! # Converter Provider
//!
//! HTTP adapter for the remote rate-table API.
//!
//! Wire contract: `GET <api_url>/<api_key>/latest/<BASE>` returning
//! `{ "result": "success", "conversion_rates": { "USD": 1, ... } }`.
//! Any other `result` value, transport failure, or malformed body is a
//! fetch failure; the caller's cache is left untouched.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use converter_types::{CurrencyCode, ProviderError, RateProvider, RateTable};

/// Production endpoint of the rate-table API.
pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

const SUCCESS_RESULT: &str = "success";

/// Response shape of the `latest/<BASE>` endpoint.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
    /// Set by the API when `result` is not "success".
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
}

/// Rate-table API client.
pub struct ExchangeRateClient {
    api_url: String,
    api_key: String,
    http: Client,
}

impl ExchangeRateClient {
    /// Creates a new client against the given endpoint.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    fn endpoint(&self, base: &CurrencyCode) -> String {
        format!("{}/{}/latest/{}", self.api_url, self.api_key, base)
    }
}

fn table_from_response(
    response: RatesResponse,
    base: &CurrencyCode,
) -> Result<RateTable, ProviderError> {
    if response.result != SUCCESS_RESULT {
        let detail = response.error_type.unwrap_or(response.result);
        return Err(ProviderError::Api(detail));
    }

    let mut rates = HashMap::with_capacity(response.conversion_rates.len());
    for (raw_code, rate) in response.conversion_rates {
        match CurrencyCode::new(&raw_code) {
            Ok(code) => {
                rates.insert(code, rate);
            }
            Err(err) => {
                // The API occasionally lists non-ISO entries; drop them
                // rather than failing the whole table.
                tracing::warn!(code = %raw_code, error = %err, "skipping unparseable currency code");
            }
        }
    }

    RateTable::new(base.clone(), rates).map_err(|e| ProviderError::Malformed(e.to_string()))
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
        tracing::debug!(%base, "fetching rate table");
        let response = self
            .http
            .get(self.endpoint(base))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("{status}: {e}")))?;

        table_from_response(body, base)
    }
}
