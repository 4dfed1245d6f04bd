//! SQLite preference store integration tests.

#[cfg(test)]
mod tests {
    use converter_types::{CurrencyCode, PreferenceStore, UserPreferences};

    use crate::SqliteStore;

    async fn setup_store() -> SqliteStore {
        SqliteStore::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn round_trips_a_value() {
        let store = setup_store().await;
        store.set("fromCurrency", "GBP").await.unwrap();
        assert_eq!(
            store.get("fromCurrency").await.unwrap(),
            Some("GBP".to_string())
        );
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = setup_store().await;
        assert_eq!(store.get("toCurrency").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = setup_store().await;
        store.set("amountVal", "10").await.unwrap();
        store.set("amountVal", "42.5").await.unwrap();
        assert_eq!(
            store.get("amountVal").await.unwrap(),
            Some("42.5".to_string())
        );
    }

    #[tokio::test]
    async fn preferences_load_defaults_from_empty_store() {
        let store = setup_store().await;
        let prefs = UserPreferences::load(&store).await.unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[tokio::test]
    async fn preferences_survive_save_and_load() {
        let store = setup_store().await;
        let gbp = CurrencyCode::new("GBP").unwrap();
        let jpy = CurrencyCode::new("JPY").unwrap();

        UserPreferences::save_from(&store, &gbp).await.unwrap();
        UserPreferences::save_to(&store, &jpy).await.unwrap();
        UserPreferences::save_amount(&store, "12.34").await.unwrap();

        let prefs = UserPreferences::load(&store).await.unwrap();
        assert_eq!(prefs.from, gbp);
        assert_eq!(prefs.to, jpy);
        assert_eq!(prefs.last_amount.as_deref(), Some("12.34"));
    }

    #[tokio::test]
    async fn garbage_currency_value_falls_back_to_default() {
        let store = setup_store().await;
        store.set("fromCurrency", "not-a-code").await.unwrap();
        let prefs = UserPreferences::load(&store).await.unwrap();
        assert_eq!(prefs.from, CurrencyCode::usd());
    }
}
