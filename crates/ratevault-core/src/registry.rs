use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::http_client::HttpClient;
use crate::strategy::{LatestRatesFetcher, PassthroughFetcher, ResourceFetcher};

/// Canonical names for the three reference Frankfurter resources.
pub const LATEST_IDR_RATES: &str = "latest_idr_rates";
pub const HISTORICAL_IDR_USD: &str = "historical_idr_usd";
pub const SUPPORTED_CURRENCIES: &str = "supported_currencies";

/// Immutable resource-name → fetch-strategy map, built once at startup.
///
/// Names are case-sensitive. There is no runtime registration or
/// deregistration; anything not registered here never resolves.
pub struct Registry {
    fetchers: HashMap<String, Arc<dyn ResourceFetcher>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The reference resource set against the Frankfurter API.
    pub fn frankfurter(client: Arc<dyn HttpClient>, config: &ServiceConfig) -> Self {
        Self::builder()
            .register(
                LATEST_IDR_RATES,
                Arc::new(LatestRatesFetcher::new(
                    Arc::clone(&client),
                    "IDR",
                    config.identity.clone(),
                    config.zero_quote,
                )),
            )
            .register(
                HISTORICAL_IDR_USD,
                Arc::new(PassthroughFetcher::new(
                    Arc::clone(&client),
                    "/2024-01-01..2024-01-05?from=IDR&to=USD",
                )),
            )
            .register(
                SUPPORTED_CURRENCIES,
                Arc::new(PassthroughFetcher::new(client, "/currencies")),
            )
            .build()
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ResourceFetcher>> {
        self.fetchers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fetchers.contains_key(name)
    }

    /// Registered names, in no guaranteed order.
    pub fn names(&self) -> Vec<&str> {
        self.fetchers.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn ResourceFetcher>)> {
        self.fetchers.iter().map(|(name, fetcher)| (name.as_str(), fetcher))
    }

    pub fn len(&self) -> usize {
        self.fetchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }
}

/// Builder consumed into an immutable [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    fetchers: HashMap<String, Arc<dyn ResourceFetcher>>,
}

impl RegistryBuilder {
    pub fn register(mut self, name: impl Into<String>, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        self.fetchers.insert(name.into(), fetcher);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            fetchers: self.fetchers,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::http_client::StaticHttpClient;

    use super::*;

    #[test]
    fn frankfurter_registry_holds_the_three_reference_resources() {
        let client = Arc::new(StaticHttpClient::new());
        let registry = Registry::frankfurter(client, &ServiceConfig::default());

        assert_eq!(registry.len(), 3);
        assert!(registry.contains(LATEST_IDR_RATES));
        assert!(registry.contains(HISTORICAL_IDR_USD));
        assert!(registry.contains(SUPPORTED_CURRENCIES));
    }

    #[test]
    fn lookup_is_case_sensitive_and_rejects_unregistered_names() {
        let client = Arc::new(StaticHttpClient::new());
        let registry = Registry::frankfurter(client, &ServiceConfig::default());

        assert!(registry.lookup("Latest_IDR_Rates").is_none());
        assert!(registry.lookup("latest_usd_rates").is_none());
        assert!(registry.lookup(LATEST_IDR_RATES).is_some());
    }

    #[test]
    fn empty_builder_yields_empty_registry() {
        let registry = Registry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }
}
