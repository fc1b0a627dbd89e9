use std::env;

use crate::spread::ZeroQuotePolicy;

pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Process configuration consumed by the core, read from `RATEVAULT_*`
/// environment variables with defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upstream rate API endpoint.
    pub base_url: String,
    /// Identity string seeding the spread calculator. Not secret, not
    /// validated beyond being a string.
    pub identity: String,
    /// Upstream call timeout. A timed-out call is an ordinary fetch failure.
    pub timeout_ms: u64,
    /// What the derived-rate strategy does with a missing or zero quote.
    pub zero_quote: ZeroQuotePolicy,
}

impl ServiceConfig {
    /// | Variable | Default |
    /// |----------|---------|
    /// | `RATEVAULT_API_BASE_URL` | `https://api.frankfurter.app` |
    /// | `RATEVAULT_IDENTITY` | `testuser` |
    /// | `RATEVAULT_TIMEOUT_MS` | `3000` |
    /// | `RATEVAULT_ZERO_QUOTE` | `fail` (or `propagate`) |
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("RATEVAULT_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            identity: env::var("RATEVAULT_IDENTITY")
                .unwrap_or_else(|_| String::from("testuser")),
            timeout_ms: env::var("RATEVAULT_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            zero_quote: env::var("RATEVAULT_ZERO_QUOTE")
                .ok()
                .and_then(|value| ZeroQuotePolicy::parse(&value))
                .unwrap_or_default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            identity: String::from("testuser"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            zero_quote: ZeroQuotePolicy::default(),
        }
    }
}
