use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::FetchError;
use crate::http_client::HttpClient;
use crate::spread::{buy_spread, spread_factor, ZeroQuotePolicy};

/// Currency whose quote seeds the derived buy spread.
const TARGET_CURRENCY: &str = "USD";

/// Ordered values produced by one strategy invocation.
///
/// Every reference resource produces exactly one element, but the contract
/// allows more.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FetchResult {
    pub values: Vec<Value>,
}

impl FetchResult {
    pub fn single(value: Value) -> Self {
        Self {
            values: vec![value],
        }
    }

    pub fn first(&self) -> Option<&Value> {
        self.values.first()
    }
}

pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchResult, FetchError>> + Send + 'a>>;

/// Pluggable fetch logic for one named resource.
///
/// Implementations are stateless and safe for concurrent invocation; the
/// loader may run them in parallel. No retries here: failure is signalled to
/// the caller, which decides whether to skip or abort.
pub trait ResourceFetcher: Send + Sync {
    fn fetch<'a>(&'a self) -> FetchFuture<'a>;
}

/// Issues one upstream request against a fixed path and wraps the parsed
/// body, unmodified, as a single-element result.
pub struct PassthroughFetcher {
    client: Arc<dyn HttpClient>,
    path: String,
}

impl PassthroughFetcher {
    pub fn new(client: Arc<dyn HttpClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

impl ResourceFetcher for PassthroughFetcher {
    fn fetch<'a>(&'a self) -> FetchFuture<'a> {
        Box::pin(async move {
            let body = self.client.get_json(&self.path).await?;
            Ok(FetchResult::single(body))
        })
    }
}

/// Fetches latest rates for a base currency and injects a derived
/// `USD_BuySpread_<BASE>` field computed from the configured identity.
pub struct LatestRatesFetcher {
    client: Arc<dyn HttpClient>,
    base: String,
    path: String,
    identity: String,
    zero_quote: ZeroQuotePolicy,
}

impl LatestRatesFetcher {
    pub fn new(
        client: Arc<dyn HttpClient>,
        base: impl Into<String>,
        identity: impl Into<String>,
        zero_quote: ZeroQuotePolicy,
    ) -> Self {
        let base = base.into();
        Self {
            client,
            path: format!("/latest?base={base}"),
            base,
            identity: identity.into(),
            zero_quote,
        }
    }

    fn derive(&self, body: &Value) -> Result<Value, FetchError> {
        let rates = body.get("rates").filter(|value| !value.is_null());

        let Some(rates) = rates else {
            // A response without rates passes through with null rates and no
            // derived field. It is not an error.
            return Ok(json!({
                "amount": body.get("amount").cloned().unwrap_or(Value::Null),
                "base": body.get("base").cloned().unwrap_or(Value::Null),
                "date": body.get("date").cloned().unwrap_or(Value::Null),
                "rates": Value::Null,
            }));
        };

        let quote = rates
            .get(TARGET_CURRENCY)
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        if quote == 0.0 && self.zero_quote == ZeroQuotePolicy::Fail {
            return Err(FetchError::DegenerateQuote {
                currency: TARGET_CURRENCY.to_owned(),
            });
        }

        let derived = buy_spread(quote, spread_factor(&self.identity));

        let mut result = Map::new();
        result.insert(
            "amount".to_owned(),
            body.get("amount").cloned().unwrap_or(Value::Null),
        );
        result.insert(
            "base".to_owned(),
            body.get("base").cloned().unwrap_or(Value::Null),
        );
        result.insert(
            "date".to_owned(),
            body.get("date").cloned().unwrap_or(Value::Null),
        );
        result.insert(
            format!("{TARGET_CURRENCY}_BuySpread_{}", self.base),
            json!(derived),
        );
        result.insert("rates".to_owned(), rates.clone());
        Ok(Value::Object(result))
    }
}

impl ResourceFetcher for LatestRatesFetcher {
    fn fetch<'a>(&'a self) -> FetchFuture<'a> {
        Box::pin(async move {
            let body = self.client.get_json(&self.path).await?;
            let derived = self.derive(&body)?;
            Ok(FetchResult::single(derived))
        })
    }
}
