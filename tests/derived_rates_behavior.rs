//! End-to-end behavior of the derived latest-rates resource: spread
//! arithmetic, field preservation and degenerate upstream payloads.

use std::sync::Arc;

use serde_json::{json, Value};

use ratevault_core::{
    load, spread_factor, DataStore, FetchError, LatestRatesFetcher, Registry, ResourceFetcher,
    ResourceService, StaticHttpClient, ZeroQuotePolicy, LATEST_IDR_RATES,
};
use ratevault_tests::latest_idr_body;

#[tokio::test]
async fn when_the_reference_idr_response_arrives_the_buy_spread_matches_the_formula() {
    // Given: The reference upstream response and identity "testuser"
    let client = Arc::new(
        StaticHttpClient::new().with_response("/latest?base=IDR", latest_idr_body()),
    );
    let fetcher = LatestRatesFetcher::new(client, "IDR", "testuser", ZeroQuotePolicy::Fail);

    // When: The strategy runs
    let result = fetcher.fetch().await.expect("fetch should succeed");
    let value = result.first().expect("one element");

    // Then: The derived field equals (1 / 0.000063) * (1 + 0.00895) and the
    // original fields pass through unchanged
    let expected = (1.0 / 0.000063) * (1.0 + spread_factor("testuser"));
    let derived = value["USD_BuySpread_IDR"].as_f64().expect("numeric spread");
    assert!(
        (derived - expected).abs() < 1e-6,
        "derived {derived} vs expected {expected}"
    );

    assert_eq!(value["amount"], 1.0);
    assert_eq!(value["base"], "IDR");
    assert_eq!(value["date"], "2024-01-01");
    assert_eq!(value["rates"], json!({ "USD": 0.000063 }));
}

#[tokio::test]
async fn when_rates_are_absent_the_result_carries_null_rates_and_no_spread() {
    // Given: An upstream response with no rates field at all
    let client = Arc::new(StaticHttpClient::new().with_response(
        "/latest?base=IDR",
        json!({ "amount": 1.0, "base": "IDR", "date": "2024-01-01" }),
    ));
    let fetcher = LatestRatesFetcher::new(client, "IDR", "testuser", ZeroQuotePolicy::Fail);

    // When: The strategy runs
    let result = fetcher.fetch().await.expect("absent rates is not an error");
    let value = result.first().expect("one element");

    // Then: Both rates and the derived field are absent/null
    assert_eq!(value["rates"], Value::Null);
    assert!(value.get("USD_BuySpread_IDR").is_none());
}

#[tokio::test]
async fn when_rates_are_null_the_result_is_the_same_as_absent_rates() {
    let client = Arc::new(StaticHttpClient::new().with_response(
        "/latest?base=IDR",
        json!({ "amount": 1.0, "base": "IDR", "date": "2024-01-01", "rates": null }),
    ));
    let fetcher = LatestRatesFetcher::new(client, "IDR", "testuser", ZeroQuotePolicy::Fail);

    let result = fetcher.fetch().await.expect("null rates is not an error");
    let value = result.first().expect("one element");

    assert_eq!(value["rates"], Value::Null);
    assert!(value.get("USD_BuySpread_IDR").is_none());
}

#[tokio::test]
async fn when_the_usd_quote_is_zero_the_fail_policy_rejects_the_resource() {
    // Given: Rates present but a zero USD quote, under the default policy
    let client = Arc::new(StaticHttpClient::new().with_response(
        "/latest?base=IDR",
        json!({ "amount": 1.0, "base": "IDR", "date": "2024-01-01", "rates": { "USD": 0.0 } }),
    ));
    let fetcher = LatestRatesFetcher::new(client, "IDR", "testuser", ZeroQuotePolicy::Fail);

    // Then: The strategy fails with the typed degenerate-quote error rather
    // than emitting a non-finite value
    let error = fetcher.fetch().await.expect_err("zero quote should fail");
    assert_eq!(
        error,
        FetchError::DegenerateQuote {
            currency: "USD".to_owned()
        }
    );
}

#[tokio::test]
async fn when_a_failed_derivation_happens_at_startup_the_resource_ends_up_absent() {
    // Given: A Frankfurter-shaped registry whose latest-rates strategy hits
    // a zero quote under the fail policy
    let client = Arc::new(StaticHttpClient::new().with_response(
        "/latest?base=IDR",
        json!({ "amount": 1.0, "base": "IDR", "date": "2024-01-01", "rates": { "EUR": 6.1e-5 } }),
    ));
    let registry = Arc::new(
        Registry::builder()
            .register(
                LATEST_IDR_RATES,
                Arc::new(LatestRatesFetcher::new(
                    client,
                    "IDR",
                    "testuser",
                    ZeroQuotePolicy::Fail,
                )),
            )
            .build(),
    );
    let store = DataStore::new();

    // When: Startup loads and seals
    let report = load(&registry, &store).await;

    // Then: The loader skipped it and the service reports it unavailable
    assert_eq!(report.failed.len(), 1);
    assert!(store.is_sealed().await);

    let service = ResourceService::new(registry, store);
    assert!(service.fetch(LATEST_IDR_RATES).await.is_err());
}

#[tokio::test]
async fn when_the_propagate_policy_is_configured_a_zero_quote_does_not_error() {
    let client = Arc::new(StaticHttpClient::new().with_response(
        "/latest?base=IDR",
        json!({ "amount": 1.0, "base": "IDR", "date": "2024-01-01", "rates": { "USD": 0.0 } }),
    ));
    let fetcher = LatestRatesFetcher::new(client, "IDR", "testuser", ZeroQuotePolicy::Propagate);

    let result = fetcher.fetch().await.expect("propagate policy must not error");
    let value = result.first().expect("one element");

    // The division yields +inf, which JSON cannot carry; it lands as null.
    assert_eq!(value["USD_BuySpread_IDR"], Value::Null);
    assert_eq!(value["rates"]["USD"], 0.0);
}
