//! # ratevault-core
//!
//! Resource-fetch dispatch and write-once caching over an upstream
//! rate-quote API.
//!
//! The process builds an immutable [`Registry`] of named fetch strategies at
//! startup, drains it once through the [`loader`] into a [`DataStore`] that
//! is then sealed for the rest of the process lifetime, and serves every
//! request from that snapshot through the [`ResourceService`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Environment-backed process configuration |
//! | [`error`] | Fetch and service error types |
//! | [`http_client`] | Upstream transport abstraction (reqwest + test double) |
//! | [`loader`] | One-time startup load and seal |
//! | [`registry`] | Immutable name → strategy map |
//! | [`service`] | Cache-backed request-time entry point |
//! | [`spread`] | Deterministic spread-factor arithmetic |
//! | [`store`] | Two-phase write-once store |
//! | [`strategy`] | Fetch strategy trait and its two variants |

pub mod config;
pub mod error;
pub mod http_client;
pub mod loader;
pub mod registry;
pub mod service;
pub mod spread;
pub mod store;
pub mod strategy;

pub use config::{ServiceConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::{FetchError, ServiceError};
pub use http_client::{HttpClient, ReqwestHttpClient, StaticHttpClient};
pub use loader::{load, LoadReport};
pub use registry::{
    Registry, RegistryBuilder, HISTORICAL_IDR_USD, LATEST_IDR_RATES, SUPPORTED_CURRENCIES,
};
pub use service::ResourceService;
pub use spread::{buy_spread, spread_factor, ZeroQuotePolicy};
pub use store::DataStore;
pub use strategy::{FetchResult, LatestRatesFetcher, PassthroughFetcher, ResourceFetcher};
