mod envelope;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ratevault_core::{
    load, DataStore, Registry, ReqwestHttpClient, ResourceService, ServiceConfig,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env();
    let client = Arc::new(ReqwestHttpClient::new(
        config.base_url.clone(),
        config.timeout_ms,
    ));
    let registry = Arc::new(Registry::frankfurter(client, &config));
    let store = DataStore::new();

    // One-time load; the store is sealed before the listener opens, so no
    // partially-loaded state is ever observable by a request.
    let report = load(&registry, &store).await;
    tracing::info!(
        loaded = report.loaded.len(),
        failed = report.failed.len(),
        "startup load finished; store sealed"
    );
    for (name, error) in &report.failed {
        tracing::warn!(resource = %name, %error, "resource unavailable for this process lifetime");
    }

    let service = Arc::new(ResourceService::new(registry, store));
    let app = routes::api_router(service);

    let bind = std::env::var("RATEVAULT_BIND").unwrap_or_else(|_| String::from("0.0.0.0"));
    let port: u16 = std::env::var("RATEVAULT_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .expect("invalid bind address");

    tracing::info!("ratevault listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received, stopping");
}
