use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::error::FetchError;
use crate::registry::Registry;
use crate::store::DataStore;

/// Outcome of the one-time startup load, for operator visibility.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<(String, FetchError)>,
}

impl LoadReport {
    pub fn all_loaded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drains the registry into the store exactly once, then seals it.
///
/// Strategies are stateless and write to distinct keys, so they run
/// concurrently. A failing strategy is logged and skipped, leaving its key
/// absent; the store is sealed after every invocation has returned,
/// regardless of how many failed. Must complete before the service accepts
/// requests.
pub async fn load(registry: &Registry, store: &DataStore) -> LoadReport {
    let mut tasks = JoinSet::new();
    for (name, fetcher) in registry.iter() {
        let name = name.to_owned();
        let fetcher = Arc::clone(fetcher);
        tasks.spawn(async move {
            let outcome = fetcher.fetch().await;
            (name, outcome)
        });
    }

    let mut report = LoadReport::default();
    while let Some(joined) = tasks.join_next().await {
        let Ok((name, outcome)) = joined else {
            // A panicked strategy task is skipped like any other failure.
            warn!("resource fetch task panicked; leaving its key absent");
            continue;
        };

        match outcome {
            Ok(result) => {
                store.try_put(name.clone(), result).await;
                info!(resource = %name, "resource loaded");
                report.loaded.push(name);
            }
            Err(error) => {
                warn!(resource = %name, %error, "resource fetch failed; skipping");
                report.failed.push((name, error));
            }
        }
    }

    store.seal().await;
    report
}
