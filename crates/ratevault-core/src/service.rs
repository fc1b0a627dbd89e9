use std::sync::Arc;

use crate::error::ServiceError;
use crate::registry::Registry;
use crate::store::DataStore;
use crate::strategy::FetchResult;

/// Request-time entry point over the sealed store.
///
/// Cache-backed: membership is decided by the registry, data comes from the
/// store populated once at startup. Upstream call volume is therefore
/// bounded by the load phase; requests never reach the network.
pub struct ResourceService {
    registry: Arc<Registry>,
    store: DataStore,
}

impl ResourceService {
    pub fn new(registry: Arc<Registry>, store: DataStore) -> Self {
        Self { registry, store }
    }

    /// Resolves `name` to its cached result.
    ///
    /// Unregistered names fail with [`ServiceError::UnknownResource`] before
    /// and after startup. A registered name whose strategy failed during the
    /// load fails with [`ServiceError::ResourceUnavailable`].
    pub async fn fetch(&self, name: &str) -> Result<FetchResult, ServiceError> {
        if !self.registry.contains(name) {
            return Err(ServiceError::UnknownResource(name.to_owned()));
        }

        self.store
            .get(name)
            .await
            .ok_or_else(|| ServiceError::ResourceUnavailable(name.to_owned()))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
