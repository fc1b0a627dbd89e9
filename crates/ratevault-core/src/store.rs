//! Write-once resource store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::strategy::FetchResult;

enum Phase {
    Loading(HashMap<String, FetchResult>),
    Sealed(Arc<HashMap<String, FetchResult>>),
}

/// Resource store with write-once-per-process-lifetime semantics.
///
/// Starts in a loading phase that accepts writes, then transitions
/// irreversibly to a sealed snapshot. The sealed arm holds an immutable map,
/// so no insert path exists after the transition. Writes racing a seal
/// resolve through the lock to exactly one of "landed, then sealed" or
/// "sealed first, rejected"; readers never see a torn value.
#[derive(Clone)]
pub struct DataStore {
    inner: Arc<RwLock<Phase>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Phase::Loading(HashMap::new()))),
        }
    }

    /// Stores `result` under `name` while the store is still loading.
    ///
    /// Returns whether the write landed. A rejected post-seal write is
    /// silent: late writers must not crash the loader or the service.
    pub async fn try_put(&self, name: impl Into<String>, result: FetchResult) -> bool {
        let mut phase = self.inner.write().await;
        match &mut *phase {
            Phase::Loading(map) => {
                map.insert(name.into(), result);
                true
            }
            Phase::Sealed(_) => false,
        }
    }

    /// The stored value, or `None` if that name was never written — whether
    /// because it does not exist, its strategy failed before writing, or the
    /// load has not happened yet.
    pub async fn get(&self, name: &str) -> Option<FetchResult> {
        let phase = self.inner.read().await;
        match &*phase {
            Phase::Loading(map) => map.get(name).cloned(),
            Phase::Sealed(map) => map.get(name).cloned(),
        }
    }

    /// Transitions to the sealed snapshot. Idempotent and irreversible for
    /// the process lifetime.
    pub async fn seal(&self) {
        let mut phase = self.inner.write().await;
        if let Phase::Loading(map) = &mut *phase {
            let snapshot = std::mem::take(map);
            *phase = Phase::Sealed(Arc::new(snapshot));
        }
    }

    pub async fn is_sealed(&self) -> bool {
        matches!(&*self.inner.read().await, Phase::Sealed(_))
    }

    pub async fn len(&self) -> usize {
        match &*self.inner.read().await {
            Phase::Loading(map) => map.len(),
            Phase::Sealed(map) => map.len(),
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
