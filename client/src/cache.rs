//! Keyed cache of server resources with request coalescing.
//!
//! Every read goes through [`QueryCache::fetch_as`]; writes never touch the
//! cache directly, they invalidate the keys their resource is known under
//! once the server confirms. Invalidation removes the entry, so the next
//! read is forced to refetch.

use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use crate::error::Error;

/// Addresses a cached value: resource kind plus identifying parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// All projects visible to the current user.
    Projects,
    /// One project including its member list.
    Project(i64),
    /// Task list of a project.
    Tasks(i64),
    /// One task by id.
    Task(i64),
    /// Comment list of a task.
    Comments(i64),
    /// Global user list.
    Users,
}

/// Process-wide query cache.
///
/// Concurrent fetches for the same key share a single in-flight request:
/// `moka`'s `try_get_with` resolves one init future and hands the value (or
/// the error) to every waiter. Failed fetches are never stored.
#[derive(Debug, Clone)]
pub struct QueryCache {
    inner: Cache<QueryKey, Arc<Value>>,
}

impl QueryCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Return the cached value for `key`, running `init` to fetch it if the
    /// entry is absent. At most one fetch per key is in flight at a time.
    pub async fn fetch<F>(&self, key: QueryKey, init: F) -> Result<Arc<Value>, Error>
    where
        F: Future<Output = Result<Value, Error>>,
    {
        self.inner
            .try_get_with(key.clone(), async move {
                tracing::debug!("cache miss, fetching {:?}", key);
                init.await.map(Arc::new)
            })
            .await
            .map_err(|e: Arc<Error>| (*e).clone())
    }

    /// [`fetch`](Self::fetch) plus decoding into the caller's model.
    pub async fn fetch_as<T, F>(&self, key: QueryKey, init: F) -> Result<T, Error>
    where
        T: DeserializeOwned,
        F: Future<Output = Result<Value, Error>>,
    {
        let value = self.fetch(key, init).await?;
        serde_json::from_value(value.as_ref().clone()).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Mark `key` stale: the entry is removed and the next read refetches.
    pub async fn invalidate(&self, key: &QueryKey) {
        tracing::debug!("invalidating {:?}", key);
        self.inner.invalidate(key).await;
    }

    /// Invalidate every key a completed write declared a dependency on.
    pub async fn invalidate_many(&self, keys: Vec<QueryKey>) {
        for key in &keys {
            self.invalidate(key).await;
        }
    }

    pub async fn contains(&self, key: &QueryKey) -> bool {
        self.inner.get(key).await.is_some()
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl Default for QueryCache {
    /// Cache with room for every key the dashboard realistically uses.
    fn default() -> Self {
        Self::new(1_000)
    }
}
