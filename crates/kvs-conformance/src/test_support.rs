//! Reference in-memory store
//!
//! A deterministic, dependency-free implementation of the `kvs-core`
//! contract. It exists so the suite's own tests can exercise every case
//! end-to-end, and it doubles as a worked example for backend authors. It is
//! not a shipped backend: no persistence, no eviction, no concurrency
//! guarantees beyond what the locks provide.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use kvs_core::{
    Bucket, BucketKind, BucketOptions, BucketValue, Store, StoreError, StoreProvider, StoreResult,
};
use parking_lot::RwLock;
use tracing::trace;

struct BucketState {
    kind: BucketKind,
    entries: RwLock<HashMap<String, BucketValue>>,
}

/// In-memory [`Store`] backed by a shared bucket map
///
/// Cloning is cheap and clones share state, mirroring how pooled backends
/// hand out connected handles.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreState>,
}

#[derive(Default)]
struct StoreState {
    buckets: RwLock<HashMap<String, Arc<BucketState>>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_bucket(
        &self,
        name: &str,
        options: BucketOptions,
    ) -> StoreResult<Box<dyn Bucket>> {
        if self.inner.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Closed);
        }

        let mut buckets = self.inner.buckets.write();
        let state = buckets
            .entry(name.to_string())
            .or_insert_with(|| {
                trace!(bucket = name, kind = ?options.kind, "creating bucket");
                Arc::new(BucketState {
                    kind: options.kind,
                    entries: RwLock::new(HashMap::new()),
                })
            })
            .clone();

        if state.kind != options.kind {
            return Err(StoreError::invalid_operation(format!(
                "bucket {name:?} already exists with kind {:?}",
                state.kind
            )));
        }

        Ok(Box::new(MemoryBucket { state }))
    }

    async fn close(&self) -> StoreResult<()> {
        self.inner.closed.store(true, Ordering::SeqCst);
        self.inner.buckets.write().clear();
        Ok(())
    }
}

/// Handle to one named collection inside a [`MemoryStore`]
pub struct MemoryBucket {
    state: Arc<BucketState>,
}

impl MemoryBucket {
    fn check_kind(&self, value: &BucketValue) -> StoreResult<()> {
        if value.kind() != self.state.kind {
            return Err(StoreError::invalid_operation(format!(
                "cannot store a {:?} value in a {:?} bucket",
                value.kind(),
                self.state.kind
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Bucket for MemoryBucket {
    async fn has(&self, key: &str) -> StoreResult<bool> {
        Ok(self.state.entries.read().contains_key(key))
    }

    async fn get(&self, key: &str) -> StoreResult<Option<BucketValue>> {
        Ok(self.state.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: BucketValue) -> StoreResult<()> {
        self.check_kind(&value)?;
        self.state.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> StoreResult<()> {
        self.state.entries.write().remove(key);
        Ok(())
    }

    async fn getset(&self, key: &str, value: BucketValue) -> StoreResult<Option<BucketValue>> {
        self.check_kind(&value)?;
        Ok(self.state.entries.write().insert(key.to_string(), value))
    }

    async fn getdel(&self, key: &str) -> StoreResult<Option<BucketValue>> {
        Ok(self.state.entries.write().remove(key))
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.state.entries.read().keys().cloned().collect())
    }

    async fn clear(&self) -> StoreResult<()> {
        self.state.entries.write().clear();
        Ok(())
    }
}

/// Ready-made provider for the reference store
///
/// Each [`open`](StoreProvider::open) call produces an independent store, so
/// macro-generated tests never share state.
pub fn memory_provider() -> impl StoreProvider {
    || async { Ok::<_, StoreError>(Box::new(MemoryStore::new()) as Box<dyn Store>) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn buckets_are_isolated_by_name() {
        let store = MemoryStore::new();
        let a = store
            .create_bucket("a", BucketOptions::raw())
            .await
            .unwrap();
        let b = store
            .create_bucket("b", BucketOptions::raw())
            .await
            .unwrap();

        a.set("k", "va".into()).await.unwrap();
        b.set("k", "vb".into()).await.unwrap();

        assert_eq!(a.get("k").await.unwrap(), Some("va".into()));
        assert_eq!(b.get("k").await.unwrap(), Some("vb".into()));
    }

    #[tokio::test]
    async fn reattaching_by_name_shares_entries() {
        let store = MemoryStore::new();
        let first = store
            .create_bucket("shared", BucketOptions::raw())
            .await
            .unwrap();
        first.set("k", "v".into()).await.unwrap();

        let second = store
            .create_bucket("shared", BucketOptions::raw())
            .await
            .unwrap();
        assert_eq!(second.get("k").await.unwrap(), Some("v".into()));
    }

    #[tokio::test]
    async fn kind_mismatch_on_set_is_rejected() {
        let store = MemoryStore::new();
        let bucket = store
            .create_bucket("typed", BucketOptions::hash())
            .await
            .unwrap();

        let err = bucket.set("k", "raw value".into()).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidOperation(_)));

        bucket
            .set("k", BucketValue::hash_field("name", "v"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn recreating_with_other_kind_is_rejected() {
        let store = MemoryStore::new();
        store
            .create_bucket("typed", BucketOptions::hash())
            .await
            .unwrap();

        let err = store
            .create_bucket("typed", BucketOptions::raw())
            .await
            .err().unwrap();
        assert!(matches!(err, StoreError::InvalidOperation(_)));
    }

    #[tokio::test]
    async fn closed_store_rejects_bucket_creation() {
        let store = MemoryStore::new();
        store.close().await.unwrap();

        let err = store
            .create_bucket("late", BucketOptions::raw())
            .await
            .err().unwrap();
        assert_eq!(err, StoreError::Closed);
    }

    #[tokio::test]
    async fn getset_and_getdel_report_absent_keys() {
        let store = MemoryStore::new();
        let bucket = store
            .create_bucket("b", BucketOptions::raw())
            .await
            .unwrap();

        assert_eq!(bucket.getset("k", "v".into()).await.unwrap(), None);
        assert_eq!(bucket.getdel("missing").await.unwrap(), None);
        assert_eq!(bucket.getdel("k").await.unwrap(), Some("v".into()));
    }
}
