//! Store and provider traits
//!
//! A [`Store`] is the top-level handle that creates buckets and owns overall
//! resource lifecycle. A [`StoreProvider`] is the factory a host hands to the
//! conformance suite; the suite opens one store per test case and closes it
//! in teardown, so providers must be able to produce instances repeatedly.

use std::future::Future;

use async_trait::async_trait;

use crate::bucket::{Bucket, BucketOptions};
use crate::error::StoreResult;

/// Top-level handle managing buckets and resource lifecycle
///
/// ## Example
///
/// ```rust,ignore
/// use kvs_core::{BucketOptions, Store, StoreResult};
///
/// async fn roundtrip(store: &dyn Store) -> StoreResult<()> {
///     let bucket = store.create_bucket("session", BucketOptions::raw()).await?;
///     bucket.set("token", "abc".into()).await?;
///     store.close().await
/// }
/// ```
#[async_trait]
pub trait Store: Send + Sync {
    /// Create (or attach to) the bucket named `name`
    ///
    /// `options` selects the value shape the bucket holds; see
    /// [`BucketOptions`]. Creating a bucket that already exists with
    /// compatible options returns a handle to the same underlying
    /// collection.
    async fn create_bucket(&self, name: &str, options: BucketOptions)
        -> StoreResult<Box<dyn Bucket>>;

    /// Release every resource held by this store instance
    ///
    /// After `close` resolves, the store must reject further bucket
    /// creation. Whether previously created bucket handles survive is
    /// implementation defined.
    async fn close(&self) -> StoreResult<()>;
}

/// Factory producing a ready-to-use [`Store`] per test case
///
/// The conformance suite invokes [`open`](StoreProvider::open) once per case
/// and never shares the produced store across cases. Opening is asynchronous:
/// providers that pool connections or spin up embedded engines may suspend.
///
/// A blanket implementation covers plain closures, so hosts can pass a
/// factory directly:
///
/// ```rust,ignore
/// let provider = || async { MyStore::connect("memory://").await };
/// kvs_conformance::run_all(&provider).await?;
/// ```
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// Produce a fresh store instance
    async fn open(&self) -> StoreResult<Box<dyn Store>>;
}

#[async_trait]
impl<F, Fut> StoreProvider for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = StoreResult<Box<dyn Store>>> + Send,
{
    async fn open(&self) -> StoreResult<Box<dyn Store>> {
        (self)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::value::BucketValue;

    struct NullBucket;

    #[async_trait]
    impl Bucket for NullBucket {
        async fn has(&self, _key: &str) -> StoreResult<bool> {
            Ok(false)
        }

        async fn get(&self, _key: &str) -> StoreResult<Option<BucketValue>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: BucketValue) -> StoreResult<()> {
            Ok(())
        }

        async fn del(&self, _key: &str) -> StoreResult<()> {
            Ok(())
        }

        async fn getset(
            &self,
            _key: &str,
            _value: BucketValue,
        ) -> StoreResult<Option<BucketValue>> {
            Ok(None)
        }

        async fn getdel(&self, _key: &str) -> StoreResult<Option<BucketValue>> {
            Ok(None)
        }

        async fn keys(&self) -> StoreResult<Vec<String>> {
            Ok(Vec::new())
        }

        async fn clear(&self) -> StoreResult<()> {
            Ok(())
        }
    }

    struct NullStore;

    #[async_trait]
    impl Store for NullStore {
        async fn create_bucket(
            &self,
            _name: &str,
            _options: BucketOptions,
        ) -> StoreResult<Box<dyn Bucket>> {
            Ok(Box::new(NullBucket))
        }

        async fn close(&self) -> StoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn closure_factory_satisfies_provider() {
        let provider =
            || async { Ok::<_, StoreError>(Box::new(NullStore) as Box<dyn Store>) };

        let store = provider.open().await.unwrap();
        let bucket = store
            .create_bucket("anything", BucketOptions::default())
            .await
            .unwrap();
        assert!(!bucket.has("missing").await.unwrap());
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn closure_factory_propagates_open_failure() {
        let provider =
            || async { Err::<Box<dyn Store>, StoreError>(StoreError::connection("refused")) };

        let err = provider.open().await.err().unwrap();
        assert_eq!(err, StoreError::Connection("refused".to_string()));
    }
}
