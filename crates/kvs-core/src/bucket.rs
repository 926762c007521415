//! Bucket abstraction trait
//!
//! A bucket is a named, independently scoped key-value collection within a
//! store. This module defines the creation options recognized by
//! [`Store::create_bucket`](crate::Store::create_bucket) and the operation
//! contract every bucket implementation must satisfy.
//!
//! ## Dependency Inversion
//!
//! The trait lives here, in the contract crate, so that the conformance
//! suite (and any other consumer) depends only on the abstraction while
//! backend crates depend on this crate to provide implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::value::BucketValue;

/// Storage discriminator for a bucket
///
/// Selects the value shape a bucket holds. `Raw` buckets store plain
/// strings; `Hash` buckets store flat string-to-string records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    /// Plain string storage (the default when no type is requested)
    #[default]
    Raw,
    /// Structured record storage
    Hash,
}

/// Options passed to [`Store::create_bucket`](crate::Store::create_bucket)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketOptions {
    /// Requested storage discriminator
    #[serde(default)]
    pub kind: BucketKind,
}

impl BucketOptions {
    /// Options for a plain string bucket
    pub const fn raw() -> Self {
        Self {
            kind: BucketKind::Raw,
        }
    }

    /// Options for a hash-typed bucket
    pub const fn hash() -> Self {
        Self {
            kind: BucketKind::Hash,
        }
    }
}

/// A named key-value collection within a store
///
/// Every operation may suspend; implementations backed by purely in-memory
/// state simply resolve immediately. Absence is reported through the return
/// value (`false` from [`has`](Bucket::has), `None` from
/// [`get`](Bucket::get)), never through an error.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync` so buckets can be used across async
/// boundaries and behind `Box<dyn Bucket>`.
#[async_trait]
pub trait Bucket: Send + Sync {
    /// Check whether `key` is currently present in the bucket
    async fn has(&self, key: &str) -> StoreResult<bool>;

    /// Fetch the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<BucketValue>>;

    /// Store `value` under `key`, replacing any existing value
    async fn set(&self, key: &str, value: BucketValue) -> StoreResult<()>;

    /// Remove `key` from the bucket
    ///
    /// Deleting an absent key is not an error.
    async fn del(&self, key: &str) -> StoreResult<()>;

    /// Store `value` under `key` and return the value it replaced
    ///
    /// From the caller's perspective this is an atomically observed replace:
    /// the returned value is exactly what a `get` immediately before the call
    /// would have produced, and a `get` immediately after returns `value`.
    async fn getset(&self, key: &str, value: BucketValue) -> StoreResult<Option<BucketValue>>;

    /// Remove `key` and return the value that was stored under it
    ///
    /// Returns `Ok(None)` when the key was absent.
    async fn getdel(&self, key: &str) -> StoreResult<Option<BucketValue>>;

    /// List the keys currently present in the bucket
    ///
    /// The result must include every key set through this bucket; callers
    /// treat it as a set, so ordering is unspecified and extra keys from
    /// concurrent use elsewhere are tolerated.
    async fn keys(&self) -> StoreResult<Vec<String>>;

    /// Remove every key in the bucket
    async fn clear(&self) -> StoreResult<()>;
}
