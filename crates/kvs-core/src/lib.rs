//! Capability contract for key-value bucket stores
//!
//! This crate defines the abstractions a bucket store backend implements and
//! the conformance suite (`kvs-conformance`) verifies:
//!
//! - [`Store`] - top-level handle: bucket creation and lifecycle teardown
//! - [`Bucket`] - named key-value collection with get/set/del/has/keys/clear
//!   plus the combined [`getset`](Bucket::getset) and
//!   [`getdel`](Bucket::getdel) operations
//! - [`StoreProvider`] - zero-argument factory the host supplies, invoked
//!   once per test case (implemented for free by async closures)
//! - [`BucketValue`] - the value model: plain strings or flat string records
//! - [`StoreError`] / [`StoreResult`] - the shared error vocabulary
//!
//! Backend crates depend on this crate alone; nothing here pulls in a
//! runtime, an engine, or the suite itself.

pub mod bucket;
pub mod error;
pub mod store;
pub mod value;

pub use bucket::{Bucket, BucketKind, BucketOptions};
pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreProvider};
pub use value::BucketValue;
