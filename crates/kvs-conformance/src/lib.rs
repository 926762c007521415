//! Conformance suite for key-value bucket stores
//!
//! Given a [`StoreProvider`](kvs_core::StoreProvider), this crate runs a
//! fixed battery of behavioral assertions against the backend it produces:
//! get/set/delete/has/keys/clear plus the combined getset and getdel
//! operations, each exercised once per value kind (plain strings and
//! hash-typed records).
//!
//! Three ways to consume it, from coarsest to finest:
//!
//! - [`run_all`] - every built-in sub-suite in one call, for hosts with
//!   their own runner.
//! - [`run_suites`] - an explicit suite list, for hosts that add their own
//!   behavioral areas via [`ConformanceSuite`].
//! - [`bucket_conformance_tests!`] - a macro expanding to one
//!   `#[tokio::test]` per case, for ordinary `cargo test` binaries.
//!
//! Each case acquires a fresh store and a randomly named bucket from the
//! provider, and clears the bucket and closes the store on every exit path,
//! so no state leaks between cases. Failures carry the value kind and case
//! name in their context; the suite itself never catches or retries them.

pub mod bucket;
pub mod config;
pub mod kinds;
mod macros;
pub mod runner;
pub mod support;
pub mod test_support;

pub use bucket::{run_bucket_suite, run_case, run_case_with, BucketCase, BucketSuite};
pub use config::SuiteConfig;
pub use kinds::{ValueKind, VALUE_KINDS};
pub use runner::{run_all, run_suites, ConformanceSuite};
