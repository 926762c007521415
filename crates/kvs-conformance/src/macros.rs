//! The `bucket_conformance_tests!` macro.
//!
//! Expands to one `#[tokio::test]` function per bucket case, so a backend's
//! test binary gets individually named, independently runnable conformance
//! tests. When new cases are added to the battery the macro grows with them;
//! invocations need no manual updates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kvs_conformance::bucket_conformance_tests;
//!
//! bucket_conformance_tests!(|| async {
//!     MyStore::open_in_memory().await
//! });
//! ```
//!
//! The provider expression is evaluated fresh inside every generated test,
//! and each test can be run alone with e.g. `cargo test conformance_bucket_has`.
//! The host crate must have `tokio` (with the `macros` and `rt` features)
//! available as a dev-dependency.

/// Generate per-case `#[tokio::test]` functions for a bucket store backend.
#[macro_export]
macro_rules! bucket_conformance_tests {
    ($provider_expr:expr) => {
        #[tokio::test]
        async fn conformance_bucket_has() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::Has)
                .await
                .expect("has() conformance failed");
        }

        #[tokio::test]
        async fn conformance_bucket_get_and_set() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::GetAndSet)
                .await
                .expect("get()/set() conformance failed");
        }

        #[tokio::test]
        async fn conformance_bucket_del() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::Del)
                .await
                .expect("del() conformance failed");
        }

        #[tokio::test]
        async fn conformance_bucket_getset() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::GetSet)
                .await
                .expect("getset() conformance failed");
        }

        #[tokio::test]
        async fn conformance_bucket_getdel() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::GetDel)
                .await
                .expect("getdel() conformance failed");
        }

        #[tokio::test]
        async fn conformance_bucket_keys() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::Keys)
                .await
                .expect("keys() conformance failed");
        }

        #[tokio::test]
        async fn conformance_bucket_clear() {
            let provider = $provider_expr;
            $crate::run_case(&provider, $crate::BucketCase::Clear)
                .await
                .expect("clear() conformance failed");
        }
    };
}
