//! Suite runner
//!
//! Entry points for executing registered sub-suites against a provider.
//! There is no process-wide registry: [`run_suites`] takes the suite list
//! explicitly, and [`run_all`] supplies the default list. Adding a
//! behavioral area (TTL, batch operations) means implementing
//! [`ConformanceSuite`] and appending it to the caller's list - existing
//! suites are untouched.

use anyhow::{Context, Result};
use async_trait::async_trait;
use kvs_core::StoreProvider;
use tracing::debug;

use crate::bucket::BucketSuite;

/// A registrable group of behavioral checks
///
/// Suites receive the same provider contract the runner does and are
/// expected to acquire and release their own stores per case.
#[async_trait]
pub trait ConformanceSuite<P>: Send + Sync
where
    P: StoreProvider + ?Sized,
{
    /// Name used in log output and error context
    fn name(&self) -> &'static str;

    /// Run every check in this suite against the given provider
    async fn run(&self, provider: &P) -> Result<()>;
}

/// Run an explicit list of sub-suites against the given provider
///
/// Stops at the first failing suite; the returned error carries the suite
/// name and the failing case's context.
pub async fn run_suites<P>(provider: &P, suites: &[&dyn ConformanceSuite<P>]) -> Result<()>
where
    P: StoreProvider + ?Sized,
{
    for suite in suites {
        debug!(suite = suite.name(), "running conformance suite");
        suite
            .run(provider)
            .await
            .with_context(|| format!("suite {}", suite.name()))?;
    }
    Ok(())
}

/// Run every built-in sub-suite against the given provider
///
/// ## Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn my_backend_conforms() {
///     let provider = || async { MyStore::open_in_memory().await };
///     kvs_conformance::run_all(&provider).await.unwrap();
/// }
/// ```
pub async fn run_all<P>(provider: &P) -> Result<()>
where
    P: StoreProvider + ?Sized,
{
    run_suites(provider, &[&BucketSuite::new()]).await
}
