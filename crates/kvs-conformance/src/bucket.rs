//! Bucket behavior suite
//!
//! The single registered sub-suite: a fixed battery of behavioral cases run
//! once per [`ValueKind`]. Every case is self-contained: it acquires its own
//! store and randomly named bucket from the provider and releases both on
//! every exit path, so cases can run in any order and in parallel host
//! runners.

use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use kvs_core::{Bucket, StoreProvider};
use tracing::debug;

use crate::config::SuiteConfig;
use crate::kinds::{ValueKind, VALUE_KINDS};
use crate::runner::ConformanceSuite;
use crate::support::{random_string, DEFAULT_STRING_LEN};

/// One behavioral case from the bucket contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketCase {
    /// `has()` is falsy before a set and truthy after
    Has,
    /// `get()` returns a deep-equal copy of what `set()` stored
    GetAndSet,
    /// `get()` after `del()` reports the key absent
    Del,
    /// `getset()` returns the prior value and installs the new one
    GetSet,
    /// `getdel()` returns the stored value and removes the key
    GetDel,
    /// `keys()` contains every inserted key
    Keys,
    /// `clear()` removes every key in the bucket
    Clear,
}

impl BucketCase {
    /// Every case in the battery, in the order `run_bucket_suite` executes
    pub const ALL: [BucketCase; 7] = [
        BucketCase::Has,
        BucketCase::GetAndSet,
        BucketCase::Del,
        BucketCase::GetSet,
        BucketCase::GetDel,
        BucketCase::Keys,
        BucketCase::Clear,
    ];

    /// Display name used in error context and log output
    pub fn name(self) -> &'static str {
        match self {
            BucketCase::Has => "has()",
            BucketCase::GetAndSet => "get() and set()",
            BucketCase::Del => "del()",
            BucketCase::GetSet => "getset()",
            BucketCase::GetDel => "getdel()",
            BucketCase::Keys => "keys()",
            BucketCase::Clear => "clear()",
        }
    }
}

/// Per-case fixture: the bucket under test plus generated inputs
struct CaseContext<'a> {
    bucket: Box<dyn Bucket>,
    key: String,
    kind: &'a ValueKind,
    config: &'a SuiteConfig,
}

/// Run one case across every value kind with the default configuration
///
/// This is the granular entry point the
/// [`bucket_conformance_tests!`](crate::bucket_conformance_tests) macro
/// expands against, so each generated test reports exactly one contract
/// violation.
pub async fn run_case<P>(provider: &P, case: BucketCase) -> Result<()>
where
    P: StoreProvider + ?Sized,
{
    run_case_with(provider, case, &SuiteConfig::default()).await
}

/// Run one case across every value kind with an explicit configuration
pub async fn run_case_with<P>(provider: &P, case: BucketCase, config: &SuiteConfig) -> Result<()>
where
    P: StoreProvider + ?Sized,
{
    for kind in VALUE_KINDS {
        debug!(kind = kind.name, case = case.name(), "running bucket case");
        with_bucket(provider, kind, config, case)
            .await
            .with_context(|| format!("bucket {}: {}", kind.name, case.name()))?;
    }
    Ok(())
}

/// Run the full bucket battery with the default configuration
pub async fn run_bucket_suite<P>(provider: &P) -> Result<()>
where
    P: StoreProvider + ?Sized,
{
    for case in BucketCase::ALL {
        run_case(provider, case).await?;
    }
    Ok(())
}

/// The bucket sub-suite as a registrable [`ConformanceSuite`]
///
/// Equivalent to [`run_bucket_suite`], packaged for the explicit suite list
/// accepted by [`run_suites`](crate::run_suites).
#[derive(Debug, Default)]
pub struct BucketSuite {
    config: SuiteConfig,
}

impl BucketSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a suite that runs with a non-default configuration
    pub fn with_config(config: SuiteConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl<P> ConformanceSuite<P> for BucketSuite
where
    P: StoreProvider + ?Sized,
{
    fn name(&self) -> &'static str {
        "bucket"
    }

    async fn run(&self, provider: &P) -> Result<()> {
        for case in BucketCase::ALL {
            run_case_with(provider, case, &self.config).await?;
        }
        Ok(())
    }
}

/// Acquire a store and bucket, run the case, and release on every exit path
///
/// The case's own error wins over a teardown error; a teardown failure after
/// a failed case is logged and dropped so it cannot mask the real violation.
async fn with_bucket<P>(
    provider: &P,
    kind: &ValueKind,
    config: &SuiteConfig,
    case: BucketCase,
) -> Result<()>
where
    P: StoreProvider + ?Sized,
{
    let store = provider
        .open()
        .await
        .context("provider failed to open a store")?;
    let bucket = store
        .create_bucket(&random_string(DEFAULT_STRING_LEN), kind.options)
        .await
        .context("failed to create bucket")?;

    let ctx = CaseContext {
        bucket,
        key: random_string(config.key_len),
        kind,
        config,
    };

    let outcome = dispatch(&ctx, case).await;

    let teardown: Result<()> = async {
        ctx.bucket.clear().await.context("teardown: clear failed")?;
        store.close().await.context("teardown: close failed")?;
        Ok(())
    }
    .await;

    match outcome {
        Ok(()) => teardown,
        Err(case_err) => {
            if let Err(teardown_err) = teardown {
                debug!(error = %teardown_err, "teardown failed after case failure");
            }
            Err(case_err)
        }
    }
}

async fn dispatch(ctx: &CaseContext<'_>, case: BucketCase) -> Result<()> {
    match case {
        BucketCase::Has => case_has(ctx).await,
        BucketCase::GetAndSet => case_get_and_set(ctx).await,
        BucketCase::Del => case_del(ctx).await,
        BucketCase::GetSet => case_getset(ctx).await,
        BucketCase::GetDel => case_getdel(ctx).await,
        BucketCase::Keys => case_keys(ctx).await,
        BucketCase::Clear => case_clear(ctx).await,
    }
}

async fn case_has(ctx: &CaseContext<'_>) -> Result<()> {
    let value = ctx.kind.generate();

    ensure!(
        !ctx.bucket.has(&ctx.key).await?,
        "has() reported a key that was never set"
    );
    ctx.bucket.set(&ctx.key, value).await?;
    ensure!(
        ctx.bucket.has(&ctx.key).await?,
        "has() missed a key that was just set"
    );
    Ok(())
}

async fn case_get_and_set(ctx: &CaseContext<'_>) -> Result<()> {
    let value = ctx.kind.generate();

    ctx.bucket.set(&ctx.key, value.clone()).await?;
    let result = ctx.bucket.get(&ctx.key).await?;
    ensure!(
        result.as_ref() == Some(&value),
        "get() returned {result:?}, expected {value:?}"
    );
    Ok(())
}

async fn case_del(ctx: &CaseContext<'_>) -> Result<()> {
    let value = ctx.kind.generate();

    ctx.bucket.set(&ctx.key, value.clone()).await?;
    let result = ctx.bucket.get(&ctx.key).await?;
    ensure!(
        result.as_ref() == Some(&value),
        "get() before del() returned {result:?}, expected {value:?}"
    );

    ctx.bucket.del(&ctx.key).await?;
    let result = ctx.bucket.get(&ctx.key).await?;
    ensure!(
        result.is_none(),
        "get() after del() returned {result:?}, expected the key to be absent"
    );
    Ok(())
}

async fn case_getset(ctx: &CaseContext<'_>) -> Result<()> {
    let value = ctx.kind.generate();
    let replacement = ctx.kind.generate();

    ctx.bucket.set(&ctx.key, value.clone()).await?;
    let prior = ctx.bucket.getset(&ctx.key, replacement.clone()).await?;
    ensure!(
        prior.as_ref() == Some(&value),
        "getset() returned {prior:?}, expected the prior value {value:?}"
    );

    let result = ctx.bucket.get(&ctx.key).await?;
    ensure!(
        result.as_ref() == Some(&replacement),
        "get() after getset() returned {result:?}, expected {replacement:?}"
    );
    Ok(())
}

async fn case_getdel(ctx: &CaseContext<'_>) -> Result<()> {
    let value = ctx.kind.generate();

    ctx.bucket.set(&ctx.key, value.clone()).await?;
    let removed = ctx.bucket.getdel(&ctx.key).await?;
    ensure!(
        removed.as_ref() == Some(&value),
        "getdel() returned {removed:?}, expected {value:?}"
    );

    let result = ctx.bucket.get(&ctx.key).await?;
    ensure!(
        result.is_none(),
        "get() after getdel() returned {result:?}, expected the key to be absent"
    );
    Ok(())
}

async fn case_keys(ctx: &CaseContext<'_>) -> Result<()> {
    let mut expected = Vec::with_capacity(ctx.config.keys_case_entries);
    for _ in 0..ctx.config.keys_case_entries {
        let key = random_string(DEFAULT_STRING_LEN);
        ctx.bucket.set(&key, ctx.kind.generate()).await?;
        expected.push(key);
    }

    // Containment only: backends may report keys from concurrent use
    let keys: std::collections::HashSet<String> =
        ctx.bucket.keys().await?.into_iter().collect();
    for key in &expected {
        ensure!(keys.contains(key), "keys() is missing inserted key {key:?}");
    }
    Ok(())
}

async fn case_clear(ctx: &CaseContext<'_>) -> Result<()> {
    ctx.bucket.set("key1", ctx.kind.generate()).await?;
    ctx.bucket.set("key2", ctx.kind.generate()).await?;

    ensure!(
        ctx.bucket.get("key1").await?.is_some(),
        "get() lost key1 before clear()"
    );
    ensure!(
        ctx.bucket.get("key2").await?.is_some(),
        "get() lost key2 before clear()"
    );

    ctx.bucket.clear().await?;

    ensure!(
        ctx.bucket.get("key1").await?.is_none(),
        "clear() left key1 behind"
    );
    ensure!(
        ctx.bucket.get("key2").await?.is_none(),
        "clear() left key2 behind"
    );
    Ok(())
}
