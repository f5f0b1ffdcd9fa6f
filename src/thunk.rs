//! Deferred operations that read the store and dispatch intents.
//!
//! `increment_async` drives the fetch lifecycle: pending is dispatched at
//! call time, then exactly one of fulfilled/rejected once the fetcher
//! resolves, or is abandoned. Fetch errors never reach the caller; they end
//! up as `CounterStatus::Failed` in state and a warning in the logs.

use std::future::Future;
use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::counter::CounterIntent;
use crate::fetcher::CountFetcher;
use crate::store::Store;

/// How an async increment resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Fulfilled { amount: i64 },
    Rejected,
}

impl FetchOutcome {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled { .. })
    }
}

/// Add `amount` if the current value is odd.
///
/// Uses the value observed at call time. Returns whether it dispatched.
pub fn increment_if_odd(store: &Store, amount: i64) -> bool {
    if !store.state().counter.is_odd() {
        return false;
    }
    store.dispatch(CounterIntent::IncrementByAmount { amount });
    true
}

/// Fetch `amount` from `fetcher` and add the result.
///
/// The pending intent is dispatched before this returns, so the store is
/// already `loading` when the caller gets the future. If the future is
/// dropped before the fetch resolves (a timeout, a lost `select!` branch,
/// never awaited) the lifecycle ends as rejected.
pub fn increment_async<'a, F>(
    store: &'a Store,
    fetcher: &'a F,
    amount: i64,
) -> impl Future<Output = FetchOutcome> + Send + 'a
where
    F: CountFetcher + ?Sized + 'a,
{
    let (request_id, pending) = begin_fetch(store.clone(), fetcher.name(), amount);
    async move { complete_fetch(pending, fetcher, amount, request_id).await }
}

/// Like [`increment_async`], but runs the fetch on its own task.
///
/// Aborting the task also ends the lifecycle as rejected.
pub fn spawn_increment_async(
    store: Store,
    fetcher: Arc<dyn CountFetcher>,
    amount: i64,
) -> JoinHandle<FetchOutcome> {
    let (request_id, pending) = begin_fetch(store, fetcher.name(), amount);
    tokio::spawn(async move { complete_fetch(pending, fetcher.as_ref(), amount, request_id).await })
}

/// Dispatch pending and arm a guard that rejects the fetch on drop.
fn begin_fetch(
    store: Store,
    fetcher: &'static str,
    amount: i64,
) -> (Uuid, ScopeGuard<Store, impl FnOnce(Store) + Send + Sync>) {
    let request_id = Uuid::new_v4();
    tracing::info!(request_id = %request_id, fetcher, amount, "Fetch started");
    store.dispatch(CounterIntent::FetchPending);

    let pending = scopeguard::guard(store, move |store: Store| {
        tracing::warn!(request_id = %request_id, "Fetch dropped before completion");
        store.dispatch(CounterIntent::FetchRejected);
    });
    (request_id, pending)
}

async fn complete_fetch<F, D>(
    pending: ScopeGuard<Store, D>,
    fetcher: &F,
    amount: i64,
    request_id: Uuid,
) -> FetchOutcome
where
    F: CountFetcher + ?Sized,
    D: FnOnce(Store),
{
    let result = fetcher.fetch_count(amount).await;
    let store = ScopeGuard::into_inner(pending);

    match result {
        Ok(response) => {
            tracing::info!(request_id = %request_id, data = response.data, "Fetch fulfilled");
            store.dispatch(CounterIntent::FetchFulfilled {
                amount: response.data,
            });
            FetchOutcome::Fulfilled {
                amount: response.data,
            }
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Fetch rejected");
            store.dispatch(CounterIntent::FetchRejected);
            FetchOutcome::Rejected
        }
    }
}
