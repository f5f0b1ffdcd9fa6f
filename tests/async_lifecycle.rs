mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{store_at, GatedFetcher, ScriptedFetcher};
use counter_store::counter::{CounterState, CounterStatus};
use counter_store::fetcher::{CountFetcher, FetchError, SimulatedFetcher};
use counter_store::selectors::{select_count, select_status};
use counter_store::store::Store;
use counter_store::thunk::{
    increment_async, increment_if_odd, spawn_increment_async, FetchOutcome,
};

#[tokio::test]
async fn increment_async_success_adds_fetched_amount() {
    let store = Store::new();
    let fetcher = ScriptedFetcher::new(vec![]);

    let outcome = increment_async(&store, &fetcher, 7).await;

    assert_eq!(outcome, FetchOutcome::Fulfilled { amount: 7 });
    assert_eq!(store.state().counter, CounterState::new(7));
    assert_eq!(fetcher.requests(), vec![7]);
}

#[tokio::test]
async fn increment_async_adds_what_the_fetcher_returns() {
    let store = store_at(10);
    let fetcher = ScriptedFetcher::new(vec![Ok(-4)]);

    increment_async(&store, &fetcher, 99).await;

    assert_eq!(store.select(select_count), 6);
}

#[tokio::test]
async fn increment_async_failure_is_absorbed() {
    let store = store_at(2);
    let fetcher = ScriptedFetcher::new(vec![Err(FetchError::Rejected("down".into()))]);

    let outcome = increment_async(&store, &fetcher, 7).await;

    assert_eq!(outcome, FetchOutcome::Rejected);
    assert_eq!(store.select(select_count), 2);
    assert_eq!(store.select(select_status), CounterStatus::Failed);
}

#[tokio::test]
async fn success_after_failure_returns_to_idle() {
    let store = Store::new();
    let fetcher = ScriptedFetcher::new(vec![Err(FetchError::Simulated { call: 1 }), Ok(3)]);

    increment_async(&store, &fetcher, 3).await;
    assert_eq!(store.select(select_status), CounterStatus::Failed);

    increment_async(&store, &fetcher, 3).await;
    assert_eq!(store.state().counter, CounterState::new(3));
}

#[tokio::test]
async fn spawned_fetch_is_loading_until_released() {
    let store = Store::new();
    let (fetcher, gate) = GatedFetcher::new(false);
    let fetcher: Arc<dyn CountFetcher> = Arc::new(fetcher);

    let handle = spawn_increment_async(store.clone(), fetcher, 7);
    assert_eq!(
        store.state().counter,
        CounterState {
            value: 0,
            status: CounterStatus::Loading,
        }
    );

    // Sync mutations still apply while the fetch is in flight.
    store.dispatch(counter_store::counter::CounterIntent::Increment);
    assert_eq!(store.select(select_status), CounterStatus::Loading);

    gate.notify_one();
    assert_eq!(handle.await.unwrap(), FetchOutcome::Fulfilled { amount: 7 });
    assert_eq!(store.state().counter, CounterState::new(8));
}

#[tokio::test]
async fn spawned_fetch_failure_sets_failed() {
    let store = Store::new();
    let (fetcher, gate) = GatedFetcher::new(true);

    let handle = spawn_increment_async(store.clone(), Arc::new(fetcher), 7);
    gate.notify_one();

    assert_eq!(handle.await.unwrap(), FetchOutcome::Rejected);
    assert_eq!(
        store.state().counter,
        CounterState {
            value: 0,
            status: CounterStatus::Failed,
        }
    );
}

#[tokio::test]
async fn timed_out_fetch_ends_rejected() {
    let store = store_at(3);
    let (fetcher, _gate) = GatedFetcher::new(false);

    let result = tokio::time::timeout(
        Duration::from_millis(20),
        increment_async(&store, &fetcher, 7),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        store.state().counter,
        CounterState {
            value: 3,
            status: CounterStatus::Failed,
        }
    );
}

#[tokio::test]
async fn aborted_spawned_fetch_ends_rejected() {
    let store = Store::new();
    let (fetcher, _gate) = GatedFetcher::new(false);

    let handle = spawn_increment_async(store.clone(), Arc::new(fetcher), 7);
    assert_eq!(store.select(select_status), CounterStatus::Loading);

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());
    assert_eq!(
        store.state().counter,
        CounterState {
            value: 0,
            status: CounterStatus::Failed,
        }
    );
}

#[tokio::test]
async fn subscriber_observes_pending_then_fulfilled() {
    let store = Store::new();
    let mut rx = store.subscribe();
    let (fetcher, gate) = GatedFetcher::new(false);

    let handle = spawn_increment_async(store.clone(), Arc::new(fetcher), 5);
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().counter.status, CounterStatus::Loading);

    gate.notify_one();
    handle.await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().counter, CounterState::new(5));
}

#[tokio::test(start_paused = true)]
async fn simulated_fetcher_drives_full_lifecycle() {
    let store = Store::new();
    let fetcher = SimulatedFetcher::new(Duration::from_millis(500)).with_fail_every(2);

    let fut = increment_async(&store, &fetcher, 7);
    assert_eq!(store.select(select_status), CounterStatus::Loading);
    assert!(fut.await.is_fulfilled());
    assert_eq!(store.state().counter, CounterState::new(7));

    let outcome = increment_async(&store, &fetcher, 7).await;
    assert_eq!(outcome, FetchOutcome::Rejected);
    assert_eq!(
        store.state().counter,
        CounterState {
            value: 7,
            status: CounterStatus::Failed,
        }
    );
}

#[test]
fn increment_if_odd_scenarios() {
    let even = store_at(0);
    assert!(!increment_if_odd(&even, 10));
    assert_eq!(even.select(select_count), 0);

    let odd = store_at(3);
    assert!(increment_if_odd(&odd, 10));
    assert_eq!(odd.select(select_count), 13);

    let negative_odd = store_at(-1);
    assert!(increment_if_odd(&negative_odd, 2));
    assert_eq!(negative_odd.select(select_count), 1);
}
