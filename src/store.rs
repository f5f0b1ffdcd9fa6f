//! Application state container.
//!
//! Owns the whole [`AppState`] and is the only path through which it
//! changes. Readers get snapshots; observers get a `watch` channel that
//! always holds the latest one.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::watch;

use crate::counter::{CounterIntent, CounterReducer, CounterState};
use crate::mvi::Reducer;

/// Whole application state. One field per slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AppState {
    pub counter: CounterState,
}

/// Shared handle to the application state.
///
/// Cloning is cheap and every clone sees the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    notify: watch::Sender<AppState>,
}

impl Store {
    /// Create a store with the initial session state (`value = 0, status = idle`).
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (notify, _) = watch::channel(state);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                notify,
            }),
        }
    }

    /// Apply an intent and return the resulting snapshot.
    ///
    /// The read-reduce-write sequence runs under the write lock, so every
    /// dispatch is a single atomic step.
    pub fn dispatch(&self, intent: CounterIntent) -> AppState {
        let mut state = self.inner.state.write();
        let name = intent.name();
        let next = AppState {
            counter: CounterReducer::reduce(state.counter, intent),
        };
        *state = next;

        tracing::debug!(
            intent = name,
            value = next.counter.value,
            status = %next.counter.status,
            "Intent dispatched"
        );

        // Publish while still holding the lock so observers see dispatch order.
        self.inner.notify.send_replace(next);
        next
    }

    /// Get a snapshot of the current state.
    pub fn state(&self) -> AppState {
        *self.inner.state.read()
    }

    /// Apply a selector to the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.inner.state.read())
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.notify.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
