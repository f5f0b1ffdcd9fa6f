//! Shared test utilities and mock fetchers.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use counter_store::counter::CounterState;
use counter_store::fetcher::{CountFetcher, FetchError, FetchResponse};
use counter_store::store::{AppState, Store};
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Store starting at `value`, status idle.
pub fn store_at(value: i64) -> Store {
    Store::with_state(AppState {
        counter: CounterState::new(value),
    })
}

/// Fetcher that replays scripted results in order.
///
/// Once the script runs out it echoes the requested amount.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<i64, FetchError>>>,
    requests: Mutex<Vec<i64>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Result<i64, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl CountFetcher for ScriptedFetcher {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_count(&self, amount: i64) -> Result<FetchResponse, FetchError> {
        self.requests.lock().push(amount);
        let next = self.script.lock().pop_front().unwrap_or(Ok(amount));
        next.map(|data| FetchResponse { data })
    }
}

/// Fetcher that blocks until released, then echoes.
pub struct GatedFetcher {
    gate: Arc<Notify>,
    fail: bool,
}

impl GatedFetcher {
    pub fn new(fail: bool) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                gate: Arc::clone(&gate),
                fail,
            },
            gate,
        )
    }
}

#[async_trait]
impl CountFetcher for GatedFetcher {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch_count(&self, amount: i64) -> Result<FetchResponse, FetchError> {
        self.gate.notified().await;
        if self.fail {
            Err(FetchError::Rejected("gate closed".into()))
        } else {
            Ok(FetchResponse { data: amount })
        }
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
