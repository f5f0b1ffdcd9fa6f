//! Command-line driver: parses a sequence of counter operations and runs
//! them against a fresh store.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use crate::counter::CounterIntent;
use crate::config::Config;
use crate::fetcher::{CountFetcher, SimulatedFetcher};
use crate::store::{AppState, Store};
use crate::thunk::{increment_async, increment_if_odd, FetchOutcome};

#[derive(Debug, Parser)]
#[command(name = "counter-store", version, about = "Drive the counter slice from the shell")]
pub struct Cli {
    /// Config file (default: ~/.config/counter-store/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print one JSON object per step instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Operations: inc, dec, add N, add-if-odd N, add-async N
    #[arg(required = true, allow_negative_numbers = true)]
    pub ops: Vec<String>,
}

/// One counter operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "amount", rename_all = "kebab-case")]
pub enum Op {
    Inc,
    Dec,
    Add(i64),
    AddIfOdd(i64),
    AddAsync(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpParseError {
    #[error("Unknown operation '{0}'")]
    UnknownOp(String),

    #[error("Operation '{op}' needs an integer amount")]
    MissingAmount { op: String },

    #[error("Invalid amount '{value}' for '{op}'")]
    InvalidAmount { op: String, value: String },
}

/// Parse `inc dec add 5 add-async -3` style token lists.
pub fn parse_ops<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Op>, OpParseError> {
    let mut ops = Vec::new();
    let mut iter = tokens.iter().map(S::as_ref);

    while let Some(token) = iter.next() {
        let op = match token {
            "inc" => Op::Inc,
            "dec" => Op::Dec,
            "add" | "add-if-odd" | "add-async" => {
                let value = iter.next().ok_or_else(|| OpParseError::MissingAmount {
                    op: token.to_string(),
                })?;
                let amount: i64 = value.parse().map_err(|_| OpParseError::InvalidAmount {
                    op: token.to_string(),
                    value: value.to_string(),
                })?;
                match token {
                    "add" => Op::Add(amount),
                    "add-if-odd" => Op::AddIfOdd(amount),
                    _ => Op::AddAsync(amount),
                }
            }
            other => return Err(OpParseError::UnknownOp(other.to_string())),
        };
        ops.push(op);
    }

    Ok(ops)
}

/// State after one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepReport {
    #[serde(flatten)]
    pub op: Op,
    pub state: AppState,
}

impl std::fmt::Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.op {
            Op::Inc => "inc".to_string(),
            Op::Dec => "dec".to_string(),
            Op::Add(n) => format!("add {}", n),
            Op::AddIfOdd(n) => format!("add-if-odd {}", n),
            Op::AddAsync(n) => format!("add-async {}", n),
        };
        write!(
            f,
            "{:<16} value={} status={}",
            op, self.state.counter.value, self.state.counter.status
        )
    }
}

/// Fresh session: a store at `value = 0, status = idle` and the configured fetcher.
pub fn new_session(config: &Config) -> (Store, SimulatedFetcher) {
    (Store::new(), SimulatedFetcher::from_config(&config.fetcher))
}

/// Run `ops` in order, awaiting each async fetch before the next op.
pub async fn run_ops<F>(store: &Store, fetcher: &F, ops: &[Op]) -> Vec<StepReport>
where
    F: CountFetcher + ?Sized,
{
    let mut reports = Vec::with_capacity(ops.len());

    for &op in ops {
        match op {
            Op::Inc => {
                store.dispatch(CounterIntent::Increment);
            }
            Op::Dec => {
                store.dispatch(CounterIntent::Decrement);
            }
            Op::Add(amount) => {
                store.dispatch(CounterIntent::IncrementByAmount { amount });
            }
            Op::AddIfOdd(amount) => {
                increment_if_odd(store, amount);
            }
            Op::AddAsync(amount) => {
                if let FetchOutcome::Rejected = increment_async(store, fetcher, amount).await {
                    tracing::debug!(amount, "Async increment left counter in failed state");
                }
            }
        }
        reports.push(StepReport {
            op,
            state: store.state(),
        });
    }

    reports
}
