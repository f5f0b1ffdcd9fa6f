//! Counter state container.
//!
//! A single counter slice driven through intents and a pure reducer, with
//! an asynchronous "fetch and add" operation backed by a simulated remote
//! call.

pub mod cli;
pub mod config;
pub mod counter;
pub mod fetcher;
pub mod logging;
pub mod mvi;
pub mod selectors;
pub mod store;
pub mod thunk;
