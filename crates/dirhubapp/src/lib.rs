//! # dirhub Architecture
//!
//! dirhub is the **UI-agnostic core** of a directory manager: a store of
//! directories, their categories and their items, with an async query service
//! on top. It is a library that happens to have a CLI client, not the other
//! way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `dirhub` binary, or any other UI)              │
//! │  - Parses arguments, renders output, owns the runtime       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Views (views.rs, query.rs, filter.rs)                      │
//! │  - Per-page loaders joining concurrent calls                │
//! │  - Query state machine, pure filter and sort functions      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Async facade: simulated latency, then dispatch           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Lookups, derived fields, aggregates                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over the three fixture collections       │
//! │  - FixtureStore (writes discarded), MemoryStore (applied)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr, calls `std::process::exit`
//! or starts a runtime. Async functions only suspend on the tokio timer, so
//! any runtime flavour can drive them; the service itself is single-threaded.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): the bulk of the logic tests, synchronous,
//!    against the embedded fixtures.
//! 2. **API and views**: dispatch, latency and join behaviour, on a paused
//!    tokio clock.
//! 3. **Integration** (`tests/`): the public contract end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The Aggregation Service facade
//! - [`commands`]: Business logic per operation group
//! - [`store`]: Storage abstraction, fixtures and write modes
//! - [`model`]: Core data types
//! - [`filter`]: View-state filters and sort keys
//! - [`query`]: Per-view query state machine
//! - [`views`]: Page loaders and mutation helpers
//! - [`notify`]: Notices after mutations
//! - [`pricing`]: Static pricing catalog
//! - [`latency`]: Simulated per-operation delays
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod latency;
pub mod model;
pub mod notify;
pub mod pricing;
pub mod query;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_support;

pub use api::DirectoryService;
pub use error::{DirhubError, Result};
