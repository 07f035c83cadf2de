//! # dirhub CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/dirhubapp/` — UI-agnostic library: data store, commands, views
//! - `crates/dirhub/` — This CLI tool, depends on the `dirhubapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/dirhub/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Runtime, config and dispatch (commands.rs)               │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Views + API (crates/dirhubapp/src/views.rs, api.rs)        │
//! │  - Page loaders compose concurrent service calls            │
//! │  - Every service call pays its simulated latency            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/dirhubapp/src/commands/*)            │
//! │  - Pure, synchronous logic over a `DataStore`               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Commands and views carry unit tests next to the code.
//! - `crates/dirhubapp/tests/` exercises the service contract end to end.
//! - `crates/dirhub/tests/` runs the built binary with latency disabled.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
