//! # CLI Behavior
//!
//! This is **one possible UI client** for dirhub, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Pages as Commands
//!
//! Each command stands in for one page of the directory app:
//!
//! - `dirhub list` — the dashboard: every directory plus the totals strip.
//! - `dirhub browse` — public directories, filtered by topic and status, sorted.
//! - `dirhub show <slug>` — one public directory with its items and categories.
//! - `dirhub item <slug> <id>` — a single item inside a directory.
//! - `dirhub create` / `update` / `delete` — the editor; each reports a notice.
//! - `dirhub pricing` — the plan table.
//!
//! Page commands load through the same concurrent loaders the library exposes,
//! so `show` costs the slug lookup plus the slowest of its three follow-up calls.
//!
//! ### Writes
//!
//! With the default `discard` write mode, create/update/delete succeed and return
//! the record, but the next read shows the fixture data unchanged.
//!
//! ## Module Structure
//!
//! - `commands`: Runtime setup and dispatch
//! - `form`: Validation of create/update input
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling constants

mod commands;
mod form;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
