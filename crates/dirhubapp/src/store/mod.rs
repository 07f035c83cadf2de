//! # Storage Layer
//!
//! The Fixture Store: three flat collections (directories, categories, items)
//! loaded once at start-up and read by the command layer through the
//! [`DataStore`] trait.
//!
//! ## Copy-on-Read
//!
//! Every read hands back owned clones. Callers can never reach into the backing
//! collections through a returned value, so the fixtures stay the ground truth
//! no matter what a caller does with its results.
//!
//! ## Write Modes
//!
//! Whether directory writes land anywhere is an explicit choice, see [`WriteMode`]:
//!
//! - [`WriteMode::Discard`]: the mock boundary. Writes are accepted and dropped,
//!   so later reads are unaffected. This is the default.
//! - [`WriteMode::InMemory`]: writes are applied to a mutable copy of the
//!   fixtures that lives as long as the process.
//!
//! ## Implementations
//!
//! - [`fixture_store::FixtureStore`]: read-only fixtures, discards writes.
//! - [`memory::MemoryStore`]: mutable in-memory copy of the fixtures.
//!
//! Both use `&self` for writes. The core is single-threaded, so
//! [`memory::MemoryStore`] uses `RefCell` rather than a lock.
//!
//! ## Fixture Layout
//!
//! ```text
//! fixtures/
//! ├── directories.json    # [{ "Id", "name", "slug", "status", "createdAt", ... }]
//! ├── categories.json     # [{ "Id", "name", "slug", "directoryId", "order" }]
//! └── items.json          # [{ "Id", "title", "directoryId", "categoryId", ... }]
//! ```

use crate::error::Result;
use crate::model::{Category, Directory, DirectoryId, Item};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod fixture_store;
pub mod fixtures;
pub mod memory;

pub use fixture_store::FixtureStore;
pub use fixtures::Fixtures;
pub use memory::MemoryStore;

/// What happens to directory writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Accept writes and drop them; reads always see the original fixtures.
    #[default]
    Discard,
    /// Apply writes to an in-memory copy of the fixtures.
    #[serde(alias = "memory")]
    InMemory,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Discard => f.write_str("discard"),
            WriteMode::InMemory => f.write_str("in-memory"),
        }
    }
}

impl FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "discard" => Ok(WriteMode::Discard),
            "in-memory" | "memory" => Ok(WriteMode::InMemory),
            other => Err(format!(
                "unknown write mode '{}' (expected discard or in-memory)",
                other
            )),
        }
    }
}

/// Abstract interface over the three fixture collections.
///
/// Reads return owned copies in collection order. Writes only concern
/// directories; categories and items are never written.
pub trait DataStore {
    /// All directories, in collection order.
    fn directories(&self) -> Result<Vec<Directory>>;

    /// All categories, in collection order.
    fn categories(&self) -> Result<Vec<Category>>;

    /// All items, in collection order.
    fn items(&self) -> Result<Vec<Item>>;

    /// Append a new directory.
    fn insert_directory(&self, directory: &Directory) -> Result<()>;

    /// Replace the directory with the same id.
    fn replace_directory(&self, directory: &Directory) -> Result<()>;

    /// Remove the directory with the given id.
    fn remove_directory(&self, id: DirectoryId) -> Result<()>;

    /// How this store treats writes.
    fn write_mode(&self) -> WriteMode;
}

impl<S: DataStore + ?Sized> DataStore for Box<S> {
    fn directories(&self) -> Result<Vec<Directory>> {
        (**self).directories()
    }

    fn categories(&self) -> Result<Vec<Category>> {
        (**self).categories()
    }

    fn items(&self) -> Result<Vec<Item>> {
        (**self).items()
    }

    fn insert_directory(&self, directory: &Directory) -> Result<()> {
        (**self).insert_directory(directory)
    }

    fn replace_directory(&self, directory: &Directory) -> Result<()> {
        (**self).replace_directory(directory)
    }

    fn remove_directory(&self, id: DirectoryId) -> Result<()> {
        (**self).remove_directory(id)
    }

    fn write_mode(&self) -> WriteMode {
        (**self).write_mode()
    }
}

/// Build the store matching `mode` over the given fixtures.
pub fn open_store(fixtures: Fixtures, mode: WriteMode) -> Box<dyn DataStore> {
    match mode {
        WriteMode::Discard => Box::new(FixtureStore::new(fixtures)),
        WriteMode::InMemory => Box::new(MemoryStore::new(fixtures)),
    }
}
