use super::{DataStore, Fixtures, WriteMode};
use crate::error::Result;
use crate::model::{Category, Directory, DirectoryId, Item};
use tracing::debug;

/// Read-only fixture store.
///
/// Writes are accepted and dropped, so every read sees the collections exactly
/// as they were loaded.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    fixtures: Fixtures,
}

impl FixtureStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Fixtures::embedded()?))
    }
}

impl DataStore for FixtureStore {
    fn directories(&self) -> Result<Vec<Directory>> {
        Ok(self.fixtures.directories.clone())
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.fixtures.categories.clone())
    }

    fn items(&self) -> Result<Vec<Item>> {
        Ok(self.fixtures.items.clone())
    }

    fn insert_directory(&self, directory: &Directory) -> Result<()> {
        debug!(id = directory.id, "insert discarded (fixture store)");
        Ok(())
    }

    fn replace_directory(&self, directory: &Directory) -> Result<()> {
        debug!(id = directory.id, "update discarded (fixture store)");
        Ok(())
    }

    fn remove_directory(&self, id: DirectoryId) -> Result<()> {
        debug!(id, "delete discarded (fixture store)");
        Ok(())
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::Discard
    }
}
