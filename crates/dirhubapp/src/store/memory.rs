use super::{DataStore, Fixtures, WriteMode};
use crate::error::{DirhubError, Result};
use crate::model::{Category, Directory, DirectoryId, Item};
use std::cell::RefCell;
use tracing::debug;

/// Mutable in-memory copy of the fixtures.
///
/// Uses `RefCell` for interior mutability since the core is single-threaded.
/// Borrows never outlive a single trait call, so no borrow is ever held across
/// an await point in the service.
#[derive(Debug, Default)]
pub struct MemoryStore {
    fixtures: RefCell<Fixtures>,
}

impl MemoryStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures: RefCell::new(fixtures),
        }
    }

    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Fixtures::embedded()?))
    }

    /// Snapshot of the current collections.
    pub fn snapshot(&self) -> Fixtures {
        self.fixtures.borrow().clone()
    }
}

impl DataStore for MemoryStore {
    fn directories(&self) -> Result<Vec<Directory>> {
        Ok(self.fixtures.borrow().directories.clone())
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.fixtures.borrow().categories.clone())
    }

    fn items(&self) -> Result<Vec<Item>> {
        Ok(self.fixtures.borrow().items.clone())
    }

    fn insert_directory(&self, directory: &Directory) -> Result<()> {
        debug!(id = directory.id, "directory inserted (memory store)");
        self.fixtures
            .borrow_mut()
            .directories
            .push(directory.clone());
        Ok(())
    }

    fn replace_directory(&self, directory: &Directory) -> Result<()> {
        let mut fixtures = self.fixtures.borrow_mut();
        let slot = fixtures
            .directories
            .iter_mut()
            .find(|d| d.id == directory.id)
            .ok_or(DirhubError::DirectoryNotFound(directory.id))?;
        *slot = directory.clone();
        debug!(id = directory.id, "directory replaced (memory store)");
        Ok(())
    }

    fn remove_directory(&self, id: DirectoryId) -> Result<()> {
        let mut fixtures = self.fixtures.borrow_mut();
        let before = fixtures.directories.len();
        fixtures.directories.retain(|d| d.id != id);
        if fixtures.directories.len() == before {
            return Err(DirhubError::DirectoryNotFound(id));
        }
        debug!(id, "directory removed (memory store)");
        Ok(())
    }

    fn write_mode(&self) -> WriteMode {
        WriteMode::InMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_read() {
        let store = MemoryStore::embedded().unwrap();
        let mut dir = store.directories().unwrap()[0].clone();
        dir.id = 42;
        dir.slug = "new-one".to_string();
        store.insert_directory(&dir).unwrap();

        let dirs = store.directories().unwrap();
        assert_eq!(dirs.len(), 7);
        assert_eq!(dirs.last().unwrap().slug, "new-one");
    }

    #[test]
    fn test_replace_keeps_position() {
        let store = MemoryStore::embedded().unwrap();
        let mut dir = store.directories().unwrap()[2].clone();
        dir.name = "Renamed".to_string();
        store.replace_directory(&dir).unwrap();

        assert_eq!(store.directories().unwrap()[2].name, "Renamed");
    }

    #[test]
    fn test_replace_unknown_is_not_found() {
        let store = MemoryStore::embedded().unwrap();
        let mut dir = store.directories().unwrap()[0].clone();
        dir.id = 999;
        match store.replace_directory(&dir) {
            Err(DirhubError::DirectoryNotFound(id)) => assert_eq!(id, 999),
            other => panic!("Expected DirectoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::embedded().unwrap();
        store.remove_directory(1).unwrap();
        assert!(store.directories().unwrap().iter().all(|d| d.id != 1));
        assert!(store.remove_directory(1).is_err());
        // items are left alone
        assert_eq!(store.snapshot().items.len(), 12);
    }
}
