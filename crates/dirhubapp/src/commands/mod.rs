//! # Command Layer
//!
//! This module contains the **core business logic** of dirhub. Each group of
//! operations lives in its own submodule as plain synchronous functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Resolve lookups and raise the not-found errors
//! - Compute derived fields (`itemCount`, `categoryName`) on every read
//! - Aggregate statistics
//! - Build new and merged directory records and hand them to the store
//!
//! ## What Commands Do NOT Do
//!
//! - **Latency**: simulated delays belong to the service facade in [`crate::api`]
//! - **Filtering and sorting for display**: see [`crate::filter`]
//! - **Any I/O**: no stdout, stderr or terminal concerns
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run
//! directly against [`FixtureStore`](crate::store::FixtureStore) or
//! [`MemoryStore`](crate::store::MemoryStore) over the embedded fixtures, with
//! no runtime and no clock.
//!
//! ## Command Modules
//!
//! - [`directories`]: list, lookup, create, update, delete, public listing
//! - [`categories`]: categories of a directory
//! - [`items`]: items of a directory, single item lookup
//! - [`stats`]: per-directory and dashboard aggregates

use crate::model::{
    Category, CategoryId, Directory, DirectoryId, DirectoryRecord, Item, UNCATEGORIZED,
};

pub mod categories;
pub mod directories;
pub mod items;
pub mod stats;

/// Number of items whose `directory_id` is `id`.
pub fn count_items(items: &[Item], id: DirectoryId) -> usize {
    items.iter().filter(|item| item.directory_id == id).count()
}

/// Attach the live item count to a directory.
pub fn annotate(directory: Directory, items: &[Item]) -> DirectoryRecord {
    let item_count = count_items(items, directory.id);
    DirectoryRecord {
        directory,
        item_count,
    }
}

/// Name of the category `id` refers to, or [`UNCATEGORIZED`].
pub fn category_name(categories: &[Category], id: Option<CategoryId>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fixtures;

    #[test]
    fn test_count_items_per_directory() {
        let fixtures = Fixtures::embedded().unwrap();
        let counts: Vec<usize> = (1..=6)
            .map(|id| count_items(&fixtures.items, id))
            .collect();
        assert_eq!(counts, vec![2, 3, 1, 1, 4, 1]);
        assert_eq!(count_items(&fixtures.items, 999), 0);
    }

    #[test]
    fn test_category_name_fallbacks() {
        let fixtures = Fixtures::embedded().unwrap();
        assert_eq!(category_name(&fixtures.categories, Some(3)), "Cafes");
        assert_eq!(category_name(&fixtures.categories, Some(99)), UNCATEGORIZED);
        assert_eq!(category_name(&fixtures.categories, None), UNCATEGORIZED);
    }
}
