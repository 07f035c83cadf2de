use super::category_name;
use crate::error::{DirhubError, Result};
use crate::model::{Category, DirectoryId, Item, ItemId, ItemRecord};
use crate::store::DataStore;
use tracing::debug;

fn annotate(item: Item, categories: &[Category]) -> ItemRecord {
    let category_name = category_name(categories, item.category_id);
    ItemRecord {
        item,
        category_name,
    }
}

/// Items of `directory_id`, each with its category label. Never fails on unknown ids.
pub fn list<S: DataStore>(store: &S, directory_id: DirectoryId) -> Result<Vec<ItemRecord>> {
    let categories = store.categories()?;
    let records: Vec<ItemRecord> = store
        .items()?
        .into_iter()
        .filter(|item| item.directory_id == directory_id)
        .map(|item| annotate(item, &categories))
        .collect();
    debug!(directory_id, count = records.len(), "listed items");
    Ok(records)
}

pub fn get<S: DataStore>(store: &S, id: ItemId) -> Result<ItemRecord> {
    let item = store
        .items()?
        .into_iter()
        .find(|item| item.id == id)
        .ok_or(DirhubError::ItemNotFound(id))?;
    Ok(annotate(item, &store.categories()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNCATEGORIZED;
    use crate::store::FixtureStore;

    #[test]
    fn test_list_resolves_category_names() {
        let store = FixtureStore::embedded().unwrap();
        let items = list(&store, 5).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.category_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Plumbing", "Electrical", "Plumbing", UNCATEGORIZED]
        );
    }

    #[test]
    fn test_list_unknown_directory_is_empty() {
        let store = FixtureStore::embedded().unwrap();
        assert!(list(&store, 999).unwrap().is_empty());
    }

    #[test]
    fn test_get_item() {
        let store = FixtureStore::embedded().unwrap();
        let item = get(&store, 1).unwrap();
        assert_eq!(item.item.title, "Cafe Luna");
        assert_eq!(item.category_name, "Cafes");
        assert_eq!(item.item.custom_fields["phone"], "555-0142");
    }

    #[test]
    fn test_get_null_category_is_uncategorized() {
        let store = FixtureStore::embedded().unwrap();
        assert_eq!(get(&store, 12).unwrap().category_name, UNCATEGORIZED);
    }

    #[test]
    fn test_get_unknown_item() {
        let store = FixtureStore::embedded().unwrap();
        assert!(matches!(get(&store, 500), Err(DirhubError::ItemNotFound(500))));
    }
}
