use crate::error::Result;
use crate::model::{Category, DirectoryId};
use crate::store::DataStore;

/// Categories of `directory_id` in collection order. Unknown ids yield nothing.
pub fn list<S: DataStore>(store: &S, directory_id: DirectoryId) -> Result<Vec<Category>> {
    Ok(store
        .categories()?
        .into_iter()
        .filter(|c| c.directory_id == directory_id)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureStore;

    #[test]
    fn test_lists_in_collection_order() {
        let store = FixtureStore::embedded().unwrap();
        let names: Vec<String> = list(&store, 2).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Cafes", "Restaurants", "Bakeries"]);
    }

    #[test]
    fn test_unknown_directory_is_empty() {
        let store = FixtureStore::embedded().unwrap();
        assert!(list(&store, 4).unwrap().is_empty());
        assert!(list(&store, 999).unwrap().is_empty());
    }
}
