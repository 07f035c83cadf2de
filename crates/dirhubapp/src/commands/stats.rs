use crate::error::Result;
use crate::model::{DashboardStats, DirectoryId, DirectoryStats, Item};
use crate::store::DataStore;

fn total_views<'a>(items: impl IntoIterator<Item = &'a Item>) -> u64 {
    items
        .into_iter()
        .fold(0u64, |total, item| total.saturating_add(item.views))
}

/// Aggregates for one directory. All zero when the id is unknown.
pub fn directory<S: DataStore>(store: &S, directory_id: DirectoryId) -> Result<DirectoryStats> {
    let items: Vec<Item> = store
        .items()?
        .into_iter()
        .filter(|item| item.directory_id == directory_id)
        .collect();
    let total_categories = store
        .categories()?
        .iter()
        .filter(|c| c.directory_id == directory_id)
        .count();

    Ok(DirectoryStats {
        total_items: items.len(),
        total_views: total_views(&items),
        featured_items: items.iter().filter(|item| item.featured).count(),
        total_categories,
    })
}

/// Aggregates across every directory and item.
pub fn dashboard<S: DataStore>(store: &S) -> Result<DashboardStats> {
    let items = store.items()?;
    Ok(DashboardStats {
        total_directories: store.directories()?.len(),
        total_items: items.len(),
        total_views: total_views(&items),
        featured_items: items.iter().filter(|item| item.featured).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureStore;

    #[test]
    fn test_directory_stats() {
        let store = FixtureStore::embedded().unwrap();
        assert_eq!(
            directory(&store, 5).unwrap(),
            DirectoryStats {
                total_items: 4,
                total_views: 17,
                featured_items: 1,
                total_categories: 2,
            }
        );
    }

    #[test]
    fn test_unknown_directory_is_all_zero() {
        let store = FixtureStore::embedded().unwrap();
        assert_eq!(directory(&store, 404).unwrap(), DirectoryStats::default());
    }

    #[test]
    fn test_total_views_saturates() {
        let mut items = FixtureStore::embedded().unwrap().items().unwrap();
        items[0].views = u64::MAX;
        items[1].views = 10;
        assert_eq!(total_views(&items), u64::MAX);
    }

    #[test]
    fn test_dashboard_stats() {
        let store = FixtureStore::embedded().unwrap();
        assert_eq!(
            dashboard(&store).unwrap(),
            DashboardStats {
                total_directories: 6,
                total_items: 12,
                total_views: 798,
                featured_items: 4,
            }
        );
    }
}
