use dirhubapp::api::DirectoryService;
use dirhubapp::filter::{self, DirectoryFilter, ItemFilter, Selection, SortKey};
use dirhubapp::latency::Latency;
use dirhubapp::model::{
    DirectoryPatch, DirectoryStats, DirectoryStatus, NewDirectory, UNCATEGORIZED,
};
use dirhubapp::query::{Query, QueryState};
use dirhubapp::store::{FixtureStore, Fixtures, MemoryStore};
use dirhubapp::views;

fn setup() -> DirectoryService<FixtureStore> {
    DirectoryService::new(FixtureStore::embedded().unwrap(), Latency::none())
}

fn new_directory(name: &str, slug: &str) -> NewDirectory {
    NewDirectory {
        name: name.to_string(),
        slug: slug.to_string(),
        description: format!("{} listings", name),
        category: None,
    }
}

#[tokio::test]
async fn test_item_count_matches_items_after_discarded_writes() {
    let service = setup();
    service
        .create_directory(new_directory("Pet Care", "pet-care"))
        .await
        .unwrap();
    service.delete_directory(5).await.unwrap();
    service
        .update_directory(
            2,
            &DirectoryPatch {
                views: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let directories = service.list_directories().await.unwrap();
    assert_eq!(directories.len(), 6);
    for record in &directories {
        let items = service.list_items(record.directory.id).await.unwrap();
        assert_eq!(record.item_count, items.len());
    }
    assert_eq!(service.get_directory(2).await.unwrap().directory.views, 890);
}

#[tokio::test]
async fn test_lookups_fail_exactly_for_absent_keys() {
    let service = setup();
    for record in service.list_directories().await.unwrap() {
        let by_id = service.get_directory(record.directory.id).await.unwrap();
        let by_slug = service
            .get_directory_by_slug(&record.directory.slug)
            .await
            .unwrap();
        assert_eq!(by_id, record);
        assert_eq!(by_slug, record);
    }
    assert!(service.get_directory(0).await.unwrap_err().is_not_found());
    assert!(service
        .get_directory_by_slug("missing")
        .await
        .unwrap_err()
        .is_not_found());
    assert!(service.get_item(1000).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_public_is_active_subset_in_order() {
    let service = setup();
    let active: Vec<_> = service
        .list_directories()
        .await
        .unwrap()
        .into_iter()
        .filter(|d| d.directory.status == DirectoryStatus::Active)
        .collect();
    assert_eq!(service.list_public_directories().await.unwrap(), active);
}

#[tokio::test]
async fn test_public_scenario_skips_draft() {
    let json = r#"[
        {"Id": 1, "name": "One", "slug": "one", "status": "active", "createdAt": "2024-01-01"},
        {"Id": 2, "name": "Two", "slug": "two", "status": "draft", "createdAt": "2024-01-02"},
        {"Id": 3, "name": "Three", "slug": "three", "status": "active", "createdAt": "2024-01-03"}
    ]"#;
    let store = FixtureStore::new(Fixtures::from_json(json, "[]", "[]").unwrap());
    let service = DirectoryService::new(store, Latency::none());
    let ids: Vec<_> = service
        .list_public_directories()
        .await
        .unwrap()
        .iter()
        .map(|d| d.directory.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_directory_five_stats() {
    let service = setup();
    assert_eq!(
        service.get_directory_stats(5).await.unwrap(),
        DirectoryStats {
            total_items: 4,
            total_views: 17,
            featured_items: 1,
            total_categories: 2,
        }
    );
}

#[tokio::test]
async fn test_unresolvable_category_is_uncategorized() {
    let service = setup();
    let item = service.get_item(10).await.unwrap();
    assert_eq!(item.item.category_id, Some(99));
    assert_eq!(item.category_name, UNCATEGORIZED);
}

#[tokio::test]
async fn test_caf_search_over_loaded_items() {
    let service = setup();
    let mut items = service.list_items(1).await.unwrap();
    items.extend(service.list_items(2).await.unwrap());

    let filter = ItemFilter {
        query: "caf".to_string(),
        category: Selection::All,
    };
    let titles: Vec<String> = filter::filter_items(&items, &filter)
        .into_iter()
        .map(|i| i.item.title)
        .collect();
    assert_eq!(titles, vec!["Cafe Luna", "Cafeteria Central"]);
}

#[tokio::test]
async fn test_browse_filters_compose() {
    let service = setup();
    let view = views::load_browse(&service).await.unwrap();
    let filter = DirectoryFilter {
        query: String::new(),
        category: Selection::Only("restaurant".to_string()),
        status: Selection::All,
    };
    let names: Vec<String> = view
        .visible(&filter, SortKey::Alphabetical)
        .into_iter()
        .map(|d| d.directory.name)
        .collect();
    assert_eq!(names, vec!["Coffee Corners", "Foodie Guide"]);

    let newest: Vec<_> = view
        .visible(&DirectoryFilter::default(), SortKey::Newest)
        .iter()
        .map(|d| d.directory.id)
        .collect();
    assert_eq!(newest, vec![6, 5, 2, 1]);
}

#[tokio::test(start_paused = true)]
async fn test_batch_with_one_not_found_fails() {
    let service = DirectoryService::embedded().unwrap();
    let result = tokio::try_join!(
        service.list_directories(),
        service.get_directory(404),
        service.get_dashboard_stats()
    );
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test(start_paused = true)]
async fn test_query_retry_after_failed_page_load() {
    let service = DirectoryService::embedded().unwrap();
    let mut query = Query::new();

    query
        .run(views::load_directory_page(&service, "foodie"))
        .await;
    assert!(matches!(query.state(), QueryState::Failed(e) if e.is_not_found()));

    query
        .run(views::load_directory_page(&service, "foodie-guide"))
        .await;
    assert_eq!(query.attempts(), 2);
    let page = query.data().unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.stats.total_categories, 3);
}

#[tokio::test]
async fn test_in_memory_writes_are_visible() {
    let service = DirectoryService::new(MemoryStore::embedded().unwrap(), Latency::none());

    let created = service
        .create_directory(new_directory("Pet Care", "pet-care"))
        .await
        .unwrap();
    assert_eq!(created.id, 7);
    assert_eq!(created.status, DirectoryStatus::Draft);
    let found = service.get_directory_by_slug("pet-care").await.unwrap();
    assert_eq!(found.directory, created);

    service
        .update_directory(
            7,
            &DirectoryPatch {
                status: Some(DirectoryStatus::Active),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let public = service.list_public_directories().await.unwrap();
    assert_eq!(public.last().unwrap().directory.id, 7);

    service.delete_directory(7).await.unwrap();
    assert!(service.get_directory(7).await.unwrap_err().is_not_found());
    assert_eq!(service.get_dashboard_stats().await.unwrap().total_directories, 6);
}
