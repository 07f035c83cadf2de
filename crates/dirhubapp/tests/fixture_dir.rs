use dirhubapp::api::DirectoryService;
use dirhubapp::config::DirhubConfig;
use dirhubapp::store::WriteMode;
use dirhubapp::DirhubError;
use std::fs;
use std::path::Path;

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("directories.json"),
        r#"[
            {"Id": 10, "name": "Book Nooks", "slug": "book-nooks", "description": "Independent bookshops", "status": "active", "views": 3, "createdAt": "2024-07-01"},
            {"Id": 11, "name": "Repair Cafes", "slug": "repair-cafes", "description": "Fix it yourself", "status": "inactive", "views": 8, "createdAt": "2024-08-01"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("categories.json"),
        r#"[{"Id": 1, "name": "Secondhand", "slug": "secondhand", "directoryId": 10, "order": 1}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("items.json"),
        r#"[
            {"Id": 1, "title": "Dog-Eared", "directoryId": 10, "categoryId": 1, "views": 4, "featured": true},
            {"Id": 2, "title": "Spine", "directoryId": 10, "views": 1}
        ]"#,
    )
    .unwrap();
}

#[tokio::test]
async fn test_service_reads_configured_fixture_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let config = DirhubConfig {
        simulate_latency: false,
        fixtures_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let service = DirectoryService::from_config(&config).unwrap();

    let book_nooks = service.get_directory_by_slug("book-nooks").await.unwrap();
    assert_eq!(book_nooks.item_count, 2);
    assert_eq!(service.list_public_directories().await.unwrap().len(), 1);

    let stats = service.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_views, 5);
    assert_eq!(stats.featured_items, 1);

    let created = service
        .create_directory(Default::default())
        .await
        .unwrap();
    assert_eq!(created.id, 12);
    assert_eq!(service.write_mode(), WriteMode::Discard);
}

#[test]
fn test_missing_fixture_dir_fails_to_build() {
    let dir = tempfile::tempdir().unwrap();
    let config = DirhubConfig {
        fixtures_dir: Some(dir.path().join("nope")),
        ..Default::default()
    };
    match DirectoryService::from_config(&config) {
        Err(DirhubError::Fixture(msg)) => assert!(msg.contains("directories.json")),
        Err(other) => panic!("Expected Fixture error, got {:?}", other),
        Ok(_) => panic!("Expected Fixture error, got a service"),
    }
}
