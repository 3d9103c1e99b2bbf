//! JSON archive persistence

use heirloom::prelude::*;
use heirloom::storage::ArchiveSnapshot;
use tempfile::tempdir;

#[tokio::test]
async fn test_links_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("family.json");

    {
        let store = ArchiveStore::open(&path).await.unwrap();
        store
            .insert_memory(Memory::builder(1, "Sunday lunch at Nana's").year(1971).build())
            .await
            .unwrap();
        store
            .insert_media(MediaRecord::image(7, "lunch.jpg").with_title("Sunday lunch"))
            .await
            .unwrap();
        store
            .insert_media(MediaRecord::image(8, "nana.jpg"))
            .await
            .unwrap();
        assert_eq!(store.append_link(1, 7).await.unwrap(), Some(0));
        assert_eq!(store.append_link(1, 8).await.unwrap(), Some(1));
    }

    let reopened = ArchiveStore::open(&path).await.unwrap();
    let linked = reopened.linked_media(1).await.unwrap();
    assert_eq!(
        linked
            .iter()
            .map(|p| (p.photo_id, p.order))
            .collect::<Vec<_>>(),
        vec![(7, 0), (8, 1)]
    );
    assert_eq!(linked[0].title.as_deref(), Some("Sunday lunch"));
    assert!(!dir.path().join("family.json.tmp").exists());
}

#[tokio::test]
async fn test_missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = ArchiveStore::open(dir.path().join("new.json")).await.unwrap();

    assert!(store.list_memories().await.unwrap().is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_lenient_years_and_missing_tables() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{
            "memories": [
                {"id": 1, "text": "Born in the front room", "year": "1931"},
                {"id": 2, "text": "Evacuated to Wales", "year": "around 1940"},
                {"id": 3, "text": "Demob suit", "year": ""}
            ],
            "media": [
                {"id": 5, "filename": "front_room.jpg", "year": 1931.0}
            ]
        }"#,
    )
    .unwrap();

    let store = ArchiveStore::open(&path).await.unwrap();
    let years: Vec<Option<i32>> = store
        .list_memories()
        .await
        .unwrap()
        .iter()
        .map(|m| m.year)
        .collect();
    assert_eq!(years, vec![Some(1931), None, None]);

    let media = store.get_media(5).await.unwrap().unwrap();
    assert_eq!(media.year, Some(1931));
    assert!(media.is_image());
    assert!(store.linked_media(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_archive_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ArchiveStore::open(&path).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn test_failed_write_rolls_back() {
    let dir = tempdir().unwrap();
    // the parent directory never exists, so every write fails
    let path = dir.path().join("missing").join("family.json");
    let store = ArchiveStore::open(&path).await.unwrap();

    let err = store.append_link(1, 7).await.unwrap_err();
    assert!(matches!(err, StorageError::Transaction(_)));
    assert_eq!(store.snapshot().await, ArchiveSnapshot::default());
    assert!(store.linked_media(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_manager_over_archive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("family.json");

    let store = ArchiveStore::open(&path).await.unwrap();
    store
        .insert_memory(
            Memory::builder(
                1,
                "One shows my mother sitting on the grass beside a carrycot.",
            )
            .year(1960)
            .build(),
        )
        .await
        .unwrap();
    store
        .insert_media(
            MediaRecord::image(3, "carrycot.jpg")
                .with_description("mother carrycot grass")
                .with_year(1960),
        )
        .await
        .unwrap();
    drop(store);

    let config = ConfigBuilder::testing()
        .with_archive_file(&path)
        .build()
        .unwrap();
    let manager = heirloom::init(config).await.unwrap();

    let suggestions = manager.suggest_photos_for_memory(1, None).await.unwrap();
    assert_eq!(suggestions.len(), 1);
    manager
        .apply_suggestion(1, suggestions[0].photo_id)
        .await
        .unwrap();

    let reopened = ArchiveStore::open(&path).await.unwrap();
    assert_eq!(reopened.snapshot().await.links.len(), 1);
}
