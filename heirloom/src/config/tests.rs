use crate::config::{
    ConfigBuilder, ConfigError, ConfigLoader, HeirloomConfig, LogLevel, StorageBackend,
    validation,
};
use figment::providers::{Format, Toml};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = HeirloomConfig::default();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.matching.threshold, 40);
    assert_eq!(config.matching.photo_file_type, "image");
    assert_eq!(config.search.threshold, 10.0);
    assert_eq!(config.search.limit, 10);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(validation::validate_config(&config).is_ok());
}

#[test]
fn test_config_builder_with_archive() {
    let config = ConfigBuilder::new()
        .with_archive_file("/tmp/family.json")
        .with_threshold(55)
        .with_search_threshold(25.0)
        .with_log_level(LogLevel::Debug)
        .build()
        .unwrap();

    assert_eq!(config.storage.backend, StorageBackend::Archive);
    assert_eq!(
        config.storage.archive_path,
        Some(PathBuf::from("/tmp/family.json"))
    );
    assert_eq!(config.matching.threshold, 55);
    assert_eq!(config.search.threshold, 25.0);
    assert_eq!(config.logging.level, LogLevel::Debug);
}

#[test]
fn test_memory_storage_clears_archive_path() {
    let config = ConfigBuilder::new()
        .with_archive_file("family.json")
        .with_memory_storage()
        .build()
        .unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert!(config.storage.archive_path.is_none());
}

#[test]
fn test_validation_rejects_bad_values() {
    let over = ConfigBuilder::new().with_threshold(101).build();
    assert!(matches!(over, Err(ConfigError::ValidationError(_))));

    let negative = ConfigBuilder::new().with_search_threshold(-1.0).build();
    assert!(matches!(negative, Err(ConfigError::ValidationError(_))));

    let nan = ConfigBuilder::new().with_search_threshold(f64::NAN).build();
    assert!(nan.is_err());

    let no_hits = ConfigBuilder::new().with_search_limit(0).build();
    assert!(no_hits.is_err());

    let mut missing_path = HeirloomConfig::default();
    missing_path.storage.backend = StorageBackend::Archive;
    assert!(validation::validate_config(&missing_path).is_err());
}

#[test]
fn test_loader_merges_toml() {
    let mut loader = ConfigLoader::new();
    loader.merge(Toml::string(
        r#"
        [storage]
        backend = "archive"
        archive_path = "family.json"

        [matching]
        threshold = 60
        "#,
    ));
    let config = loader.extract().unwrap();

    assert_eq!(config.storage.backend, StorageBackend::Archive);
    assert_eq!(config.matching.threshold, 60);
    // untouched sections keep their defaults
    assert_eq!(config.search.limit, 10);
}

#[test]
fn test_loader_reads_file_and_env() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "heirloom.toml",
            r#"
            [matching]
            threshold = 45
            "#,
        )?;
        jail.set_env("HEIRLOOM_SEARCH__LIMIT", "3");

        let config = ConfigLoader::new()
            .load_default_files()
            .load_env()
            .extract()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.matching.threshold, 45);
        assert_eq!(config.search.limit, 3);
        Ok(())
    });
}

#[test]
fn test_missing_and_unsupported_files() {
    let mut loader = ConfigLoader::new();
    assert!(matches!(
        loader.load_file("/definitely/not/here.toml"),
        Err(ConfigError::FileLoadError(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    let ini = dir.path().join("config.ini");
    std::fs::write(&ini, "threshold=1").unwrap();
    assert!(matches!(
        loader.load_file(&ini),
        Err(ConfigError::FileLoadError(_))
    ));
}

#[test]
fn test_config_serialization() {
    let config = ConfigBuilder::new()
        .with_archive_file("/tmp/family.json")
        .with_threshold(70)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: HeirloomConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}
