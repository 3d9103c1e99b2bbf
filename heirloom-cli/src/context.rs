use std::path::PathBuf;

use heirloom::config::validation::validate_config;
use heirloom::config::{ConfigLoader, HeirloomConfig, StorageBackend};
use heirloom::prelude::*;

pub struct HeirloomCliContext {
    pub manager: ArchiveManager,
}

impl HeirloomCliContext {
    /// Open the archive described by the default config files, `HEIRLOOM_*`
    /// variables, an optional extra config file and an optional archive path.
    pub async fn new(archive: Option<PathBuf>, config_file: Option<PathBuf>) -> heirloom::Result<Self> {
        let config = load_config(archive, config_file)?;
        Self::from_config(config).await
    }

    pub async fn from_config(config: HeirloomConfig) -> heirloom::Result<Self> {
        let manager = heirloom::init(config).await?;
        Ok(Self { manager })
    }
}

pub fn load_config(
    archive: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> heirloom::Result<HeirloomConfig> {
    let mut loader = ConfigLoader::new();
    loader.load_default_files();
    if let Some(path) = config_file {
        loader.load_file(path)?;
    }
    loader.load_env();

    let mut config = loader.extract()?;
    if let Some(path) = archive {
        config.storage.backend = StorageBackend::Archive;
        config.storage.archive_path = Some(path);
        validate_config(&config)?;
    }
    Ok(config)
}
