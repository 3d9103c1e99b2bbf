//! Layered configuration for an archive.
//!
//! Later layers win: built-in defaults, the first `heirloom.*` or
//! `.heirloom/config.*` file in the working directory, `config.*` in the
//! platform config directory, any file passed explicitly, then `HEIRLOOM_*`
//! variables (`HEIRLOOM_MATCHING__THRESHOLD=50`).

use super::{
    ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, ENV_SEPARATOR, Result, models::*, validation,
};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions tried for `config.*` in the platform config directory
const PLATFORM_CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Formats an archive config file may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Builds a [`HeirloomConfig`] from defaults, files and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// A loader holding only the built-in defaults (memory storage,
    /// threshold 40, search limit 10).
    pub fn new() -> Self {
        let figment = Figment::new().merge(Serialized::defaults(HeirloomConfig::default()));
        Self { figment }
    }

    /// Layer a TOML, YAML or JSON file over what is loaded so far.
    ///
    /// # Errors
    /// `FileLoadError` when the file is missing or has another extension.
    /// Parse problems surface later from [`extract`](Self::extract).
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let format = FileFormat::from_path(path).ok_or_else(|| {
            ConfigError::FileLoadError(format!("Unsupported file format: {}", path.display()))
        })?;

        debug!(path = %path.display(), ?format, "Layering config file");
        Ok(match format {
            FileFormat::Toml => self.merge(Toml::file(path)),
            FileFormat::Yaml => self.merge(Yaml::file(path)),
            FileFormat::Json => self.merge(Json::file(path)),
        })
    }

    /// Layer the first config file found in the working directory, then the
    /// first `config.*` in the platform config directory. Missing files are
    /// skipped.
    pub fn load_default_files(&mut self) -> &mut Self {
        let local = DEFAULT_CONFIG_FILES.iter().map(PathBuf::from);
        self.load_first_existing(local);

        if let Some(dirs) = directories::ProjectDirs::from("org", "heirloom", "heirloom") {
            let config_dir = dirs.config_dir();
            let platform = PLATFORM_CONFIG_EXTENSIONS
                .iter()
                .map(|ext| config_dir.join(format!("config.{ext}")));
            self.load_first_existing(platform);
        }

        self
    }

    fn load_first_existing(&mut self, candidates: impl IntoIterator<Item = PathBuf>) {
        for path in candidates {
            if path.exists() && self.load_file(&path).is_ok() {
                break;
            }
        }
    }

    /// Layer `HEIRLOOM_*` variables; `__` separates section and key.
    pub fn load_env(&mut self) -> &mut Self {
        self.merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
    }

    /// Layer any other figment provider.
    pub fn merge<T: figment::Provider>(&mut self, provider: T) -> &mut Self {
        self.figment = std::mem::take(&mut self.figment).merge(provider);
        self
    }

    /// Resolve the layers into a validated configuration.
    pub fn extract(&self) -> Result<HeirloomConfig> {
        let config: HeirloomConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.toml")), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_path(Path::new("a.yml")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a.json")), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path(Path::new("a.ini")), None);
        assert_eq!(FileFormat::from_path(Path::new("heirloom")), None);
    }
}
