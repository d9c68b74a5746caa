use crate::{Error, Result};
use cocina_engine::DEFAULT_PAGE_SIZE;
use cocina_extract::DEFAULT_TIMEOUT_SECS;
use cocina_types::UserId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const DATABASE_FILE: &str = "cocina.db";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. COCINA_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.cocina
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("COCINA_PATH")
        && !env_path.trim().is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("cocina"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cocina"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Remote extraction service; pages are parsed locally when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ExtractorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// User to act as: explicit flag, then config, then `$USER`, then "default".
    pub fn resolve_user(&self, explicit: Option<&str>) -> UserId {
        let from_env = std::env::var("USER").ok();
        [explicit, self.default_user.as_deref(), from_env.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .map(UserId::new)
            .unwrap_or_else(|| UserId::new("default"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.extractor.timeout_secs, 10);
        assert!(config.extractor.endpoint.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            default_user: Some("alice".to_string()),
            page_size: Some(5),
            extractor: ExtractorConfig {
                endpoint: Some("https://extract.example.com/extract".to_string()),
                timeout_secs: 3,
            },
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "page_size = 0\n\n[extractor]\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.page_size(), 1);
        assert_eq!(loaded.extractor.timeout_secs, 10);
        assert_eq!(loaded.default_user, None);
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "page_size = \"many\"")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_explicit_user_wins() {
        let config = Config {
            default_user: Some("configured".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_user(Some("flag")).as_str(), "flag");
        assert_eq!(config.resolve_user(Some("  ")).as_str(), "configured");
    }

    #[test]
    fn test_explicit_data_dir_is_used_verbatim() -> Result<()> {
        assert_eq!(
            resolve_data_dir(Some("/tmp/cocina-test"))?,
            PathBuf::from("/tmp/cocina-test")
        );
        Ok(())
    }
}
