use crate::error::{CloudBuildError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "https://build-api.cloud.unity3d.com/api/v1";

pub const API_URL_ENV: &str = "CLOUDBUILD_API_URL";
pub const CONFIG_DIR_ENV: &str = "CLOUDBUILD_CONFIG_DIR";

/// Client configuration, read from `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudBuildConfig {
    /// Base URL of the Cloud Build REST API, without a trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. Unset means no client-side timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for CloudBuildConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: None,
        }
    }
}

impl CloudBuildConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: CloudBuildConfig = serde_json::from_str(&content)?;
        let url = config.api_url.clone();
        config.set_api_url(&url);
        Ok(config)
    }

    /// Load from the user's config dir, then apply environment overrides.
    pub fn load_effective() -> Result<Self> {
        let mut config = match config_dir() {
            Some(dir) => Self::load(dir)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if url.trim().is_empty() {
                return Err(CloudBuildError::Config(format!("{} is empty", API_URL_ENV)));
            }
            config.set_api_url(&url);
        }
        Ok(config)
    }

    /// Set the API URL (strips trailing slashes)
    pub fn set_api_url(&mut self, url: &str) {
        self.api_url = url.trim().trim_end_matches('/').to_string();
    }
}

/// `$CLOUDBUILD_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "cloudbuild", "cloudbuild").map(|d| d.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CloudBuildConfig::default();
        assert_eq!(config.api_url, "https://build-api.cloud.unity3d.com/api/v1");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_set_api_url_strips_trailing_slash() {
        let mut config = CloudBuildConfig::default();
        config.set_api_url("http://localhost:8080/api/v1/ ");
        assert_eq!(config.api_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CloudBuildConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, CloudBuildConfig::default());
    }

    #[test]
    fn test_load_normalizes_api_url() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"api_url": "http://127.0.0.1:9000/", "timeout_secs": 30}"#,
        )
        .unwrap();

        let loaded = CloudBuildConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.api_url, "http://127.0.0.1:9000");
        assert_eq!(loaded.timeout_secs, Some(30));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"timeout_secs": 5}"#).unwrap();

        let loaded = CloudBuildConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.timeout_secs, Some(5));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = CloudBuildConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CloudBuildError::Serialization(_)));
    }
}
