// src/core/config_manager.rs
//! Configuration for the remote analysis service

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_EXTRACT_ENDPOINT: &str = "/extract-text";
pub const DEFAULT_ANALYZE_ENDPOINT: &str = "/resume-gap-analysis";
pub const DEFAULT_CONFIG_FILE: &str = "resume-gap.toml";

pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "RESUME_GAP_TIMEOUT_SECS";
pub const ENV_CONFIG_PATH: &str = "RESUME_GAP_CONFIG";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    /// Config file that was read, if any.
    pub source_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceConfig {
    pub api_base_url: String,
    /// No timeout unless configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    pub extract_endpoint: String,
    pub analyze_endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: None,
            extract_endpoint: DEFAULT_EXTRACT_ENDPOINT.to_string(),
            analyze_endpoint: DEFAULT_ANALYZE_ENDPOINT.to_string(),
        }
    }
}

/// On-disk TOML layout; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base_url: Option<String>,
    timeout_seconds: Option<u64>,
    extract_endpoint: Option<String>,
    analyze_endpoint: Option<String>,
}

/// Values supplied on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration: defaults, then file, then environment, then CLI overrides.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        Self::load_with(overrides, |key| std::env::var(key).ok())
    }

    pub fn load_with<F>(overrides: ConfigOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut service = ServiceConfig::default();

        let explicit_path = overrides
            .config_path
            .clone()
            .or_else(|| env(ENV_CONFIG_PATH).map(PathBuf::from));

        let source_file = match explicit_path {
            Some(path) => {
                Self::apply_file(&mut service, &path)?;
                Some(path)
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::apply_file(&mut service, &path)?;
                    Some(path)
                } else {
                    None
                }
            }
        };

        if let Some(url) = env(ENV_API_BASE_URL) {
            service.api_base_url = url;
        }
        if let Some(raw) = env(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of seconds", ENV_TIMEOUT_SECS))?;
            service.timeout_seconds = Some(secs);
        }

        if let Some(url) = overrides.api_url {
            service.api_base_url = url;
        }
        if let Some(secs) = overrides.timeout_seconds {
            service.timeout_seconds = Some(secs);
        }

        service.api_base_url = normalize_base_url(&service.api_base_url)?;
        service.extract_endpoint = normalize_endpoint(&service.extract_endpoint);
        service.analyze_endpoint = normalize_endpoint(&service.analyze_endpoint);
        if service.timeout_seconds == Some(0) {
            service.timeout_seconds = None;
        }

        info!("Using analysis service at {}", service.api_base_url);

        Ok(Self {
            service,
            source_file,
        })
    }

    fn apply_file(service: &mut ServiceConfig, path: &Path) -> Result<()> {
        debug!("Loading configuration file {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(url) = file.api_base_url {
            service.api_base_url = url;
        }
        if file.timeout_seconds.is_some() {
            service.timeout_seconds = file.timeout_seconds;
        }
        if let Some(endpoint) = file.extract_endpoint {
            service.extract_endpoint = endpoint;
        }
        if let Some(endpoint) = file.analyze_endpoint {
            service.analyze_endpoint = endpoint;
        }
        Ok(())
    }
}

impl ServiceConfig {
    pub fn extract_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.extract_endpoint)
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.analyze_endpoint)
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!(
            "API base URL must start with http:// or https://, got '{}'",
            url
        );
    }
    Ok(trimmed.to_string())
}

fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // Isolates tests from a resume-gap.toml in the working directory.
    // The file is removed when the returned handle drops.
    fn empty_file() -> (tempfile::NamedTempFile, ConfigOverrides) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        (file, overrides)
    }

    #[test]
    fn test_empty_config_file_is_removed_after_use() {
        let (file, overrides) = empty_file();
        let path = overrides.config_path.clone().unwrap();
        ConfigManager::load_with(overrides, env_from(&[])).unwrap();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_defaults() {
        let (_file, overrides) = empty_file();
        let config = ConfigManager::load_with(overrides, env_from(&[])).unwrap();
        assert_eq!(config.service.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.service.timeout_seconds, None);
        assert_eq!(
            config.service.analyze_url(),
            "http://127.0.0.1:5000/resume-gap-analysis"
        );
        assert_eq!(config.service.extract_url(), "http://127.0.0.1:5000/extract-text");
    }

    #[test]
    fn test_file_then_env_then_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_url = \"http://file.example\"\ntimeout_seconds = 30\nanalyze_endpoint = \"match\""
        )
        .unwrap();

        let overrides = ConfigOverrides {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = ConfigManager::load_with(overrides.clone(), env_from(&[])).unwrap();
        assert_eq!(config.service.api_base_url, "http://file.example");
        assert_eq!(config.service.timeout_seconds, Some(30));
        assert_eq!(config.service.analyze_endpoint, "/match");

        let env = env_from(&[(ENV_API_BASE_URL, "https://env.example/")]);
        let config = ConfigManager::load_with(overrides.clone(), env).unwrap();
        assert_eq!(config.service.api_base_url, "https://env.example");

        let cli = ConfigOverrides {
            api_url: Some("http://cli.example:8080".to_string()),
            timeout_seconds: Some(5),
            ..overrides
        };
        let env = env_from(&[(ENV_API_BASE_URL, "https://env.example/")]);
        let config = ConfigManager::load_with(cli, env).unwrap();
        assert_eq!(config.service.api_base_url, "http://cli.example:8080");
        assert_eq!(config.service.timeout_seconds, Some(5));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let (_file, base) = empty_file();
        let overrides = ConfigOverrides {
            api_url: Some("ftp://nope".to_string()),
            ..base
        };
        assert!(ConfigManager::load_with(overrides, env_from(&[])).is_err());
    }

    #[test]
    fn test_invalid_timeout_env() {
        let (_file, overrides) = empty_file();
        let env = env_from(&[(ENV_TIMEOUT_SECS, "soon")]);
        assert!(ConfigManager::load_with(overrides, env).is_err());
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let (_file, base) = empty_file();
        let overrides = ConfigOverrides {
            timeout_seconds: Some(0),
            ..base
        };
        let config = ConfigManager::load_with(overrides, env_from(&[])).unwrap();
        assert_eq!(config.service.timeout_seconds, None);
    }

    #[test]
    fn test_unreadable_explicit_file_fails() {
        let overrides = ConfigOverrides {
            config_path: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        assert!(ConfigManager::load_with(overrides, env_from(&[])).is_err());
    }
}
