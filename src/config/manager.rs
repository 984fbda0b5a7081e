use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MODEL};
use crate::language::{self, LanguagePair};
use crate::paths;

/// Environment variable consulted when the config file names no other.
pub const DEFAULT_KEY_ENV: &str = "GEMINI_API_KEY";

/// The `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key stored directly in the config file (discouraged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_env: Option<String>,
    /// Model identifier appended to the base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Base URL of the generateContent endpoint family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Attempt budget for each submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

impl ApiConfig {
    /// Resolves the API key: the configured environment variable (or
    /// `GEMINI_API_KEY` when none is named) first, then the key stored in
    /// the file. Empty values are treated as unset.
    pub fn resolve_key(&self) -> Option<String> {
        let env_name = self.key_env.as_deref().unwrap_or(DEFAULT_KEY_ENV);
        if let Ok(key) = std::env::var(env_name)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.key.clone().filter(|key| !key.is_empty())
    }
}

/// The `[defaults]` section: startup language selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// The complete config file, `~/.config/glot/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// CLI overrides; each takes precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub retries: Option<u32>,
}

/// Effective settings after merging CLI options, the config file, and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` when no credential is configured anywhere. Not an error here:
    /// the orchestrator surfaces it as a configuration rejection.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_retries: u32,
    pub languages: LanguagePair,
}

/// Merges CLI options with the config file.
///
/// # Errors
///
/// Returns an error if a selected language code is not in the registry.
pub fn resolve_config(options: &ResolveOptions, file: &ConfigFile) -> Result<ResolvedConfig> {
    let defaults = language::default_pair()?;

    let source = options
        .from
        .clone()
        .or_else(|| file.defaults.source.clone())
        .unwrap_or(defaults.source);
    let target = options
        .to
        .clone()
        .or_else(|| file.defaults.target.clone())
        .unwrap_or(defaults.target);
    language::validate_language(&source)?;
    language::validate_language(&target)?;

    Ok(ResolvedConfig {
        api_key: file.api.resolve_key(),
        model: options
            .model
            .clone()
            .or_else(|| file.api.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        base_url: file
            .api
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        max_retries: options
            .retries
            .or(file.api.max_retries)
            .unwrap_or(DEFAULT_MAX_RETRIES),
        languages: LanguagePair { source, target },
    })
}

/// Loads and saves the config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            api: ApiConfig {
                key: None,
                key_env: Some("MY_KEY_VAR".to_string()),
                model: Some("gemini-test".to_string()),
                base_url: None,
                max_retries: Some(5),
            },
            defaults: DefaultsConfig {
                source: Some("hi".to_string()),
                target: Some("en".to_string()),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.api.key_env, Some("MY_KEY_VAR".to_string()));
        assert_eq!(loaded.api.model, Some("gemini-test".to_string()));
        assert_eq!(loaded.api.max_retries, Some(5));
        assert_eq!(loaded.defaults.source, Some("hi".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert!(manager.load_or_default().api.key.is_none());
    }

    #[test]
    #[serial]
    fn test_resolve_key_prefers_named_env_var() {
        // SAFETY: serialized test, test-specific variable
        unsafe { std::env::set_var("GLOT_TEST_KEY", "from-env") };

        let api = ApiConfig {
            key: Some("from-file".to_string()),
            key_env: Some("GLOT_TEST_KEY".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolve_key(), Some("from-env".to_string()));

        // SAFETY: cleanup
        unsafe { std::env::remove_var("GLOT_TEST_KEY") };
    }

    #[test]
    #[serial]
    fn test_resolve_key_falls_back_to_file() {
        // SAFETY: serialized test, test-specific variable
        unsafe { std::env::remove_var("GLOT_TEST_MISSING_KEY") };

        let api = ApiConfig {
            key: Some("from-file".to_string()),
            key_env: Some("GLOT_TEST_MISSING_KEY".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolve_key(), Some("from-file".to_string()));

        let empty = ApiConfig {
            key_env: Some("GLOT_TEST_MISSING_KEY".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(empty.resolve_key(), None);
    }

    #[test]
    fn test_resolve_config_built_in_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(resolved.languages.source, "en");
        assert_eq!(resolved.languages.target, "ta");
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let file = ConfigFile {
            api: ApiConfig {
                model: Some("file-model".to_string()),
                max_retries: Some(2),
                ..ApiConfig::default()
            },
            defaults: DefaultsConfig {
                source: Some("hi".to_string()),
                target: Some("te".to_string()),
            },
        };
        let options = ResolveOptions {
            from: Some("ta".to_string()),
            to: None,
            model: Some("cli-model".to_string()),
            retries: Some(7),
        };

        let resolved = resolve_config(&options, &file).unwrap();

        assert_eq!(resolved.languages.source, "ta"); // CLI wins
        assert_eq!(resolved.languages.target, "te"); // file fills the gap
        assert_eq!(resolved.model, "cli-model");
        assert_eq!(resolved.max_retries, 7);
    }

    #[test]
    fn test_resolve_config_rejects_unknown_language() {
        let options = ResolveOptions {
            from: Some("xx".to_string()),
            ..ResolveOptions::default()
        };

        let result = resolve_config(&options, &ConfigFile::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("xx"));
    }
}
