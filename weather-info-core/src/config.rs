use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key, configured via `weather-info configure`.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-info", "weather-info-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Resolve the API key: the environment variable wins over the file.
    pub fn resolved_api_key(&self) -> Result<String> {
        resolve_api_key(env::var(API_KEY_ENV).ok(), self.api_key.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<String>) -> Result<String> {
    from_env
        .filter(|k| !k.trim().is_empty())
        .or_else(|| from_file.filter(|k| !k.trim().is_empty()))
        .ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather-info configure` or set {API_KEY_ENV}."
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_when_nothing_is_set() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `weather-info configure`"));
    }

    #[test]
    fn resolve_ignores_blank_values() {
        let err = resolve_api_key(Some("   ".into()), Some(String::new())).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn env_wins_over_file() {
        let key = resolve_api_key(Some("ENV_KEY".into()), Some("FILE_KEY".into()))
            .expect("key must resolve");
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn file_key_is_used_when_env_is_absent() {
        let key = resolve_api_key(None, Some("FILE_KEY".into())).expect("key must resolve");
        assert_eq!(key, "FILE_KEY");
    }

    #[test]
    fn set_api_key_marks_config_as_configured() {
        let mut cfg = Config::default();
        assert!(!cfg.has_api_key());

        cfg.set_api_key("KEY".into());
        assert!(cfg.has_api_key());
    }
}
