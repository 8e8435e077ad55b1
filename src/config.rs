use crate::constants::DEFAULT_BACKEND_URL;
use crate::errors::{RagError, RagResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend_base_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> RagResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| RagError::config_error(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_json::from_str(&config_str)
            .map_err(|e| RagError::config_error(format!("Failed to parse config: {}", e)))?;

        apply_env_overrides(&mut config);
        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        let mut config = Config::default();
        apply_env_overrides(&mut config);
        validate_config(&config)?;

        // Save default config
        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            RagError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| RagError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| RagError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(url) = env::var("RAGCHAT_BACKEND_URL") {
        if !url.is_empty() {
            config.backend_base_url = url;
        }
    }
    if let Ok(level) = env::var("RAGCHAT_LOG_LEVEL") {
        if !level.is_empty() {
            config.log_level = level;
        }
    }
}

fn get_config_path() -> RagResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| RagError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("ragchat").join("config.json"))
}

fn validate_config(config: &Config) -> RagResult<()> {
    if config.backend_base_url.is_empty() {
        return Err(RagError::config_error("Backend base URL is required"));
    }

    if !config.backend_base_url.starts_with("http://")
        && !config.backend_base_url.starts_with("https://")
    {
        return Err(RagError::config_error(
            "Backend base URL must start with http:// or https://",
        ));
    }

    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
    if !LEVELS.contains(&config.log_level.as_str()) {
        return Err(RagError::config_error(format!(
            "Unknown log level: {}",
            config.log_level
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> RagResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| RagError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| RagError::config_error(format!("Failed to write config file: {}", e)))?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_base_url() {
        let mut config = Config::default();
        config.backend_base_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_bad_scheme() {
        let mut config = Config::default();
        config.backend_base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_unknown_log_level() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_roundtrips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            backend_base_url: "http://10.0.0.5:8000".to_string(),
            log_level: "debug".to_string(),
        };

        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let parsed: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(parsed.backend_base_url, config.backend_base_url);
        assert_eq!(parsed.log_level, config.log_level);
    }
}
