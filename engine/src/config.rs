use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// File-backed YAML config with caching and validation. A missing file yields
/// the default config; a file that fails to parse or validate is an error.
pub struct ConfigManager<TConfig> {
    path: PathBuf,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        if !self.path.exists() {
            return Ok(TConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read config file {}: {}", self.path.display(), e))?;
        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.path.display(), e))?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_engine_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_roundtrip_through_file() {
        let manager: ConfigManager<GameSettings> = ConfigManager::from_yaml_file(get_temp_file_path());

        let settings = GameSettings {
            rows: 20,
            columns: 30,
            tick_interval_ms: 200,
        };
        manager.set_config(&settings).unwrap();

        let loaded = manager.get_config().unwrap();
        assert_eq!(settings, loaded);

        let loaded_again = manager.get_config().unwrap();
        assert_eq!(settings, loaded_again);
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<GameSettings> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "rows: [not a number").unwrap();

        let manager: ConfigManager<GameSettings> = ConfigManager::from_yaml_file(path);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_settings_rejected_on_load() {
        let path = get_temp_file_path();
        std::fs::write(&path, "rows: 0\ncolumns: 15\ntick_interval_ms: 120\n").unwrap();

        let manager: ConfigManager<GameSettings> = ConfigManager::from_yaml_file(path);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_settings_rejected_on_save() {
        let manager: ConfigManager<GameSettings> = ConfigManager::from_yaml_file(get_temp_file_path());
        let settings = GameSettings {
            columns: 2,
            ..GameSettings::default()
        };
        assert!(manager.set_config(&settings).is_err());
    }
}
