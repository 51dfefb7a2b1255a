use serde::{Deserialize, Serialize};

use snake_engine::config::{ConfigManager, Validate};
use snake_engine::GameSettings;

pub const DEFAULT_CONFIG_FILE: &str = "snake_client_config.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<ClientConfig> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub game: GameSettings,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}
