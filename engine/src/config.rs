use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use crate::games::BotType;
use crate::games::tictactoe::TicTacToeSettings;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub bot: BotType,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            bot: BotType::Minimax,
            seed: None,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        TicTacToeSettings::from(self).validate()
    }
}

impl EngineConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Loads the config file at `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let content = self.to_yaml_string()?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }
}
