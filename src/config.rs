use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Decimal places used when amounts are formatted for responses.
    pub money_scale: u32,
    /// Run the auto-press spawner before settling.
    pub auto_press: bool,
    pub max_players: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            money_scale: 2,
            auto_press: true,
            max_players: 8,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

const MAX_MONEY_SCALE: u32 = 6;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let money_scale = env_map
            .get("MONEY_SCALE")
            .map(|s| s.as_str())
            .unwrap_or("2")
            .parse::<u32>()
            .ok()
            .filter(|scale| *scale <= MAX_MONEY_SCALE)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "MONEY_SCALE".to_string(),
                    format!("must be an integer from 0 to {}", MAX_MONEY_SCALE),
                )
            })?;

        let auto_press = match env_map
            .get("AUTO_PRESS")
            .map(|s| s.as_str())
            .unwrap_or("true")
        {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "AUTO_PRESS".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        let max_players = env_map
            .get("MAX_PLAYERS")
            .map(|s| s.as_str())
            .unwrap_or("8")
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "MAX_PLAYERS".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        Ok(Config {
            port,
            money_scale,
            auto_press,
            max_players,
        })
    }
}
