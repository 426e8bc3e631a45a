use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Piece, Player, PlayerKind, MAX_DIFFICULTY};

/// Name and mode of one participant. Mode 0 is a human, 1-3 a bot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub mode: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: "Player".to_string(),
            mode: 0,
        }
    }
}

impl PlayerConfig {
    fn player(&self, piece: Piece) -> Result<Player, ConfigError> {
        Ok(Player::new(self.name.clone(), PlayerKind::from_mode(self.mode)?, piece)?)
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long each frame waits for keyboard input.
    pub poll_interval_ms: u64,
    /// Minimum time a bot's move is held back so it can be followed on screen.
    pub bot_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            bot_delay_ms: 400,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Seed for the bots' fallback column choice. Random when unset.
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
    pub ui: UiConfig,
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            player_one: PlayerConfig {
                name: "Player 1".to_string(),
                mode: 0,
            },
            player_two: PlayerConfig {
                name: "Player 2".to_string(),
                mode: 2,
            },
            ui: UiConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, player) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key}.name must not be empty")));
            }
            if player.mode > MAX_DIFFICULTY {
                return Err(ConfigError::Validation(format!(
                    "{key}.mode must be in [0, {MAX_DIFFICULTY}]"
                )));
            }
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Build both players. Player one plays piece one and moves first.
    pub fn players(&self) -> Result<(Player, Player), ConfigError> {
        Ok((
            self.player_one.player(Piece::One)?,
            self.player_two.player(Piece::Two)?,
        ))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
