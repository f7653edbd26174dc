//! Game configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::story::Script;
use game_rules::{LevelProgression, DEFAULT_LIVES, DEFAULT_SAVE_PATH};

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything tunable about a game. Missing keys take their defaults.
///
/// ```toml
/// save_path = "salvataggio_gioco.json"
/// starting_lives = 5
/// levels = ["level_1", "level_2"]
///
/// [script]
/// intro = ["..."]
/// level0 = ["...", "Who are you?"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub save_path: PathBuf,
    pub starting_lives: u32,
    pub levels: Vec<String>,
    pub script: Script,
}

impl GameConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.save_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("save_path is empty".into()));
        }
        if self.levels.is_empty() {
            return Err(ConfigError::Invalid("at least one level is required".into()));
        }
        if self.script.level0.is_empty() {
            return Err(ConfigError::Invalid(
                "script.level0 needs at least the name prompt".into(),
            ));
        }
        Ok(())
    }

    pub fn level_progression(&self) -> LevelProgression {
        LevelProgression::new(self.levels.clone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            starting_lives: DEFAULT_LIVES,
            levels: LevelProgression::default().levels().to_vec(),
            script: Script::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.save_path, PathBuf::from("salvataggio_gioco.json"));
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.level_progression().len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_toml_str(
            r#"
            starting_lives = 3

            [script]
            level0 = ["Name?"]
            "#,
        )
        .unwrap();

        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.script.level0, vec!["Name?"]);
        assert_eq!(config.script.intro, Script::default().intro);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            GameConfig::from_toml_str("levels = []"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("save_path = \"\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("[script]\nlevel0 = []"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("starting_lives = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "levels = [\"cave\", \"tower\"]").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.levels, vec!["cave", "tower"]);

        let missing = GameConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
