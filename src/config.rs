use std::path::Path;

use crate::error::ConfigError;
use crate::game::GameState;

/// Board dimensions, loadable from TOML. The only tunables the engine
/// recognizes; everything else (colors, messages, key bindings) belongs to
/// whatever front-end consumes the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        // The classic board
        GameConfig {
            width: 7,
            height: 6,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        GameState::validate_dimensions(self.width, self.height)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.width, 7);
        assert_eq!(config.height, 6);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("width = 9").unwrap();
        assert_eq!(config.width, 9);
        assert_eq!(config.height, 6);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let config = GameConfig { width: 0, height: 6 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unwinnable_board() {
        let config = GameConfig { width: 3, height: 3 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_tall_narrow_board() {
        let config = GameConfig { width: 1, height: 8 };
        config.validate().unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "width = 8\nheight = 7").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 7);
    }

    #[test]
    fn test_load_rejects_invalid_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "width = 2\nheight = 2").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
