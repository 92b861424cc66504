use std::path::PathBuf;

/// Errors surfaced by the game engine itself.
///
/// A full column is deliberately absent here: dropping into a full column is
/// a normal outcome (`MoveOutcome::Ignored`), not a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board {width}x{height} cannot fit four in a row in any direction")]
    InvalidDimension { width: usize, height: usize },

    #[error("column {column} is out of range for a board {width} columns wide")]
    InvalidColumn { column: usize, width: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range for a board 7 columns wide"
        );
    }

    #[test]
    fn test_invalid_dimension_display() {
        let err = GameError::InvalidDimension { width: 3, height: 3 };
        assert_eq!(
            err.to_string(),
            "board 3x3 cannot fit four in a row in any direction"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("width must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: width must be > 0");
    }
}
