use std::path::PathBuf;

/// Rejected arguments when building a [`Coins`](crate::state::Coins) state
/// or enumerating flips with
/// [`generate_flips`](crate::state::generate_flips).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("a puzzle needs at least one coin, got {0}")]
    NoCoins(usize),

    #[error("a move must turn over at least one coin, got {0}")]
    NoFlipped(usize),

    #[error("cannot turn over {m} coins when the puzzle only has {n}")]
    MoreFlippedThanCoins { n: usize, m: usize },

    #[error("coin pattern references position {index} outside 0..{n}")]
    PositionOutOfRange { index: usize, n: usize },
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
    fn test_invalid_argument_display() {
        let err = InvalidArgument::MoreFlippedThanCoins { n: 5, m: 10 };
        assert_eq!(
            err.to_string(),
            "cannot turn over 10 coins when the puzzle only has 5"
        );

        let err = InvalidArgument::PositionOutOfRange { index: 6, n: 6 };
        assert_eq!(
            err.to_string(),
            "coin pattern references position 6 outside 0..6"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("coins must be > 0".into());
        assert_eq!(err.to_string(), "config validation error: coins must be > 0");
    }
}
