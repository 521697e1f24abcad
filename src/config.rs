use std::path::Path;

use crate::error::ConfigError;

/// Puzzle parameters for the demo binary, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Number of coins in the row.
    pub coins: usize,
    /// Number of coins turned over by one move.
    pub flips_per_move: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            coins: 7,
            flips_per_move: 3,
        }
    }
}

impl PuzzleConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: PuzzleConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values. The rules are the ones the puzzle
    /// constructor enforces, checked here so a bad file fails with a
    /// readable message before any state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coins == 0 {
            return Err(ConfigError::Validation("coins must be > 0".into()));
        }
        if self.flips_per_move == 0 {
            return Err(ConfigError::Validation(
                "flips_per_move must be > 0".into(),
            ));
        }
        if self.flips_per_move > self.coins {
            return Err(ConfigError::Validation(format!(
                "flips_per_move ({}) must be <= coins ({})",
                self.flips_per_move, self.coins
            )));
        }
        Ok(())
    }

    /// The default configuration rendered as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default())
            .expect("default config serializes to TOML")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = PuzzleConfig::default();
        assert_eq!(config.coins, 7);
        assert_eq!(config.flips_per_move, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_coins() {
        let mut config = PuzzleConfig::default();
        config.coins = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_flips() {
        let mut config = PuzzleConfig::default();
        config.flips_per_move = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_more_flips_than_coins() {
        let mut config = PuzzleConfig::default();
        config.coins = 5;
        config.flips_per_move = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            PuzzleConfig::load_or_default(Path::new("nonexistent_puzzle.toml")).unwrap();
        assert_eq!(config.coins, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "coins = 9").unwrap();

        let config = PuzzleConfig::load(&path).unwrap();
        assert_eq!(config.coins, 9);
        // Missing keys fall back to defaults.
        assert_eq!(config.flips_per_move, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "coins = 2\nflips_per_move = 5").unwrap();

        assert!(matches!(
            PuzzleConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = PuzzleConfig::default_toml();
        let config: PuzzleConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
