use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("{field} must be positive")]
    NotPositive { field: &'static str },
}

/// Parameters of a game and of the AI playing it.
///
/// Missing fields take their default values when deserialized, so a
/// configuration file only needs to list what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of stones in a row needed to win.
    pub win_length: usize,
    /// Search depth in plies.
    pub search_depth: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 7,
            win_length: 4,
            search_depth: 4,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("rows", self.rows),
            ("cols", self.cols),
            ("win_length", self.win_length),
            ("search_depth", self.search_depth),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::NotPositive { field });
            }
        }
        Ok(())
    }

    /// Returns `true` if a winning run fits on the board in every direction,
    /// diagonals included.
    ///
    /// Not enforced by [`GameConfig::validate`]: a longer run only rules out
    /// wins along the directions it does not fit in.
    #[must_use]
    pub fn win_length_fits(&self) -> bool {
        self.win_length <= self.rows.min(self.cols)
    }

    /// Returns `true` if a winning run fits along at least one direction.
    ///
    /// When this is `false` every game ends in a draw.
    #[must_use]
    pub fn win_is_possible(&self) -> bool {
        self.win_length <= self.rows.max(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.win_length_fits());
        assert!(config.win_is_possible());
    }

    #[test]
    fn test_validation_rejects_zero_fields() {
        let config = GameConfig {
            cols: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "cols" })
        );

        let config = GameConfig {
            search_depth: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "search_depth"
            })
        );
    }

    #[test]
    fn test_oversized_win_length_is_valid_but_does_not_fit() {
        let config = GameConfig {
            rows: 3,
            win_length: 4,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.win_length_fits());
        assert!(config.win_is_possible());

        let config = GameConfig {
            rows: 3,
            cols: 3,
            win_length: 4,
            ..GameConfig::default()
        };
        assert!(!config.win_length_fits());
        assert!(!config.win_is_possible());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "rows": 8, "win_length": 5 }"#).unwrap();
        assert_eq!(
            config,
            GameConfig {
                rows: 8,
                win_length: 5,
                ..GameConfig::default()
            }
        );

        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
