//! Grid dimensions for a batch of runs.

use serde::{Deserialize, Serialize};
use stack_core::{Grid, GridSizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Size(#[from] GridSizeError),
    #[error("invalid grid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Columns per row
    pub width: usize,
    /// Allocated rows; the stack may never reach past this
    pub height: usize,
}

impl GridConfig {
    /// 10 wide, 100 tall.
    pub fn standard() -> Self {
        Self {
            width: Grid::DEFAULT_WIDTH,
            height: Grid::DEFAULT_HEIGHT,
        }
    }

    /// Classic 10x20 playfield.
    pub fn classic() -> Self {
        Self {
            width: 10,
            height: 20,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero dimensions and grids past [`Grid::MAX_CELLS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::check_dimensions(self.width, self.height)?;
        Ok(())
    }

    /// Panics on dimensions that [`GridConfig::validate`] rejects.
    pub fn new_grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let config = GridConfig::default();
        assert_eq!(config, GridConfig::standard());
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 100);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = GridConfig::from_json(r#"{"height": 40}"#).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 40);
    }

    #[test]
    fn test_from_json_rejects_zero() {
        assert!(matches!(
            GridConfig::from_json(r#"{"width": 0}"#),
            Err(ConfigError::Size(GridSizeError::ZeroWidth))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"height": 0}"#),
            Err(ConfigError::Size(GridSizeError::ZeroHeight))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let config = GridConfig {
            width: 4_294_967_296,
            height: 4_294_967_296,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Size(GridSizeError::TooLarge { .. }))
        ));

        let config = GridConfig {
            width: usize::MAX,
            height: 3,
        };
        assert!(config.validate().is_err());

        let err = GridConfig::from_json(r#"{"width": 100000, "height": 100000}"#).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(matches!(
            GridConfig::from_json(r#"{"depth": 3}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_new_grid_dimensions() {
        let grid = GridConfig::classic().new_grid();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height_limit(), 20);
    }
}
