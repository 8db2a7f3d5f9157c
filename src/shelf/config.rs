use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COLUMNS: usize = 3;
const MAX_COLUMNS: usize = 6;
const DEFAULT_CURRENCY: &str = "$";

/// Presentation settings, stored in `config.json`.
///
/// These only change how cards are drawn. Criteria defaults are fixed, so a reset always
/// lands on the same state regardless of configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Cards per grid row (1..=6)
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Draw the purchase action on each card
    #[serde(default = "default_show_purchase")]
    pub show_purchase: bool,

    /// Currency symbol printed before prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

fn default_show_purchase() -> bool {
    true
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            show_purchase: true,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let mut config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        config.set_columns(config.columns);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// Set the grid width, clamped to what fits a terminal
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.clamp(1, MAX_COLUMNS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.columns, 3);
        assert!(config.show_purchase);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_set_columns_clamps() {
        let mut config = ShelfConfig::default();
        config.set_columns(0);
        assert_eq!(config.columns, 1);
        config.set_columns(12);
        assert_eq!(config.columns, 6);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let config = ShelfConfig {
            columns: 2,
            show_purchase: false,
            currency: "€".to_string(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"columns": 40}"#).unwrap();

        let loaded = ShelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.columns, 6);
        assert!(loaded.show_purchase);
        assert_eq!(loaded.currency, "$");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();

        let err = ShelfConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ShelfError::Serialization(_)));
    }
}
