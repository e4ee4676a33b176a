//! User settings for the budget optimizer
//!
//! Manages the currency symbol, policy thresholds and whether evaluations
//! are recorded in the history log.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::OptimizerPaths;
use crate::error::OptimizerError;
use crate::services::evaluator::{BudgetEvaluator, Thresholds, DEFAULT_CURRENCY_SYMBOL};

/// User settings for the budget optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in messages and reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Policy ratios for the evaluation checks
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Whether evaluations are appended to the history log
    #[serde(default = "default_history_enabled")]
    pub history_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_history_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            thresholds: Thresholds::default(),
            history_enabled: default_history_enabled(),
        }
    }
}

impl Settings {
    /// Build an evaluator from these settings
    pub fn evaluator(&self) -> BudgetEvaluator {
        BudgetEvaluator::new(self.thresholds, self.currency_symbol.clone())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OptimizerPaths) -> Result<Self, OptimizerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                OptimizerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OptimizerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            debug!("no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OptimizerPaths) -> Result<(), OptimizerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            OptimizerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            OptimizerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.thresholds, Thresholds::default());
        assert!(settings.history_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OptimizerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        settings.thresholds.fixed_cost_limit = 0.45;
        settings.history_enabled = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OptimizerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OptimizerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.history_enabled);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OptimizerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, OptimizerError::Config(_)));
    }

    #[test]
    fn test_evaluator_uses_settings() {
        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        let evaluator = settings.evaluator();
        assert_eq!(evaluator.currency_symbol(), "$");
        assert_eq!(evaluator.thresholds(), &settings.thresholds);
    }
}
