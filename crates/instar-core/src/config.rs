// Rust guideline compliant 2026-02-06

//! Configuration management for Instar.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Instar behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Layer assumed for service names when `--is-normal` is not given.
    #[serde(default = "default_normal")]
    pub default_normal: bool,

    /// Log level for diagnostics written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file to append logs to instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_normal() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            default_normal: default_normal(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `INSTAR_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!("{}: {}", config_path.display(), e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `INSTAR_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `INSTAR_DEFAULT_NORMAL` - Default service layer (true/false)
    /// - `INSTAR_LOG_LEVEL` - Log level (error/warn/info/debug)
    /// - `INSTAR_LOG_FILE` - Log file path
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("INSTAR_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "INSTAR_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("INSTAR_DEFAULT_NORMAL") {
            self.default_normal = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "INSTAR_DEFAULT_NORMAL must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("INSTAR_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("INSTAR_LOG_FILE") {
            self.log_file = (!val.is_empty()).then(|| PathBuf::from(val));
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(crate::Error::InvalidConfig(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(config_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests in this module mutate process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("INSTAR_OUTPUT_FORMAT");
        std::env::remove_var("INSTAR_DEFAULT_NORMAL");
        std::env::remove_var("INSTAR_LOG_LEVEL");
        std::env::remove_var("INSTAR_LOG_FILE");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.default_normal);
        assert_eq!(config.log_level, "warn");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
output_format = "json"
default_normal = false
log_level = "debug"
log_file = "/tmp/instar.log"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.default_normal);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/instar.log")));
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "output_format = ").unwrap();

        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_invalid_log_level() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "log_level = \"loud\"",
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_output_format() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("INSTAR_OUTPUT_FORMAT", "plain");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Plain);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_default_normal() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("INSTAR_DEFAULT_NORMAL", "maybe");
        let result = Config::load(temp_dir.path());
        assert!(result.is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "log_level = \"info\"",
        )
        .unwrap();

        std::env::set_var("INSTAR_LOG_LEVEL", "ERROR");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, "error");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            output_format: OutputFormat::Json,
            default_normal: false,
            log_level: "info".to_string(),
            log_file: None,
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
