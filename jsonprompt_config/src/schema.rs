use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "jsonprompt";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Cosmetic pause before a conversion is printed.
    #[serde(default = "ConverterConfig::default_processing_delay_ms")]
    pub processing_delay_ms: u64,
    #[serde(default)]
    pub enhance_by_default: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: Self::default_processing_delay_ms(),
            enhance_by_default: false,
        }
    }
}

impl ConverterConfig {
    const fn default_processing_delay_ms() -> u64 {
        800
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Where saved files go; the working directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(default = "ExportConfig::default_file_name")]
    pub file_name: String,
    /// Shell command receiving the JSON on stdin, overriding clipboard detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard_command: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: Self::default_file_name(),
            clipboard_command: None,
        }
    }
}

impl ExportConfig {
    fn default_file_name() -> String {
        "generated-prompt.json".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load `~/jsonprompt/config.json`, falling back to defaults when absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))?;

        Ok(config)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    pub fn write_template(config_path: &Path) -> anyhow::Result<()> {
        // Never clobber an edited config.
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "converter": {
    "processing_delay_ms": 800,
    "enhance_by_default": false
  },
  "export": {
    "file_name": "generated-prompt.json"
  },
  "logging": {
    "level": "info"
  }
}"#;

        std::fs::write(config_path, config_template)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jsonprompt_cfg_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = temp_dir();
        let config = Config::load_from(&dir.join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.converter.processing_delay_ms, 800);
        assert_eq!(config.export.file_name, "generated-prompt.json");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = temp_dir();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"converter": {"enhance_by_default": true}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.converter.enhance_by_default);
        assert_eq!(config.converter.processing_delay_ms, 800);
        assert_eq!(config.logging.level, "info");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_template_matches_defaults_and_is_not_overwritten() {
        let dir = temp_dir();
        let path = dir.join("config.json");
        Config::write_template(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
        assert!(Config::write_template(&path).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = temp_dir();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
