use crate::utils::error::{LabError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["table", "json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// 沒有設定時從空的 store 開始
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    /// JSON 格式日誌，方便機器讀取
    #[serde(default)]
    pub json: bool,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LabError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LabError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn seed_path(&self) -> Option<&str> {
        self.seed.path.as_deref()
    }

    pub fn output_format(&self) -> &str {
        &self.display.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.seed.path {
            validate_path("seed.path", path)?;
        }
        validate_one_of("display.format", &self.display.format, &OUTPUT_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[seed]
path = "data/labs.json"

[display]
format = "csv"

[logging]
verbose = true
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.seed_path(), Some("data/labs.json"));
        assert_eq!(config.output_format(), "csv");
        assert!(config.logging.verbose);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.seed_path(), None);
        assert_eq!(config.output_format(), "table");
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let config = TomlConfig::from_toml_str("[display]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(LabError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[seed\npath = 1"),
            Err(LabError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[seed]\npath = \"labs.json\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed_path(), Some("labs.json"));
    }
}
