use crate::core::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LOG_FORMAT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn verbose(&self) -> bool {
        self.logging.verbose
    }

    fn monitor(&self) -> bool {
        self.monitoring.enabled
    }

    fn log_format(&self) -> &str {
        &self.logging.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[logging]
verbose = true
format = "json"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.verbose());
        assert!(config.monitor());
        assert_eq!(config.log_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.verbose());
        assert!(!config.monitor());
        assert_eq!(config.log_format(), "compact");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PARSER_PATHS_TEST_FORMAT", "json");

        let config = TomlConfig::from_toml_str(
            r#"
[logging]
format = "${PARSER_PATHS_TEST_FORMAT}"
"#,
        )
        .unwrap();
        assert_eq!(config.log_format(), "json");

        std::env::remove_var("PARSER_PATHS_TEST_FORMAT");
    }

    #[test]
    fn test_unset_placeholder_is_kept_and_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[logging]
format = "${PARSER_PATHS_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.log_format(), "${PARSER_PATHS_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[logging\nverbose = 1").unwrap_err();
        assert!(matches!(err, AppError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[monitoring]\nenabled = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.monitor());
    }
}
