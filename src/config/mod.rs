pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::{TomlConfig, LOG_FORMATS};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parser-paths")]
#[command(about = "Prints a greeting and runs the callables of the nested foo modules")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Log format: compact or json [default: compact]")]
    pub log_format: Option<String>,

    #[arg(long, help = "List the callables in order without running them")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 套用 TOML 設定；命令列旗標優先
    pub fn merge_file(&mut self, file: &TomlConfig) {
        self.verbose |= file.verbose();
        self.monitor |= file.monitor();
        if self.log_format.is_none() {
            self.log_format = Some(file.log_format().to_string());
        }
    }
}

#[cfg(feature = "cli")]
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config: None,
            verbose: false,
            monitor: false,
            log_format: None,
            dry_run: false,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn monitor(&self) -> bool {
        self.monitor
    }

    fn log_format(&self) -> &str {
        self.log_format.as_deref().unwrap_or("compact")
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_one_of("log_format", self.log_format(), &LOG_FORMATS)
    }
}
