use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Callable '{name}' failed: {source}")]
    CallableFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Execution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::TomlError(_)
            | AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::CallableFailed { .. } => ErrorCategory::Execution,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            AppError::TomlError(_) | AppError::ConfigError { .. } => ErrorSeverity::High,
            AppError::CallableFailed { source, .. } | AppError::IoError(source) => {
                // stdout 被關閉 (例如 `| head`) 視為系統層級錯誤
                if source.kind() == std::io::ErrorKind::BrokenPipe {
                    ErrorSeverity::Critical
                } else {
                    ErrorSeverity::High
                }
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML config file"
            }
            ErrorCategory::Io => "Make sure stdout is writable and the config file is readable",
            ErrorCategory::Execution => "Inspect the failing module; later callables were skipped",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting `{}`: {}", field, reason)
            }
            AppError::CallableFailed { name, .. } => {
                format!("`{}` failed, run aborted", name)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
