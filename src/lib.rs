pub mod config;
pub mod core;
pub mod domain;
pub mod foo;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::entry::EntryPoint;
pub use domain::model::{Callable, Plan, Section};
pub use utils::error::{AppError, Result};
