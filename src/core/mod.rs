pub mod entry;

pub use crate::domain::model::{Callable, Plan, Section};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
