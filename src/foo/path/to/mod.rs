pub mod folder;
pub mod package;
