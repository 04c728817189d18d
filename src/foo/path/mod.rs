pub mod to;
