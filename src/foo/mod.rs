//! Nested module tree exercised by the entry point.
//!
//! Every leaf module exposes exactly one callable named after the alias the
//! entry point imports it under.

pub mod path;
