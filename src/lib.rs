//! Shared library for `GradePath`
//! Contains the GPA computation core and supporting modules used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::*;
