//! Core module for common functionality across all targets

pub mod config;
pub mod gpa;
pub mod models;
pub mod report;
pub mod roster;
pub mod target;

/// Returns the current version of the `GradePath` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
