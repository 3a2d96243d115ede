//! Helpers shared by the workspace binaries: environment lookup and TOML configuration.

pub mod config;
pub mod env;
