//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are constructed at startup and passed explicitly; there is no
//! global settings instance.

mod settings;

pub use settings::*;
