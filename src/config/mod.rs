// src/config/mod.rs

//! Configuration loading and validation for dagsim.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate driver parameters and build the task graph (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, find_default_config, load_and_validate, load_from_path, parse_str,
};
pub use model::{ConfigFile, ConfigSection, RawConfigFile};
pub use validate::validate_config_section;
