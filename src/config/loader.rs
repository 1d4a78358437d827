// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** build or
/// validate the task graph. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_str(&contents)
}

/// Parse TOML text into a `RawConfigFile`.
pub fn parse_str(contents: &str) -> Result<RawConfigFile> {
    let config: RawConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` default functions).
/// - Checks the `[config]` section and builds the task graph, failing on
///   unknown dependencies, duplicate ids, bad durations and cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Default config location: `Dagsim.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagsim.toml")
}

/// `Dagsim.toml` inside `dir`, if such a file exists.
pub fn find_default_config(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let path = dir.as_ref().join(default_config_path());
    path.is_file().then_some(path)
}
