// src/config/validate.rs

use crate::config::model::{ConfigFile, ConfigSection, RawConfigFile};
use crate::dag::TaskGraph;
use crate::errors::{DagsimError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DagsimError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_tasks(&raw)?;
        validate_config_section(&raw.config)?;
        let specs = raw
            .task
            .into_iter()
            .map(|mut spec| {
                if spec.label.is_empty() {
                    spec.label = spec.id.clone();
                }
                spec
            })
            .collect();
        let graph = TaskGraph::new(specs)?;
        Ok(ConfigFile::new_unchecked(raw.config, graph))
    }
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(DagsimError::ConfigError(
            "config must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

/// Sanity-check the `[config]` section.
///
/// Also used on CLI overrides, so it is public.
pub fn validate_config_section(section: &ConfigSection) -> Result<()> {
    if section.workers == 0 {
        return Err(DagsimError::ConfigError(
            "[config].workers must be >= 1 (got 0)".to_string(),
        ));
    }

    if !section.tick.is_finite() || section.tick <= 0.0 {
        return Err(DagsimError::ConfigError(format!(
            "[config].tick must be a positive number (got {})",
            section.tick
        )));
    }

    if !section.speed.is_finite() || section.speed <= 0.0 {
        return Err(DagsimError::ConfigError(format!(
            "[config].speed must be a positive number (got {})",
            section.speed
        )));
    }

    if section.tick_interval_ms == 0 {
        return Err(DagsimError::ConfigError(
            "[config].tick_interval_ms must be >= 1 (got 0)".to_string(),
        ));
    }

    if section.max_steps == 0 {
        return Err(DagsimError::ConfigError(
            "[config].max_steps must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
