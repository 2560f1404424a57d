// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DagError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.generate, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_generate(cfg)?;
    validate_output(cfg)?;
    Ok(())
}

fn validate_generate(cfg: &RawConfigFile) -> Result<()> {
    if cfg.generate.nodes == 0 {
        return Err(DagError::ConfigError(
            "[generate].nodes must be > 0 (got 0)".to_string(),
        ));
    }

    let p = cfg.generate.probability;
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(DagError::ConfigError(format!(
            "[generate].probability must be in [0, 1] (got {p})"
        )));
    }

    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    if cfg.output.dir.as_os_str().is_empty() {
        return Err(DagError::ConfigError(
            "[output].dir must not be empty".to_string(),
        ));
    }

    if cfg.output.rankdir.trim().is_empty() {
        return Err(DagError::ConfigError(
            "[output].rankdir must not be empty".to_string(),
        ));
    }

    // Only matters when we actually shell out.
    if cfg.output.render {
        if cfg.output.renderer.trim().is_empty() {
            return Err(DagError::ConfigError(
                "[output].renderer must not be empty when render = true".to_string(),
            ));
        }
        if cfg.output.format.trim().is_empty() {
            return Err(DagError::ConfigError(
                "[output].format must not be empty when render = true".to_string(),
            ));
        }
    }

    Ok(())
}
