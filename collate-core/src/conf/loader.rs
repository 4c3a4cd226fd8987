use crate::conf::error::ConfigError;
use crate::conf::types::CollateConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Read, parse and validate a `collate.hcl` file.
pub fn load_config(path: &Path) -> Result<CollateConfig, ConfigError> {
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(&src, path)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: &Path) -> Result<CollateConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CollateConfig::default());
    }
    load_config(path)
}

pub fn parse_config(src: &str, path: &Path) -> Result<CollateConfig, ConfigError> {
    let cfg: CollateConfig = hcl::from_str(src).map_err(|e| ConfigError::parse(path, e))?;
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn validate_config(cfg: &CollateConfig) -> Result<(), ConfigError> {
    if cfg.tail.poll_interval_ms == 0 {
        return Err(ConfigError::invalid(
            "tail.poll_interval_ms",
            "must be greater than zero",
        ));
    }

    if cfg.dashboard.refresh_ms == 0 {
        return Err(ConfigError::invalid(
            "dashboard.refresh_ms",
            "must be greater than zero",
        ));
    }

    if cfg.dashboard.max_hexes == 0 {
        return Err(ConfigError::invalid(
            "dashboard.max_hexes",
            "must be at least 1",
        ));
    }

    if cfg.dashboard.max_messages == 0 {
        return Err(ConfigError::invalid(
            "dashboard.max_messages",
            "must be at least 1",
        ));
    }

    Ok(())
}

/// The command-line path wins over the config file.
pub fn resolve_log_file(
    cfg: &CollateConfig,
    cli: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    cli.or_else(|| cfg.tail.log_file.clone())
        .ok_or(ConfigError::MissingLogFile)
}
