use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::RehookConfig;
use crate::xdg;

/// Locate the configuration file
///
/// An explicit path must exist. Without one, the XDG config file is used when
/// present.
pub fn discover_config(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let global_config = xdg::config_file();
    if global_config.is_file() {
        return Ok(Some(global_config));
    }

    Ok(None)
}

/// Loads configuration with discovery support
///
/// Returns Ok(None) if no config is found (neither explicit nor discovered).
pub fn load_config_with_discovery(explicit_path: Option<&Path>) -> Result<Option<RehookConfig>> {
    match discover_config(explicit_path)? {
        Some(path) => {
            debug!(operation = "config.load", path = %path.display(), "using config file");
            Ok(Some(RehookConfig::from_file(&path)?))
        }
        None => {
            debug!(operation = "config.load", status = "miss", "no config file, using defaults");
            Ok(None)
        }
    }
}
